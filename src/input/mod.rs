use macroquad::prelude::*;

use crate::application::{BoardView, Simulation};
use crate::ui::{Button, Inputs, PanelAction};

/// Toggle the cell under the cursor on a left click
pub fn handle_cell_click(state: Simulation, view: &BoardView, mouse_pos: (f32, f32)) -> Simulation {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return state;
    }
    match view.screen_to_grid(mouse_pos.0, mouse_pos.1) {
        Some((x, y)) => state.toggle_cell(x, y),
        None => state,
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::Right, Simulation::step),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: Simulation,
    buttons: &[(PanelAction, Button)],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons.iter().fold(state, |s, (action, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        apply_action(s, *action)
    })
}

/// Apply a panel action to the simulation
pub fn apply_action(state: Simulation, action: PanelAction) -> Simulation {
    match action {
        PanelAction::StartStop => state.toggle_running(),
        PanelAction::Step => state.step(),
        PanelAction::Clear => state.clear(),
        PanelAction::Random => state.randomize(),
    }
}

/// Route stepper clicks on the width/height/speed fields
pub fn process_number_inputs(
    mut state: Simulation,
    inputs: &mut Inputs,
    mouse_pos: (f32, f32),
) -> Simulation {
    if let Some(width) = inputs.width.update(mouse_pos) {
        state = state.set_width(width as usize);
    }
    if let Some(height) = inputs.height.update(mouse_pos) {
        state = state.set_height(height as usize);
    }
    if let Some(speed) = inputs.speed.update(mouse_pos) {
        state = state.set_speed(speed as f32);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_apply_action() {
        let sim = Simulation::from_template(&presets::blinker(), 10.0);
        let sim = apply_action(sim, PanelAction::Step);
        assert_eq!(sim.current_step(), 1);
        let sim = apply_action(sim, PanelAction::StartStop);
        assert!(sim.is_running());
        let sim = apply_action(sim, PanelAction::Clear);
        assert_eq!(sim.grid().live_count(), 0);
        assert!(sim.is_running());
    }
}
