mod button;
mod number_input;

pub use button::Button;
pub use number_input::NumberInput;

use macroquad::prelude::{Color, Rect, screen_height, screen_width, vec2};

use crate::application::BoardView;
use crate::application::settings::{
    MAX_DIMENSION, MAX_STEPS_PER_SECOND, MIN_DIMENSION, MIN_STEPS_PER_SECOND,
};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Gap between the window edge and the board
pub const BOARD_MARGIN: f32 = 10.0;

pub const IDLE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
pub const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
/// Start/Stop fill while the simulation runs
pub const RUNNING_COLOR: Color = Color::new(0.70, 0.25, 0.25, 1.0);

/// Widget fill for the hover state
pub fn fill_color(hovered: bool) -> Color {
    if hovered { HOVER_COLOR } else { IDLE_COLOR }
}

/// Whether a screen point falls inside a widget rectangle
pub fn hit(rect: Rect, point: (f32, f32)) -> bool {
    rect.contains(vec2(point.0, point.1))
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Fit a board of the given dimensions into the board area
pub fn board_view((width, height): (usize, usize)) -> BoardView {
    BoardView::fit(
        width,
        height,
        BOARD_MARGIN,
        BOARD_MARGIN,
        board_area_width() - 2.0 * BOARD_MARGIN,
        board_area_height() - 2.0 * BOARD_MARGIN,
    )
}

/// Panel buttons, in the order `input::process_button_clicks` expects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    StartStop,
    Step,
    Clear,
    Random,
}

impl PanelAction {
    pub const ALL: [PanelAction; 4] = [
        PanelAction::StartStop,
        PanelAction::Step,
        PanelAction::Clear,
        PanelAction::Random,
    ];

    pub fn caption(self, is_running: bool) -> &'static str {
        match self {
            PanelAction::StartStop if is_running => "Stop",
            PanelAction::StartStop => "Start",
            PanelAction::Step => "Increment Step",
            PanelAction::Clear => "Clear",
            PanelAction::Random => "Random",
        }
    }
}

/// Create panel buttons with standard layout
pub fn create_buttons(is_running: bool) -> Vec<(PanelAction, Button)> {
    let px = panel_x();
    PanelAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let y = 200.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
            let button = Button::new(Rect::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT), action.caption(is_running));
            let button = match action {
                PanelAction::StartStop if is_running => button.with_accent(RUNNING_COLOR),
                _ => button,
            };
            (*action, button)
        })
        .collect()
}

/// Width, height and speed fields, top of the panel
pub struct Inputs {
    pub width: NumberInput,
    pub height: NumberInput,
    pub speed: NumberInput,
}

impl Inputs {
    pub fn new(width: usize, height: usize, steps_per_second: f32) -> Self {
        let px = panel_x();
        let (min_dim, max_dim) = (MIN_DIMENSION as u32, MAX_DIMENSION as u32);
        let mut inputs = Self {
            width: NumberInput::new(px, 30.0, PANEL_WIDTH, "Width", min_dim, max_dim),
            height: NumberInput::new(px, 85.0, PANEL_WIDTH, "Height", min_dim, max_dim),
            speed: NumberInput::new(
                px,
                140.0,
                PANEL_WIDTH,
                "Steps per Second",
                MIN_STEPS_PER_SECOND as u32,
                MAX_STEPS_PER_SECOND as u32,
            ),
        };
        inputs.sync(width, height, steps_per_second);
        inputs
    }

    /// Mirror the simulation's current values (keyboard changes included)
    pub fn sync(&mut self, width: usize, height: usize, steps_per_second: f32) {
        self.width.set_value(width as u32);
        self.height.set_value(height as u32);
        self.speed.set_value(steps_per_second.round() as u32);
    }

    /// Follow the panel when the window is resized
    pub fn relayout(&mut self) {
        let px = panel_x();
        self.width.set_position(px, 30.0);
        self.height.set_position(px, 85.0);
        self.speed.set_position(px, 140.0);
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.width.draw(mouse_pos);
        self.height.draw(mouse_pos);
        self.speed.draw(mouse_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_caption_follows_state() {
        assert_eq!(PanelAction::StartStop.caption(false), "Start");
        assert_eq!(PanelAction::StartStop.caption(true), "Stop");
        assert_eq!(PanelAction::Step.caption(true), "Increment Step");
    }
}
