use env_logger::Env;
use log::{info, warn};
use macroquad::prelude::*;
use life_board::{
    Settings, Simulation,
    ui::{self, Inputs},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Settings from disk, or defaults when they cannot be used
fn initial_simulation() -> Simulation {
    let settings = Settings::load().unwrap_or_else(|err| {
        warn!("{err}; using default settings");
        Settings::default()
    });

    Simulation::from_settings(&settings).unwrap_or_else(|err| {
        warn!("{err}; starting with an empty board");
        Simulation::new(settings.width, settings.height, settings.steps_per_second)
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut state = initial_simulation();
    let (width, height) = state.dimensions();
    info!("board {}x{} at {:.0} steps/s", width, height, state.steps_per_second());

    let mut inputs = Inputs::new(width, height, state.steps_per_second());

    loop {
        let mouse_pos = mouse_position();

        inputs.relayout();
        let buttons = ui::create_buttons(state.is_running());

        let view = ui::board_view(state.dimensions());

        // Process input
        state = input::process_number_inputs(state, &mut inputs, mouse_pos);
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::handle_cell_click(state, &view, mouse_pos);
        state = input::process_keyboard_input(state);

        // Timer-driven steps
        state = state.tick(get_frame_time());

        let (width, height) = state.dimensions();
        inputs.sync(width, height, state.steps_per_second());

        // Captions and layout follow this frame's changes
        let buttons = ui::create_buttons(state.is_running());
        let view = ui::board_view(state.dimensions());

        clear_background(BLACK);
        rendering::draw_grid(state.grid(), &view);
        rendering::draw_hover(&view, mouse_pos);
        rendering::draw_controls(&state, &inputs, &buttons, mouse_pos);

        next_frame().await;
    }
}
