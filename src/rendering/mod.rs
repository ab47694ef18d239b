use macroquad::prelude::*;

use crate::application::{BoardView, Simulation};
use crate::domain::Grid;
use crate::ui::{Button, Inputs, PanelAction, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board
pub fn draw_grid(grid: &Grid, view: &BoardView) {
    let size = view.cell_size;
    // Lines would swallow tiny cells
    let draw_lines = size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = view.grid_to_screen(x, y);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(sx, sy, size, size, color);
        if draw_lines {
            draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE_COLOR);
        }
    }

    let (board_w, board_h) = view.board_size();
    draw_rectangle_lines(view.offset_x, view.offset_y, board_w, board_h, 2.0, GRAY);
}

/// Highlight the cell a click would toggle
pub fn draw_hover(view: &BoardView, mouse_pos: (f32, f32)) {
    if let Some((x, y)) = view.screen_to_grid(mouse_pos.0, mouse_pos.1) {
        let (sx, sy) = view.grid_to_screen(x, y);
        draw_rectangle_lines(sx, sy, view.cell_size, view.cell_size, 2.0, YELLOW);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with inputs, buttons and status
pub fn draw_controls(
    state: &Simulation,
    inputs: &Inputs,
    buttons: &[(PanelAction, Button)],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    inputs.draw(mouse_pos);
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let px = panel_x();
    let (width, height) = state.dimensions();
    let status_color = if state.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Current Step:", px, 420.0, 16.0, WHITE),
        (
            &format!("{}", state.current_step()),
            px, 442.0, 22.0,
            ALIVE_COLOR,
        ),
        ("Status:", px, 475.0, 16.0, WHITE),
        (
            if state.is_running() { "Running" } else { "Stopped" },
            px, 495.0, 16.0,
            status_color,
        ),
        (
            &format!("Board: {}x{}  Alive: {}", width, height, state.grid().live_count()),
            px, 525.0, 12.0,
            GRAY,
        ),
        ("Click: toggle cell", px, 555.0, 12.0, GRAY),
        ("Space: start/stop", px, 568.0, 12.0, GRAY),
        ("N / Right: step", px, 581.0, 12.0, GRAY),
        ("Up / Down: speed", px, 594.0, 12.0, GRAY),
        ("C: clear  R: random", px, 607.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
