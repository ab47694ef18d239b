use macroquad::prelude::*;

use super::{fill_color, hit};

/// Panel button; an accent replaces the idle fill (e.g. Stop while running)
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    caption: &'static str,
    accent: Option<Color>,
}

impl Button {
    pub fn new(rect: Rect, caption: &'static str) -> Self {
        Self { rect, caption, accent: None }
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        hit(self.rect, point)
    }

    /// Fill used this frame
    fn fill(&self, hovered: bool) -> Color {
        match self.accent {
            Some(accent) if !hovered => accent,
            _ => fill_color(hovered),
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, self.fill(self.contains(mouse_pos)));
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(self.caption, None, 20, 1.0);
        draw_text(
            self.caption,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Left click on the button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
