use macroquad::prelude::*;

use super::{fill_color, hit};

const STEPPER_WIDTH: f32 = 30.0;

/// Bounded integer field with -/+ steppers
#[derive(Clone)]
pub struct NumberInput {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    value: u32,
    min: u32,
    max: u32,
}

impl NumberInput {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            value: min,
            min,
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set the shown value, clamped to the field's range
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Apply a step of `delta`; returns the new value if it changed
    pub fn nudge(&mut self, delta: i64) -> Option<u32> {
        let next = (i64::from(self.value) + delta).clamp(i64::from(self.min), i64::from(self.max)) as u32;
        (next != self.value).then(|| {
            self.value = next;
            next
        })
    }

    /// Handle clicks on the steppers. Shift steps by 10.
    /// Returns the new value if it changed this frame.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let amount = if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) {
            10
        } else {
            1
        };

        if self.over_decrement(mouse_pos) {
            self.nudge(-amount)
        } else if self.over_increment(mouse_pos) {
            self.nudge(amount)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        for (stepper, hovered) in [
            (self.decrement_rect(), self.over_decrement(mouse_pos)),
            (self.increment_rect(), self.over_increment(mouse_pos)),
        ] {
            draw_rectangle(stepper.x, stepper.y, stepper.w, stepper.h, fill_color(hovered));
        }
        draw_rectangle(
            self.x + STEPPER_WIDTH,
            self.y,
            self.width - 2.0 * STEPPER_WIDTH,
            self.height,
            Color::from_rgba(45, 45, 45, 255),
        );
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        draw_text("-", self.x + 11.0, self.y + 21.0, 20.0, WHITE);
        draw_text("+", self.x + self.width - 20.0, self.y + 21.0, 20.0, WHITE);

        let text = self.value.to_string();
        let measure = measure_text(&text, None, 16, 1.0);
        draw_text(
            &text,
            self.x + (self.width - measure.width) / 2.0,
            self.y + 21.0,
            16.0,
            WHITE,
        );
    }

    fn decrement_rect(&self) -> Rect {
        Rect::new(self.x, self.y, STEPPER_WIDTH, self.height)
    }

    fn increment_rect(&self) -> Rect {
        Rect::new(self.x + self.width - STEPPER_WIDTH, self.y, STEPPER_WIDTH, self.height)
    }

    fn over_decrement(&self, mouse_pos: (f32, f32)) -> bool {
        hit(self.decrement_rect(), mouse_pos)
    }

    fn over_increment(&self, mouse_pos: (f32, f32)) -> bool {
        hit(self.increment_rect(), mouse_pos)
    }
}
