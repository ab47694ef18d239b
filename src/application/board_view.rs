/// Largest on-screen cell edge in pixels
pub const MAX_CELL_SIZE: f32 = 20.0;

/// BoardView maps between screen pixels and board cells.
/// The board is fitted into the available area, anchored at its top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardView {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_size: f32,
    width: usize,
    height: usize,
}

impl BoardView {
    /// Fit a `width` x `height` board into an `area_width` x `area_height`
    /// region starting at `(offset_x, offset_y)`.
    pub fn fit(
        width: usize,
        height: usize,
        offset_x: f32,
        offset_y: f32,
        area_width: f32,
        area_height: f32,
    ) -> Self {
        let cell_size = (area_width / width.max(1) as f32)
            .min(area_height / height.max(1) as f32)
            .min(MAX_CELL_SIZE)
            .max(1.0);

        Self {
            offset_x,
            offset_y,
            cell_size,
            width,
            height,
        }
    }

    /// Size of the whole board in pixels
    pub fn board_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    /// Convert screen coordinates to the cell under them, if any
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let gx = ((screen_x - self.offset_x) / self.cell_size).floor();
        let gy = ((screen_y - self.offset_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }

        let (gx, gy) = (gx as usize, gy as usize);
        (gx < self.width && gy < self.height).then_some((gx, gy))
    }

    /// Convert grid coordinates to the top-left pixel of that cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (
            grid_x as f32 * self.cell_size + self.offset_x,
            grid_y as f32 * self.cell_size + self.offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_board_uses_max_cell_size() {
        let view = BoardView::fit(4, 4, 0.0, 0.0, 800.0, 600.0);
        assert_eq!(view.cell_size, MAX_CELL_SIZE);
        assert_eq!(view.board_size(), (80.0, 80.0));
    }

    #[test]
    fn test_large_board_shrinks_to_fit() {
        let view = BoardView::fit(100, 50, 0.0, 0.0, 500.0, 600.0);
        assert_eq!(view.cell_size, 5.0);
    }

    #[test]
    fn test_screen_to_grid_round_trip() {
        let view = BoardView::fit(10, 10, 20.0, 30.0, 200.0, 200.0);
        let (sx, sy) = view.grid_to_screen(3, 7);
        assert_eq!(view.screen_to_grid(sx + 1.0, sy + 1.0), Some((3, 7)));
    }

    #[test]
    fn test_screen_to_grid_outside_board() {
        let view = BoardView::fit(10, 10, 20.0, 30.0, 200.0, 200.0);
        assert_eq!(view.screen_to_grid(19.0, 40.0), None);
        assert_eq!(view.screen_to_grid(40.0, 29.0), None);
        assert_eq!(view.screen_to_grid(20.0 + 200.0, 40.0), None);
        assert_eq!(view.screen_to_grid(20.0, 30.0), Some((0, 0)));
    }
}
