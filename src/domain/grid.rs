use rand::Rng;

use super::{Cell, Marker, Template};

/// Offsets of the eight surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// True iff `(x, y)` lies on a `width` x `height` board.
/// The board has hard edges: nothing wraps around.
pub fn is_in_range(x: isize, y: isize, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}

/// Grid manages the 2D board, stored row-major.
/// A grid is a plain value: clones are fully independent and `step`
/// always builds a new grid instead of touching the old one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid with the template's dimensions and pattern
    pub fn from_template(template: &Template) -> Self {
        let (width, height) = template.dimensions();
        let cells = template
            .rows()
            .iter()
            .flatten()
            .map(|marker| Cell::from(*marker == Marker::Alive))
            .collect();

        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether the cell at a position is alive; off-board positions are dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Flip one cell in place. Returns false and leaves the grid untouched
    /// when the coordinates are off the board.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Count live neighbours among the (up to) eight on-board surrounding cells
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| (x as isize + dx, y as isize + dy))
            .filter(|&(nx, ny)| is_in_range(nx, ny, self.width, self.height))
            .filter(|&(nx, ny)| self.is_alive(nx as usize, ny as usize))
            .count() as u8
    }

    /// State of the cell at `(x, y)` after one step
    pub fn next_cell_state(&self, x: usize, y: usize) -> bool {
        let current = self.get(x, y).unwrap_or_default();
        current.evolve(self.count_live_neighbors(x, y)).is_alive()
    }

    /// Advance one generation. Every cell is computed from `self` only,
    /// into separate storage, so all cells update simultaneously.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| Cell::from(self.next_cell_state(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize the grid using the thread-local generator
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// Randomize the grid, each cell alive with probability `density`.
    /// Out-of-range densities are clamped; NaN counts as 0.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx % self.width, idx / self.width, *cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.toggle(x, y);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(5, 3);
        assert_eq!(grid.dimensions(), (5, 3));
        assert_eq!(grid.iter_cells().count(), 15);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_is_in_range_edges() {
        assert!(is_in_range(0, 0, 3, 2));
        assert!(is_in_range(2, 1, 3, 2));
        assert!(!is_in_range(-1, 0, 3, 2));
        assert!(!is_in_range(0, -1, 3, 2));
        assert!(!is_in_range(3, 0, 3, 2));
        assert!(!is_in_range(0, 2, 3, 2));
    }

    #[test]
    fn test_empty_grid_has_no_neighbors() {
        let grid = Grid::new(6, 4);
        for (x, y, _) in grid.iter_cells() {
            assert_eq!(grid.count_live_neighbors(x, y), 0);
        }
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        // Opposite corners would be neighbours on a torus
        let grid = grid_with(3, 3, &[(2, 2), (2, 0), (0, 2)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_full_grid_neighbor_counts() {
        let mut grid = Grid::new(3, 3);
        grid.randomize_with(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
    }

    #[test]
    fn test_lonely_corner_dies() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        assert!(!grid.next_cell_state(0, 0));
        assert_eq!(grid.step().live_count(), 0);
    }

    #[test]
    fn test_block_is_stable() {
        let grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_step_is_simultaneous() {
        // A vertical blinker turns horizontal; a sequential in-place update
        // would see half-updated neighbours and produce something else.
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(vertical.step(), horizontal);
        assert_eq!(horizontal.step(), vertical);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_flips_one_cell() {
        let original = presets::oscillating();
        let mut grid = Grid::from_template(&original);
        let before = grid.clone();

        assert!(grid.toggle(3, 0));
        for (x, y, cell) in grid.iter_cells() {
            let expected = before.get(x, y).unwrap();
            if (x, y) == (3, 0) {
                assert_eq!(cell, expected.toggle());
            } else {
                assert_eq!(cell, expected);
            }
        }

        assert!(grid.toggle(3, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_out_of_range_is_rejected() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.toggle(2, 0));
        assert!(!grid.toggle(0, 2));
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn test_clone_is_independent() {
        let grid = Grid::new(3, 3);
        let mut copy = grid.clone();
        copy.toggle(1, 1);
        assert!(!grid.is_alive(1, 1));
        assert!(copy.is_alive(1, 1));
    }

    #[test]
    fn test_from_template_row_major() {
        let template = Template::parse("t", "x . .\n. . x").unwrap();
        let grid = Grid::from_template(&template);
        assert_eq!(grid.dimensions(), (3, 2));
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(2, 1));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_randomize_density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10);
        grid.randomize_with(&mut rng, 1.0);
        assert_eq!(grid.live_count(), 100);
        grid.randomize_with(&mut rng, 0.0);
        assert_eq!(grid.live_count(), 0);
        grid.randomize_with(&mut rng, 5.0);
        assert_eq!(grid.live_count(), 100);
        grid.randomize_with(&mut rng, f64::NAN);
        assert_eq!(grid.live_count(), 0);
        grid.randomize(f64::NAN);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(3, 3, &[(0, 0), (1, 1)]);
        grid.clear();
        assert_eq!(grid, Grid::new(3, 3));
    }
}
