use log::{debug, info, trace, warn};

use super::settings::{ConfigError, Settings, clamp_dimension, clamp_speed};
use super::step_timer::StepTimer;
use crate::domain::{Grid, Marker, Template};

/// Share of cells brought to life by `randomize`
pub const RANDOM_DENSITY: f64 = 0.3;

/// Simulation orchestrates the board.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    width: usize,
    height: usize,
    current_step: u64,
    steps_per_second: f32,
    /// Present exactly while running; stopping drops it
    timer: Option<StepTimer>,
}

impl Simulation {
    /// Create a stopped simulation over an all-dead board
    pub fn new(width: usize, height: usize, steps_per_second: f32) -> Self {
        let (width, height) = (clamp_dimension(width), clamp_dimension(height));
        Self {
            grid: Grid::new(width, height),
            width,
            height,
            current_step: 0,
            steps_per_second: clamp_speed(steps_per_second),
            timer: None,
        }
    }

    /// Create a stopped simulation seeded from a template.
    /// The board takes the template's dimensions, clamped to the supported
    /// range; an oversized template is cropped to its top-left corner.
    pub fn from_template(template: &Template, steps_per_second: f32) -> Self {
        let (template_width, template_height) = template.dimensions();
        let (width, height) = (clamp_dimension(template_width), clamp_dimension(template_height));

        let grid = if (width, height) == (template_width, template_height) {
            Grid::from_template(template)
        } else {
            warn!(
                "template `{}` is {}x{}, cropping to {}x{}",
                template.name(), template_width, template_height, width, height
            );
            Self::cropped(template, width, height)
        };

        Self {
            grid,
            width,
            height,
            current_step: 0,
            steps_per_second: clamp_speed(steps_per_second),
            timer: None,
        }
    }

    fn cropped(template: &Template, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for (y, row) in template.rows().iter().take(height).enumerate() {
            for (x, marker) in row.iter().take(width).enumerate() {
                if *marker == Marker::Alive {
                    grid.toggle(x, y);
                }
            }
        }
        grid
    }

    /// Build the initial simulation described by settings
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let simulation = match settings.seed_template()? {
            Some(template) => {
                let (width, height) = template.dimensions();
                if (width, height) != (settings.width, settings.height) {
                    debug!(
                        "template `{}` is {}x{}, overriding configured {}x{}",
                        template.name(), width, height, settings.width, settings.height
                    );
                }
                Self::from_template(&template, settings.steps_per_second)
            }
            None => Self::new(settings.width, settings.height, settings.steps_per_second),
        };
        Ok(simulation)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn current_step(&self) -> u64 {
        self.current_step
    }

    pub const fn steps_per_second(&self) -> f32 {
        self.steps_per_second
    }

    pub const fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The active timer, if running
    pub fn timer(&self) -> Option<&StepTimer> {
        self.timer.as_ref()
    }

    /// Advance one generation. Used by both manual and automatic stepping.
    pub fn step(mut self) -> Self {
        self.advance();
        self
    }

    fn advance(&mut self) {
        self.grid = self.grid.step();
        self.current_step += 1;
        trace!("step {} ({} alive)", self.current_step, self.grid.live_count());
    }

    /// Flip one cell; off-board coordinates are ignored
    pub fn toggle_cell(mut self, x: usize, y: usize) -> Self {
        if !self.grid.toggle(x, y) {
            debug!("ignored toggle outside the {}x{} board at ({x}, {y})", self.width, self.height);
        }
        self
    }

    /// Change both dimensions; the board is rebuilt all-dead
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
        self.grid = Grid::new(self.width, self.height);
        info!("board resized to {}x{}", self.width, self.height);
        self
    }

    pub fn set_width(self, width: usize) -> Self {
        let height = self.height;
        self.resize(width, height)
    }

    pub fn set_height(self, height: usize) -> Self {
        let width = self.width;
        self.resize(width, height)
    }

    /// Change the speed; a running timer is swapped for one at the new period
    pub fn set_speed(mut self, steps_per_second: f32) -> Self {
        self.steps_per_second = clamp_speed(steps_per_second);
        if let Some(timer) = self.timer.as_mut() {
            *timer = StepTimer::new(self.steps_per_second);
        }
        info!("speed set to {:.0} steps/s", self.steps_per_second);
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(self, delta: f32) -> Self {
        let speed = self.steps_per_second + delta;
        self.set_speed(speed)
    }

    pub fn start(mut self) -> Self {
        if self.timer.is_none() {
            let timer = StepTimer::new(self.steps_per_second);
            info!("started at step {}, one step every {:.1}ms", self.current_step, timer.period_ms());
            self.timer = Some(timer);
        }
        self
    }

    pub fn stop(mut self) -> Self {
        if self.timer.take().is_some() {
            info!("stopped at step {}", self.current_step);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.stop() } else { self.start() }
    }

    /// Kill every cell; counters and running state are kept
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self
    }

    /// Fill the board at random; counters and running state are kept
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(RANDOM_DENSITY);
        self
    }

    /// Update simulation by one frame.
    /// Runs one step per timer period that elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.advance(delta_time),
            None => return self,
        };
        for _ in 0..due {
            self.advance();
        }
        self
    }
}

impl Default for Simulation {
    fn default() -> Self {
        let settings = Settings::default();
        Self::new(settings.width, settings.height, settings.steps_per_second)
    }
}
