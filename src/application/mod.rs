mod board_view;
mod simulation;
mod step_timer;
pub mod settings;

pub use board_view::{BoardView, MAX_CELL_SIZE};
pub use settings::{ConfigError, Settings};
pub use simulation::{RANDOM_DENSITY, Simulation};
pub use step_timer::{MAX_STEPS_PER_TICK, StepTimer};
