// Domain layer - the Life engine
pub mod domain;

// Application layer - simulation state, timing and settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Marker, Template, TemplateError, presets};
pub use application::{BoardView, ConfigError, Settings, Simulation, StepTimer};
pub use ui::{Button, NumberInput};
