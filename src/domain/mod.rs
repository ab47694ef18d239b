mod cell;
mod grid;
mod template;

pub use cell::Cell;
pub use grid::{Grid, is_in_range};
pub use template::{Marker, Template, TemplateError, presets};
