use thiserror::Error;

/// A single position in a seed template
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Marker {
    Alive,
    Dead,
}

impl Marker {
    /// Map a textual marker to its meaning, `None` for anything unknown
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "x" | "X" | "o" | "O" | "#" => Some(Marker::Alive),
            "." | "_" | "-" => Some(Marker::Dead),
            _ => None,
        }
    }
}

/// Errors produced while building a template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template `{0}` has no cells")]
    Empty(String),
    #[error("template `{name}` row {row} has {found} cells, expected {expected}")]
    Jagged {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("template `{name}` has unknown marker `{marker}` at row {row}, column {col}")]
    UnknownMarker {
        name: String,
        row: usize,
        col: usize,
        marker: String,
    },
}

/// A rectangular seed pattern, rows top to bottom.
/// Construction guarantees at least one cell and equal-length rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    rows: Vec<Vec<Marker>>,
}

impl Template {
    /// Build a template from rows of markers
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Marker>>) -> Result<Self, TemplateError> {
        let name = name.into();
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(TemplateError::Empty(name)),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(TemplateError::Jagged { name, row, expected, found });
        }

        Ok(Self { name, rows })
    }

    /// Parse a readable pattern: one row per non-blank line,
    /// whitespace-separated markers (`x` alive, `.` dead).
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(|(col, token)| {
                        Marker::from_token(token).ok_or_else(|| TemplateError::UnknownMarker {
                            name: name.clone(),
                            row,
                            col,
                            marker: token.to_owned(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Marker>] {
        &self.rows
    }

    /// (width, height) of the pattern
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows[0].len(), self.rows.len())
    }
}

/// Built-in seed patterns
pub mod presets {
    use super::Template;

    const OSCILLATING: &str = "
        x x . .
        x x . .
        . . x x
        . . x x
    ";

    const BLOCK: &str = "
        . . . .
        . x x .
        . x x .
        . . . .
    ";

    const BLINKER: &str = "
        . . . . .
        . . . . .
        . x x x .
        . . . . .
        . . . . .
    ";

    const TOAD: &str = "
        . . . . . .
        . . . . . .
        . . x x x .
        . x x x . .
        . . . . . .
        . . . . . .
    ";

    const GLIDER: &str = "
        . x . . . . . .
        . . x . . . . .
        x x x . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    ";

    const TABLE: &[(&str, &str)] = &[
        ("oscillating", OSCILLATING),
        ("block", BLOCK),
        ("blinker", BLINKER),
        ("toad", TOAD),
        ("glider", GLIDER),
    ];

    /// Names of every preset, in display order
    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(name, _)| *name)
    }

    /// Look up a preset by name
    pub fn by_name(name: &str) -> Option<Template> {
        TABLE
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .and_then(|(name, text)| Template::parse(*name, text).ok())
    }

    /// Two blocks touching at a corner (a beacon)
    pub fn oscillating() -> Template {
        builtin("oscillating")
    }

    pub fn block() -> Template {
        builtin("block")
    }

    pub fn blinker() -> Template {
        builtin("blinker")
    }

    pub fn toad() -> Template {
        builtin("toad")
    }

    /// Glider heading down-right with room to travel
    pub fn glider() -> Template {
        builtin("glider")
    }

    /// Get all available presets
    pub fn all_templates() -> Vec<Template> {
        names().filter_map(by_name).collect()
    }

    fn builtin(name: &str) -> Template {
        match by_name(name) {
            Some(template) => template,
            None => unreachable!("built-in template `{name}` is malformed"),
        }
    }
}
