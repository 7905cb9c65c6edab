use serde::{Deserialize, Serialize};

use crate::header::HeaderStyle;

/// Options for reading rows from a workbook.
///
/// Deserializable so it can sit inside a caller's own configuration file;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Worksheet to read. `None` selects the first worksheet in the workbook.
    pub worksheet: Option<String>,

    /// Header normalization style.
    pub header_style: HeaderStyle,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worksheet(mut self, name: impl Into<String>) -> Self {
        self.worksheet = Some(name.into());
        self
    }

    pub fn with_header_style(mut self, style: HeaderStyle) -> Self {
        self.header_style = style;
        self
    }
}
