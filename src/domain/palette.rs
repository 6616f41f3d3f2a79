//! Display colors for discrete outcomes.

use super::error::DomainError;

/// Built-in outcome colors, in assignment order.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#00a6c4", "#fbb040", "#ee7968", "#b38fe0", "#8fc85e", "#f0d95c", "#4b6ee6", "#e06bb2",
    "#6b7c93", "#33b290",
];

/// Fixed, ordered color sequence. Outcome `i` gets color `i mod len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyPalette`] if `colors` is empty.
    pub fn try_new(colors: Vec<String>) -> Result<Self, DomainError> {
        if colors.is_empty() {
            return Err(DomainError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Color for the outcome at `index`.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}
