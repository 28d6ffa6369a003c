use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Layout of the diagnostic text dump of matrices and vectors.
///
/// The dump is meant for humans; it is not a stable or parseable format.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpStyle {
    /// Minimum column width, values are right-aligned.
    pub width: usize,

    /// Digits after the decimal point for floats. Ignored for integers.
    #[serde(default)]
    pub precision: Option<usize>,
}

impl DumpStyle {
    pub const DEFAULT_WIDTH: usize = 10;

    pub fn new(width: usize, precision: Option<usize>) -> Self {
        Self { width, precision }
    }

    /// Render a single value using this style.
    pub fn cell<T: std::fmt::Display>(&self, value: &T) -> String {
        match self.precision {
            Some(p) => format!("{:>w$.p$}", value, w = self.width, p = p),
            None => format!("{:>w$}", value, w = self.width),
        }
    }
}

impl Default for DumpStyle {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            precision: None,
        }
    }
}

impl FromStr for DumpStyle {
    type Err = String;

    /// Parse `"W"` or `"W.P"`, e.g. `"12.3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (width, precision) = match s.split_once('.') {
            Some((w, p)) => (w, Some(p)),
            None => (s, None),
        };
        let width = width
            .parse::<usize>()
            .map_err(|e| format!("Invalid dump width '{}': {}", width, e))?;
        let precision = match precision {
            Some(p) => Some(
                p.parse::<usize>()
                    .map_err(|e| format!("Invalid dump precision '{}': {}", p, e))?,
            ),
            None => None,
        };
        Ok(DumpStyle { width, precision })
    }
}
