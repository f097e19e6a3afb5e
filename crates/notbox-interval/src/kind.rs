//! The interval selector carried through a plot call

use notbox_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which estimator produces the interval half-width
///
/// Parsed from the option tokens `SEM` and `tInterval` (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntervalKind {
    /// 95% interval from the standard error of the mean
    #[default]
    #[serde(rename = "SEM", alias = "sem")]
    Sem,
    /// 95% interval from Student's t distribution with `n - 1` degrees of freedom
    #[serde(rename = "tInterval", alias = "tinterval")]
    TInterval,
}

impl IntervalKind {
    /// The option token for this kind
    pub fn token(&self) -> &'static str {
        match self {
            IntervalKind::Sem => "SEM",
            IntervalKind::TInterval => "tInterval",
        }
    }
}

impl FromStr for IntervalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sem" => Ok(IntervalKind::Sem),
            "tinterval" => Ok(IntervalKind::TInterval),
            _ => Err(Error::UnknownInterval(s.to_string())),
        }
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
