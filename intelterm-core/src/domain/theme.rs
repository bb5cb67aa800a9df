use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named colour palette of the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Green,
    Blue,
    Amber,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Green, ThemeName::Blue, ThemeName::Amber];

    /// Cycle order: green → blue → amber → green
    pub fn next(self) -> Self {
        match self {
            ThemeName::Green => ThemeName::Blue,
            ThemeName::Blue => ThemeName::Amber,
            ThemeName::Amber => ThemeName::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Green => "green",
            ThemeName::Blue => "blue",
            ThemeName::Amber => "amber",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}
