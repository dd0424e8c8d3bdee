use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A musical style a festival is programmed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Rock,
    Pop,
    Indie,
    HipHop,
    Punk,
    Blues,
    Fusion,
    Jazz,
    Reggae,
    Electronica,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Rock,
        Self::Pop,
        Self::Indie,
        Self::HipHop,
        Self::Punk,
        Self::Blues,
        Self::Fusion,
        Self::Jazz,
        Self::Reggae,
        Self::Electronica,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "ROCK",
            Self::Pop => "POP",
            Self::Indie => "INDIE",
            Self::HipHop => "HIPHOP",
            Self::Punk => "PUNK",
            Self::Blues => "BLUES",
            Self::Fusion => "FUSION",
            Self::Jazz => "JAZZ",
            Self::Reggae => "REGGAE",
            Self::Electronica => "ELECTRONICA",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|style| style.label() == upper)
            .ok_or(Error::UnknownStyle(upper))
    }
}
