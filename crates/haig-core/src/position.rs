use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidPositionError;

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Alliance {
    Red,
    Blue,
}

/// Seat a team occupies in a match.
///
/// Parsed from labels such as `"Red 1"`, `"red-1"`, `"blue_2"` or `"BLUE2"`: the colour and
/// number are matched case-insensitively, optionally separated by a space, `-` or `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub enum AlliancePosition {
    #[display("Red 1")]
    Red1,
    #[display("Red 2")]
    Red2,
    #[display("Blue 1")]
    Blue1,
    #[display("Blue 2")]
    Blue2,
}

impl AlliancePosition {
    pub const ALL: [Self; 4] = [Self::Red1, Self::Red2, Self::Blue1, Self::Blue2];

    #[must_use]
    pub const fn alliance(self) -> Alliance {
        match self {
            Self::Red1 | Self::Red2 => Alliance::Red,
            Self::Blue1 | Self::Blue2 => Alliance::Blue,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red1 => "Red 1",
            Self::Red2 => "Red 2",
            Self::Blue1 => "Blue 1",
            Self::Blue2 => "Blue 2",
        }
    }
}

impl FromStr for AlliancePosition {
    type Err = InvalidPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "red1" => Ok(Self::Red1),
            "red2" => Ok(Self::Red2),
            "blue1" => Ok(Self::Blue1),
            "blue2" => Ok(Self::Blue2),
            _ => Err(InvalidPositionError {
                label: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for AlliancePosition {
    type Error = InvalidPositionError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<AlliancePosition> for String {
    fn from(position: AlliancePosition) -> Self {
        position.label().to_owned()
    }
}
