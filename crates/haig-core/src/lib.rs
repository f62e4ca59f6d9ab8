//! Scouting vocabulary for the Robot-Haig strategy recommender.
//!
//! This crate holds the fixed domain data every other crate builds on:
//!
//! - [`catalog`] - the closed, ordered sets of play-style [`Feature`]s and [`Strategy`]
//!   descriptors
//! - [`play_style`] - [`PlayStyle`], one yes/no answer per feature for a single team
//! - [`position`] - [`AlliancePosition`], the four seats a team can occupy in a match
//! - [`slots`] - [`MatchStyles`] and the slot canonicalization rule producing a [`SlotTensor`]
//!
//! # Example
//!
//! ```
//! use haig_core::{AlliancePosition, Feature, MatchStyles, PlayStyle};
//!
//! let fast = PlayStyle::default().with(Feature::Speed, true);
//! let turret = PlayStyle::default().with(Feature::Turret, true);
//! let styles = MatchStyles {
//!     red1: fast,
//!     red2: PlayStyle::default(),
//!     blue1: turret,
//!     blue2: PlayStyle::default(),
//! };
//!
//! let position: AlliancePosition = "Red 1".parse().unwrap();
//! let slots = styles.canonicalize(position);
//! assert_eq!(slots[0], turret);
//! assert_eq!(slots[2], fast);
//! ```

pub use self::{catalog::*, play_style::*, position::*, slots::*};

pub mod catalog;
pub mod play_style;
pub mod position;
pub mod slots;

/// A play-style record or persisted document does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SchemaError {
    #[display("{path}: missing key {key:?}")]
    MissingKey { path: String, key: String },
    #[display("{path}: unknown key {key:?}")]
    UnknownKey { path: String, key: String },
    #[display("{path}: expected {expected} entries, found {found}")]
    WrongLength {
        path: String,
        expected: usize,
        found: usize,
    },
    #[display("{path}: value of {key:?} is not a finite number")]
    NonFinite { path: String, key: String },
}

/// A position label is not one of the four alliance seats.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized position {label:?} (expected Red 1, Red 2, Blue 1 or Blue 2)")]
pub struct InvalidPositionError {
    pub label: String,
}
