//! Slot canonicalization: arranging the four teams of a match into scoring slots.
//!
//! Scoring consumes a fixed 4-slot layout rather than real team identities. The
//! assignment depends on which seat the caller occupies:
//!
//! | Caller  | Slot 0 | Slot 1 | Slot 2 | Slot 3 |
//! |---------|--------|--------|--------|--------|
//! | Red 1/2 | Blue 1 | Blue 2 | Red 1  | Red 2  |
//! | Blue 1/2| Red 1  | Red 2  | Blue 1 | Blue 2 |
//!
//! The base layout puts Blue in slots 0-1 and Red in slots 2-3; a Blue caller swaps the
//! two pairs first. A Red caller's own pair therefore lands in slots 2-3 while a Blue
//! caller's own pair lands in slots 0-1. Trained weights depend on this exact layout, so
//! it is kept asymmetric.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Alliance, AlliancePosition, PlayStyle};

/// Number of scoring slots.
pub const SLOT_COUNT: usize = 4;

/// Play-styles of all four teams in a match, by real seat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MatchStyles {
    pub red1: PlayStyle,
    pub red2: PlayStyle,
    pub blue1: PlayStyle,
    pub blue2: PlayStyle,
}

impl MatchStyles {
    #[must_use]
    pub const fn get(&self, position: AlliancePosition) -> &PlayStyle {
        match position {
            AlliancePosition::Red1 => &self.red1,
            AlliancePosition::Red2 => &self.red2,
            AlliancePosition::Blue1 => &self.blue1,
            AlliancePosition::Blue2 => &self.blue2,
        }
    }

    /// Assigns the four records to scoring slots for a caller seated at `position`.
    #[must_use]
    pub const fn canonicalize(&self, position: AlliancePosition) -> SlotTensor {
        let (red1, red2, blue1, blue2) = match position.alliance() {
            Alliance::Red => (self.red1, self.red2, self.blue1, self.blue2),
            Alliance::Blue => (self.blue1, self.blue2, self.red1, self.red2),
        };
        SlotTensor([blue1, blue2, red1, red2])
    }
}

/// Four play-style records in canonical slot order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SlotTensor([PlayStyle; SLOT_COUNT]);

impl SlotTensor {
    #[must_use]
    pub const fn new(slots: [PlayStyle; SLOT_COUNT]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub const fn slots(&self) -> &[PlayStyle; SLOT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayStyle> {
        self.0.iter()
    }
}

impl Index<usize> for SlotTensor {
    type Output = PlayStyle;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.0[slot]
    }
}
