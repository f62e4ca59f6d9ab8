//! Fixed feature and strategy catalogs.
//!
//! Both catalogs are closed enumerations with a stable order. The order of
//! [`Feature::ALL`] is the in-memory layout of every per-slot array; documents key
//! features by [`Feature::key`] instead, so the layout is never persisted. The order of
//! [`Strategy::ALL`] is the tie-break order used when scores are equal.

/// A yes/no play-style question asked about one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Feature {
    #[display("Circuits")]
    Circuits,
    #[display("Side")]
    OwnSide,
    #[display("Other side")]
    OtherSide,
    #[display("Turret")]
    Turret,
    #[display("Speed")]
    Speed,
    #[display("Lift")]
    Lift,
    #[display("Distribute")]
    Distribute,
}

impl Feature {
    /// Number of catalog features.
    pub const COUNT: usize = 7;

    /// All features in catalog order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Circuits,
        Self::OwnSide,
        Self::OtherSide,
        Self::Turret,
        Self::Speed,
        Self::Lift,
        Self::Distribute,
    ];

    /// Position of this feature in [`Feature::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key naming this feature in play-style records and weight documents.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Circuits => "Circuits",
            Self::OwnSide => "Side",
            Self::OtherSide => "Other side",
            Self::Turret => "Turret",
            Self::Speed => "Speed",
            Self::Lift => "Lift",
            Self::Distribute => "Distribute",
        }
    }

    /// The question a scout answers for this feature.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::Circuits => "Are they good at circuits?",
            Self::OwnSide => "Do they play on their side of the field?",
            Self::OtherSide => "Do they play on the other side of the field?",
            Self::Turret => "Is their robot a turret-style bot?",
            Self::Speed => "Is their robot fast?",
            Self::Lift => "Does their robot have a fast lift?",
            Self::Distribute => "Does their robot like to distribute cones?",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// A pre-written match strategy that can be recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Strategy {
    #[display("The Braden Strategy")]
    Braden,
    #[display("The Aggressive Strategy")]
    Aggressive,
    #[display("The Stealth Circuit Strategy")]
    StealthCircuit,
    #[display("The Turret Counter Strategy")]
    TurretCounter,
    #[display("The Turret Strategy")]
    Turret,
    #[display("The Spread Strategy")]
    Spread,
}

impl Strategy {
    /// Number of catalog strategies.
    pub const COUNT: usize = 6;

    /// All strategies in catalog (tie-break) order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Braden,
        Self::Aggressive,
        Self::StealthCircuit,
        Self::TurretCounter,
        Self::Turret,
        Self::Spread,
    ];

    /// Numeric id of this strategy, equal to its catalog index.
    #[must_use]
    pub const fn id(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Braden => "The Braden Strategy",
            Self::Aggressive => "The Aggressive Strategy",
            Self::StealthCircuit => "The Stealth Circuit Strategy",
            Self::TurretCounter => "The Turret Counter Strategy",
            Self::Turret => "The Turret Strategy",
            Self::Spread => "The Spread Strategy",
        }
    }

    /// Full descriptor text, `"<name>: <summary>"`.
    ///
    /// This is also the key of the strategy in a weight document's `output` map.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Braden => "The Braden Strategy: A quick circuit, but is easily defended against",
            Self::Aggressive => {
                "The Aggressive Strategy: Deny the other team a circuit by aggressively maintaining \
                 control of the center at the cost of no circuits for your team"
            }
            Self::StealthCircuit => {
                "The Stealth Circuit Strategy: A stealthy circuit that avoids the center of the \
                 field and takes more time to complete"
            }
            Self::TurretCounter => {
                "The Turret Counter Strategy: Defend against a turret-style bot by avoiding the \
                 center of the field and by placing a cone to block the turret"
            }
            Self::Turret => {
                "The Turret Strategy: A turret-style bot that can quickly score a cone without \
                 moving, but can only do so on one junction"
            }
            Self::Spread => {
                "The Spread Strategy: Spread out your team to cover more of the field and to make \
                 it harder for the other team to defend against you, while also getting more \
                 points for owning junctions"
            }
        }
    }

    #[must_use]
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.description() == description)
    }
}

/// Play-style questions in catalog order.
#[must_use]
pub fn questions() -> &'static [Feature] {
    &Feature::ALL
}

/// Strategy descriptors in catalog order.
#[must_use]
pub fn strategies() -> &'static [Strategy] {
    &Strategy::ALL
}
