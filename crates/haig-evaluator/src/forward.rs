//! Forward pass: scoring strategies for a canonical slot layout.
//!
//! [`evaluate`] never modifies the [`WeightTensor`]; everything it computes is returned in
//! an [`Evaluation`].

use std::iter;

use haig_core::{Feature, SLOT_COUNT, SlotTensor, Strategy};

use crate::weights::{SlotMatrix, WeightTensor};

/// Activation per (slot, feature) pair, indexed like [`SlotMatrix`].
pub type Activations = SlotMatrix;

/// One score per catalog strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StrategyScores([f64; Strategy::COUNT]);

impl StrategyScores {
    #[must_use]
    pub const fn from_array(scores: [f64; Strategy::COUNT]) -> Self {
        Self(scores)
    }

    #[must_use]
    pub const fn get(&self, strategy: Strategy) -> f64 {
        self.0[strategy.id()]
    }

    /// Iterates `(strategy, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, f64)> + '_ {
        iter::zip(Strategy::ALL, self.0)
    }

    /// Picks the first strategy whose score is strictly greater than every earlier one,
    /// starting from a threshold of `0.0`.
    ///
    /// Returns `None` when no score is positive. Ties go to the earliest strategy in
    /// catalog order.
    #[must_use]
    pub fn best(&self) -> Option<Strategy> {
        let mut best = None;
        let mut best_score = 0.0;
        for (strategy, score) in self.iter() {
            if score > best_score {
                best = Some(strategy);
                best_score = score;
            }
        }
        best
    }
}

/// Result of one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Recommended strategy, if any score is positive.
    pub best: Option<Strategy>,
    pub scores: StrategyScores,
    /// Activations after all hidden passes.
    pub activations: Activations,
}

/// Converts slot answers into initial activations (`1.0` for yes, `0.0` for no).
#[must_use]
pub fn initial_activations(slots: &SlotTensor) -> Activations {
    let mut activations = [[0.0; Feature::COUNT]; SLOT_COUNT];
    for (row, style) in iter::zip(&mut activations, slots.iter()) {
        for (feature, answer) in style.iter() {
            row[feature.index()] = if answer { 1.0 } else { 0.0 };
        }
    }
    activations
}

/// Runs the forward pass for `slots` under `weights`.
#[must_use]
pub fn evaluate(slots: &SlotTensor, weights: &WeightTensor) -> Evaluation {
    let mut activations = initial_activations(slots);

    for layer in &weights.hidden {
        for (row, layer_row) in iter::zip(&mut activations, layer) {
            for (a, w) in iter::zip(row, layer_row) {
                *a *= w;
            }
        }
    }

    let mut scores = [0.0; Strategy::COUNT];
    for score in &mut scores {
        for (row, input_row) in iter::zip(&activations, &weights.input) {
            for (a, w) in iter::zip(row, input_row) {
                *score += a * w;
            }
        }
    }
    let scores = StrategyScores(scores);

    let best = scores.best();
    log::trace!("evaluated slots: best={best:?} scores={scores:?}");
    Evaluation {
        best,
        scores,
        activations,
    }
}
