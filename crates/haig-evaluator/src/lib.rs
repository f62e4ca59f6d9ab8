//! Strategy scoring for the Robot-Haig recommender.
//!
//! This crate turns the canonical slot layout of a match (see [`haig_core::slots`]) into a
//! score per strategy and picks the recommended one.
//!
//! # How It Works
//!
//! 1. **Activation** - Each (slot, feature) answer becomes an activation of `1.0` or `0.0`
//! 2. **Hidden passes** - Five layers scale every activation by its own hidden weight
//! 3. **Output** - Every strategy sums `activation × input weight` over all slots and features
//! 4. **Selection** - The first strategy with the highest strictly positive score wins
//!
//! ```text
//! SlotTensor (4 × 7 yes/no)
//!     ↓ activation
//! Activations (4 × 7)
//!     ↓ × hidden[0..5]
//! Activations (4 × 7)
//!     ↓ · input weights
//! StrategyScores (6)
//!     ↓ argmax > 0
//! Option<Strategy>
//! ```
//!
//! # Modules
//!
//! - [`weights`] - [`WeightTensor`](weights::WeightTensor), the trainable state
//! - [`forward`] - the forward pass producing an [`Evaluation`](forward::Evaluation)
//! - [`document`] - the JSON weight document and its schema checks
//!
//! # Model Limitations
//!
//! - **No cross-feature mixing**: the hidden passes are 28 independent scalar chains, there
//!   are no biases and no non-linearities
//! - **No per-strategy weights**: every strategy accumulates the same sum, so scores always
//!   tie and the catalog order decides. Only the "something vs. nothing" outcome depends on
//!   the weights
//!
//! Both are properties of the persisted model format and are kept so existing weight
//! documents keep producing the same recommendations.
//!
//! # Example
//!
//! ```
//! use haig_core::{AlliancePosition, Feature, MatchStyles, PlayStyle, Strategy};
//! use haig_evaluator::{forward, weights::WeightTensor};
//!
//! let styles = MatchStyles {
//!     red1: PlayStyle::default().with(Feature::Speed, true),
//!     ..MatchStyles::default()
//! };
//! let slots = styles.canonicalize(AlliancePosition::Red1);
//!
//! let weights = WeightTensor::constant(0.5);
//! let evaluation = forward::evaluate(&slots, &weights);
//! assert_eq!(evaluation.best, Some(Strategy::Braden));
//! assert_eq!(evaluation.scores.get(Strategy::Spread), 0.015625);
//! ```

pub mod document;
pub mod forward;
pub mod weights;
