//! Human-guided weight adjustment for the strategy model.
//!
//! Training here is not a gradient method. A scout looks at a recommendation and answers
//! "good" or "bad"; the weights are then pushed towards or away from the activations that
//! produced it until the recommendation reacts the way the verdict asks for.
//!
//! # How Adjustment Works
//!
//! 1. **Evaluate** - Run the forward pass to get the current activations
//! 2. **Nudge** - Add `±step × activation` to every input and hidden weight
//! 3. **Re-evaluate** - Score the same match again with the nudged weights
//! 4. **Check** - Stop once the recommendation settles, otherwise go back to 2
//!
//! ```text
//! Verdict (good / bad)
//!     ↓ sign of step
//! Nudge (weights module)
//!     ↓ updated WeightTensor
//! Forward pass (haig-evaluator)
//!     ↓ new recommendation
//! Settled?  ── no ──→ Nudge
//!     ↓ yes
//! Adjustment (caller persists the weights)
//! ```
//!
//! # Stop Conditions
//!
//! - **Good verdict**: settled when the recommendation is still the one that was judged
//! - **Bad verdict**: settled as soon as the recommendation differs from the one that was
//!   judged, including when nothing is recommended any more
//!
//! The loop is capped by [`adjuster::WeightAdjuster::max_iterations`]; reaching the cap,
//! or any weight or score overflowing to a non-finite value, returns a
//! [`adjuster::ConvergenceError`] and no adjusted weights.
//!
//! # Example
//!
//! ```
//! use haig_core::{Feature, PlayStyle, SlotTensor};
//! use haig_evaluator::{forward, weights::WeightTensor};
//! use haig_training::adjuster::{Verdict, WeightAdjuster};
//!
//! let slots = SlotTensor::new([
//!     PlayStyle::default().with(Feature::Turret, true),
//!     PlayStyle::default(),
//!     PlayStyle::default(),
//!     PlayStyle::default(),
//! ]);
//! let weights = WeightTensor::constant(0.5);
//! let chosen = forward::evaluate(&slots, &weights).best;
//!
//! let adjustment = WeightAdjuster::default()
//!     .adjust(&slots, &weights, chosen, Verdict::Good)
//!     .unwrap();
//! assert_eq!(adjustment.iterations, 1);
//! assert_eq!(adjustment.evaluation.best, chosen);
//! ```

pub mod adjuster;
pub mod weights;
