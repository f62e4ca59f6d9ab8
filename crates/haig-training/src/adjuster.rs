//! The verdict-driven adjustment loop.

use std::str::FromStr;

use haig_core::{SlotTensor, Strategy};
use haig_evaluator::{
    forward::{self, Evaluation},
    weights::WeightTensor,
};

use crate::weights;

/// Default magnitude of one nudge.
pub const DEFAULT_STEP: f64 = 0.1;

/// Default iteration cap of one adjustment.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// A scout's judgement of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Verdict {
    #[display("good")]
    Good,
    #[display("bad")]
    Bad,
}

impl Verdict {
    #[must_use]
    pub const fn from_bool(good: bool) -> Self {
        if good { Self::Good } else { Self::Bad }
    }

    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized verdict {input:?} (expected good/bad, yes/no or y/n)")]
pub struct InvalidVerdictError {
    pub input: String,
}

impl FromStr for Verdict {
    type Err = InvalidVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" | "yes" | "y" => Ok(Self::Good),
            "bad" | "no" | "n" => Ok(Self::Bad),
            _ => Err(InvalidVerdictError {
                input: s.to_owned(),
            }),
        }
    }
}

/// The adjustment loop gave up before the recommendation settled.
///
/// The partially adjusted weights are dropped in either case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConvergenceError {
    /// The iteration cap was reached.
    #[display(
        "weights did not settle within {iterations} iterations ({verdict} verdict on {})",
        chosen.map_or("no strategy", Strategy::name)
    )]
    IterationCap {
        iterations: usize,
        verdict: Verdict,
        chosen: Option<Strategy>,
    },
    /// A weight or score overflowed to infinity or NaN.
    #[display(
        "weights diverged to a non-finite value after {iterations} iteration(s) ({verdict} verdict on {}); try a smaller step",
        chosen.map_or("no strategy", Strategy::name)
    )]
    Diverged {
        iterations: usize,
        verdict: Verdict,
        chosen: Option<Strategy>,
    },
}

/// Outcome of a successful adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// Adjusted weights, to be persisted by the caller.
    pub weights: WeightTensor,
    /// Number of nudge/re-evaluate rounds performed (at least one).
    pub iterations: usize,
    /// Forward pass of the adjusted weights on the judged match.
    pub evaluation: Evaluation,
}

/// Parameters of the adjustment loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightAdjuster {
    /// Magnitude of one nudge (the sign comes from the verdict)
    pub step: f64,
    /// Maximum number of nudge/re-evaluate rounds
    pub max_iterations: usize,
}

impl Default for WeightAdjuster {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl WeightAdjuster {
    /// Adjusts `weights` after a scout judged the recommendation `chosen` for `slots`.
    ///
    /// `weights` itself is never modified. On success the adjusted copy is returned in the
    /// [`Adjustment`]; on [`ConvergenceError`] the partially adjusted copy is dropped.
    pub fn adjust(
        &self,
        slots: &SlotTensor,
        weights: &WeightTensor,
        chosen: Option<Strategy>,
        verdict: Verdict,
    ) -> Result<Adjustment, ConvergenceError> {
        let delta = if verdict.is_good() {
            self.step
        } else {
            -self.step
        };

        let mut weights = weights.clone();
        let mut evaluation = forward::evaluate(slots, &weights);
        for iteration in 1..=self.max_iterations {
            weights::nudge_tensor(&mut weights, &evaluation.activations, delta);
            evaluation = forward::evaluate(slots, &weights);
            log::debug!(
                "adjust iteration {iteration}: best={:?} score={:.6}",
                evaluation.best,
                evaluation.scores.get(Strategy::ALL[0]),
            );

            if !weights.is_finite() || evaluation.scores.iter().any(|(_, s)| !s.is_finite()) {
                log::warn!("{verdict} verdict diverged at iteration {iteration}");
                return Err(ConvergenceError::Diverged {
                    iterations: iteration,
                    verdict,
                    chosen,
                });
            }

            if is_settled(verdict, chosen, evaluation.best) {
                log::info!(
                    "{verdict} verdict settled after {iteration} iteration(s), now recommending {:?}",
                    evaluation.best
                );
                return Ok(Adjustment {
                    weights,
                    iterations: iteration,
                    evaluation,
                });
            }
        }

        log::warn!(
            "{verdict} verdict did not settle within {} iterations",
            self.max_iterations
        );
        Err(ConvergenceError::IterationCap {
            iterations: self.max_iterations,
            verdict,
            chosen,
        })
    }
}

fn is_settled(verdict: Verdict, chosen: Option<Strategy>, current: Option<Strategy>) -> bool {
    match verdict {
        Verdict::Good => current == chosen,
        Verdict::Bad => current != chosen,
    }
}
