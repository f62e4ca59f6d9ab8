//! Trainable weights of the strategy model.

use haig_core::{Feature, SLOT_COUNT};
use rand::Rng;

/// Number of hidden scaling layers.
pub const HIDDEN_LAYER_COUNT: usize = 5;

/// One value per (slot, feature) pair, indexed `[slot][feature.index()]`.
pub type SlotMatrix = [[f64; Feature::COUNT]; SLOT_COUNT];

/// All trainable weights: one input layer and [`HIDDEN_LAYER_COUNT`] hidden layers.
///
/// The fixed-size arrays guarantee exactly one weight per (slot, feature) pair in every
/// layer. Transient evaluation state lives in [`Evaluation`](crate::forward::Evaluation),
/// never here.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTensor {
    /// Output weights applied to the final activations.
    pub input: SlotMatrix,
    /// Per-layer scaling weights applied to the activations, in order.
    pub hidden: [SlotMatrix; HIDDEN_LAYER_COUNT],
}

impl WeightTensor {
    /// Creates a tensor with every weight set to `value`.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        let layer = [[value; Feature::COUNT]; SLOT_COUNT];
        Self {
            input: layer,
            hidden: [layer; HIDDEN_LAYER_COUNT],
        }
    }

    /// Creates an untrained tensor.
    ///
    /// Every weight is drawn independently and uniformly from `[0.0, 1.0)`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut tensor = Self::constant(0.0);
        for layer in &mut tensor.hidden {
            fill_random(layer, rng);
        }
        fill_random(&mut tensor.input, rng);
        tensor
    }

    /// Returns `true` when no weight is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values().all(f64::is_finite)
    }

    /// Iterates every weight, input layer first, then hidden layers in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(&self.input)
            .chain(&self.hidden)
            .flat_map(|layer| layer.iter().flatten().copied())
    }
}

fn fill_random<R>(layer: &mut SlotMatrix, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for w in layer.iter_mut().flatten() {
        *w = rng.random::<f64>();
    }
}
