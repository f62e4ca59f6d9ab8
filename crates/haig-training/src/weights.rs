//! Weight perturbation used by the adjuster.
//!
//! Every weight moves by `delta × activation` of its own (slot, feature) pair. The same
//! activations drive the input layer and all hidden layers, so a feature that was "no" in
//! the judged match (activation `0.0`) is never touched.

use std::iter;

use haig_evaluator::{
    forward::Activations,
    weights::{SlotMatrix, WeightTensor},
};

/// Adds `delta × activations[slot][feature]` to each weight of `layer`.
pub fn nudge(layer: &mut SlotMatrix, activations: &Activations, delta: f64) {
    for (row, activation_row) in iter::zip(layer, activations) {
        for (w, a) in iter::zip(row, activation_row) {
            *w += delta * a;
        }
    }
}

/// Applies [`nudge`] to the input layer and every hidden layer of `tensor`.
pub fn nudge_tensor(tensor: &mut WeightTensor, activations: &Activations, delta: f64) {
    nudge(&mut tensor.input, activations, delta);
    for layer in &mut tensor.hidden {
        nudge(layer, activations, delta);
    }
}

#[cfg(test)]
mod tests {
    use haig_core::{Feature, SLOT_COUNT};

    use super::*;

    #[test]
    fn test_nudge_scales_by_activation() {
        let mut layer = [[1.0; Feature::COUNT]; SLOT_COUNT];
        let mut activations = [[0.0; Feature::COUNT]; SLOT_COUNT];
        activations[2][Feature::Speed.index()] = 0.5;
        activations[0][Feature::Circuits.index()] = 1.0;

        nudge(&mut layer, &activations, -0.1);

        assert_eq!(layer[2][Feature::Speed.index()], 1.0 - 0.05);
        assert_eq!(layer[0][Feature::Circuits.index()], 1.0 - 0.1);
        assert_eq!(layer[1], [1.0; Feature::COUNT]);
        assert_eq!(layer[2][Feature::Lift.index()], 1.0);
    }

    #[test]
    fn test_nudge_tensor_touches_every_layer_equally() {
        let mut tensor = WeightTensor::constant(0.0);
        let mut activations = [[0.0; Feature::COUNT]; SLOT_COUNT];
        activations[3][Feature::Distribute.index()] = 2.0;

        nudge_tensor(&mut tensor, &activations, 0.1);

        let expected = 0.1 * 2.0;
        assert_eq!(tensor.input[3][Feature::Distribute.index()], expected);
        for layer in &tensor.hidden {
            assert_eq!(layer[3][Feature::Distribute.index()], expected);
        }
        assert_eq!(tensor.values().filter(|w| *w != 0.0).count(), 6);
    }
}
