//! The persisted weight document.
//!
//! The document is a JSON object whose layout predates the typed [`WeightTensor`]:
//!
//! ```text
//! {
//!   "input":   [ {feature key: number} x 4 ],        // activations of the last pass
//!   "output":  { strategy description: number },     // scores of the last pass
//!   "weights": {
//!     "input":  [ {feature key: number} x 4 ],
//!     "hidden": [ [ {feature key: number} x 4 ] x 5 ]
//!   }
//! }
//! ```
//!
//! Feature maps are keyed by [`Feature::key`] and the output map by
//! [`Strategy::description`]. Only `weights` is trainable state; `input` and `output` are
//! scratch values kept in the document so existing files stay readable. They are written
//! from the most recent [`Evaluation`] (or zeros) and shape-checked on load, but never fed
//! back into scoring.
//!
//! Converting a document into a [`WeightTensor`] checks every array length, every key set
//! and that every number is finite, and reports the first violation as a [`SchemaError`]
//! naming its path. JSON has no encoding for NaN or infinity, so a document that fails
//! this check must not be written either.

use std::collections::BTreeMap;

use haig_core::{Feature, SLOT_COUNT, SchemaError, Strategy};
use serde::{Deserialize, Serialize};

use crate::{
    forward::{Activations, Evaluation, StrategyScores},
    weights::{HIDDEN_LAYER_COUNT, SlotMatrix, WeightTensor},
};

/// Values for one slot, keyed by feature key.
pub type FeatureMap = BTreeMap<String, f64>;

/// Serialized form of the strategy model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeightDocument {
    pub input: Vec<FeatureMap>,
    pub output: BTreeMap<String, f64>,
    pub weights: WeightSection,
}

/// The trainable part of a [`WeightDocument`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeightSection {
    pub input: Vec<FeatureMap>,
    pub hidden: Vec<Vec<FeatureMap>>,
}

impl WeightDocument {
    /// Builds a document from `weights`.
    ///
    /// The scratch fields are taken from `last_evaluation` when given, and zeroed otherwise.
    #[must_use]
    pub fn new(weights: &WeightTensor, last_evaluation: Option<&Evaluation>) -> Self {
        let (activations, scores) = match last_evaluation {
            Some(evaluation) => (evaluation.activations, evaluation.scores),
            None => (
                [[0.0; Feature::COUNT]; SLOT_COUNT],
                StrategyScores::default(),
            ),
        };
        Self {
            input: matrix_to_maps(&activations),
            output: scores
                .iter()
                .map(|(s, score)| (s.description().to_owned(), score))
                .collect(),
            weights: WeightSection {
                input: matrix_to_maps(&weights.input),
                hidden: weights.hidden.iter().map(matrix_to_maps).collect(),
            },
        }
    }

    /// Validates the whole document and extracts the trainable weights.
    pub fn to_weights(&self) -> Result<WeightTensor, SchemaError> {
        self.scratch()?;

        let input = maps_to_matrix("weights.input", &self.weights.input)?;
        check_len("weights.hidden", HIDDEN_LAYER_COUNT, self.weights.hidden.len())?;
        let mut hidden = [[[0.0; Feature::COUNT]; SLOT_COUNT]; HIDDEN_LAYER_COUNT];
        for (i, (layer, maps)) in hidden.iter_mut().zip(&self.weights.hidden).enumerate() {
            *layer = maps_to_matrix(&format!("weights.hidden[{i}]"), maps)?;
        }
        Ok(WeightTensor { input, hidden })
    }

    /// Validates and returns the scratch activations and scores.
    pub fn scratch(&self) -> Result<(Activations, StrategyScores), SchemaError> {
        let activations = maps_to_matrix("input", &self.input)?;

        if let Some(key) = self
            .output
            .keys()
            .find(|k| Strategy::from_description(k).is_none())
        {
            return Err(SchemaError::UnknownKey {
                path: "output".to_owned(),
                key: key.clone(),
            });
        }
        let mut scores = [0.0; Strategy::COUNT];
        for strategy in Strategy::ALL {
            let key = strategy.description();
            let score = *self
                .output
                .get(key)
                .ok_or_else(|| SchemaError::MissingKey {
                    path: "output".to_owned(),
                    key: key.to_owned(),
                })?;
            scores[strategy.id()] = check_finite("output", key, score)?;
        }

        Ok((activations, StrategyScores::from_array(scores)))
    }
}

fn matrix_to_maps(matrix: &SlotMatrix) -> Vec<FeatureMap> {
    matrix
        .iter()
        .map(|row| {
            Feature::ALL
                .iter()
                .map(|f| (f.key().to_owned(), row[f.index()]))
                .collect()
        })
        .collect()
}

fn maps_to_matrix(path: &str, maps: &[FeatureMap]) -> Result<SlotMatrix, SchemaError> {
    check_len(path, SLOT_COUNT, maps.len())?;
    let mut matrix = [[0.0; Feature::COUNT]; SLOT_COUNT];
    for (slot, (row, map)) in matrix.iter_mut().zip(maps).enumerate() {
        let path = format!("{path}[{slot}]");
        if let Some(key) = map.keys().find(|k| Feature::from_key(k).is_none()) {
            return Err(SchemaError::UnknownKey {
                path,
                key: key.clone(),
            });
        }
        for feature in Feature::ALL {
            let value = map
                .get(feature.key())
                .ok_or_else(|| SchemaError::MissingKey {
                    path: path.clone(),
                    key: feature.key().to_owned(),
                })?;
            row[feature.index()] = check_finite(&path, feature.key(), *value)?;
        }
    }
    Ok(matrix)
}

fn check_finite(path: &str, key: &str, value: f64) -> Result<f64, SchemaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SchemaError::NonFinite {
            path: path.to_owned(),
            key: key.to_owned(),
        })
    }
}

fn check_len(path: &str, expected: usize, found: usize) -> Result<(), SchemaError> {
    if expected == found {
        Ok(())
    } else {
        Err(SchemaError::WrongLength {
            path: path.to_owned(),
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn sample_weights() -> WeightTensor {
        WeightTensor::random(&mut Pcg64Mcg::seed_from_u64(2023))
    }

    #[test]
    fn test_new_document_layout() {
        let document = WeightDocument::new(&sample_weights(), None);
        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(json["input"].as_array().unwrap().len(), 4);
        assert_eq!(json["input"][0]["Other side"], 0.0);
        assert_eq!(json["output"].as_object().unwrap().len(), 6);
        assert_eq!(json["output"][Strategy::Spread.description()], 0.0);
        assert_eq!(json["weights"]["input"].as_array().unwrap().len(), 4);
        assert_eq!(json["weights"]["hidden"].as_array().unwrap().len(), 5);
        assert_eq!(json["weights"]["hidden"][4].as_array().unwrap().len(), 4);
        assert_eq!(
            json["weights"]["hidden"][4][3].as_object().unwrap().len(),
            Feature::COUNT
        );
    }

    #[test]
    fn test_json_round_trip_is_bit_identical() {
        let weights = sample_weights();
        let json = serde_json::to_string(&WeightDocument::new(&weights, None)).unwrap();
        let document: WeightDocument = serde_json::from_str(&json).unwrap();
        let restored = document.to_weights().unwrap();
        for (a, b) in weights.values().zip(restored.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_scratch_comes_from_last_evaluation() {
        let weights = WeightTensor::constant(0.5);
        let slots = haig_core::SlotTensor::new([
            haig_core::PlayStyle::default().with(Feature::Lift, true),
            haig_core::PlayStyle::default(),
            haig_core::PlayStyle::default(),
            haig_core::PlayStyle::default(),
        ]);
        let evaluation = crate::forward::evaluate(&slots, &weights);
        let document = WeightDocument::new(&weights, Some(&evaluation));
        let (activations, scores) = document.scratch().unwrap();
        assert_eq!(activations, evaluation.activations);
        assert_eq!(scores, evaluation.scores);
        assert_eq!(document.input[0]["Lift"], 0.031_25);
    }

    #[test]
    fn test_accepts_integer_scratch_values() {
        let mut json = serde_json::to_value(WeightDocument::new(&sample_weights(), None)).unwrap();
        json["input"][2]["Speed"] = serde_json::json!(0);
        json["output"][Strategy::Braden.description()] = serde_json::json!(0);
        let document: WeightDocument = serde_json::from_value(json).unwrap();
        assert!(document.to_weights().is_ok());
    }

    #[test]
    fn test_rejects_missing_weight_key() {
        let mut document = WeightDocument::new(&sample_weights(), None);
        document.weights.hidden[2][1].remove("Turret");
        assert_eq!(
            document.to_weights().unwrap_err(),
            SchemaError::MissingKey {
                path: "weights.hidden[2][1]".to_owned(),
                key: "Turret".to_owned(),
            }
        );
    }

    #[test]
    fn test_rejects_unknown_weight_key() {
        let mut document = WeightDocument::new(&sample_weights(), None);
        document.weights.input[0].insert("Climb".to_owned(), 0.3);
        assert_eq!(
            document.to_weights().unwrap_err(),
            SchemaError::UnknownKey {
                path: "weights.input[0]".to_owned(),
                key: "Climb".to_owned(),
            }
        );
    }

    #[test]
    fn test_rejects_wrong_layer_count() {
        let mut document = WeightDocument::new(&sample_weights(), None);
        document.weights.hidden.pop();
        assert_eq!(
            document.to_weights().unwrap_err(),
            SchemaError::WrongLength {
                path: "weights.hidden".to_owned(),
                expected: 5,
                found: 4,
            }
        );

        let mut document = WeightDocument::new(&sample_weights(), None);
        document.weights.input.push(FeatureMap::new());
        assert!(matches!(
            document.to_weights().unwrap_err(),
            SchemaError::WrongLength { found: 5, .. }
        ));
    }

    #[test]
    fn test_rejects_bad_scratch() {
        let mut document = WeightDocument::new(&sample_weights(), None);
        document.output.remove(Strategy::Turret.description());
        assert!(matches!(
            document.to_weights().unwrap_err(),
            SchemaError::MissingKey { path, .. } if path == "output"
        ));

        let mut document = WeightDocument::new(&sample_weights(), None);
        document.input[3].remove("Circuits");
        assert!(matches!(
            document.to_weights().unwrap_err(),
            SchemaError::MissingKey { path, .. } if path == "input[3]"
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut weights = sample_weights();
        weights.hidden[1][3][Feature::Speed.index()] = f64::NAN;
        assert_eq!(
            WeightDocument::new(&weights, None).to_weights().unwrap_err(),
            SchemaError::NonFinite {
                path: "weights.hidden[1][3]".to_owned(),
                key: "Speed".to_owned(),
            }
        );

        let mut document = WeightDocument::new(&sample_weights(), None);
        document
            .output
            .insert(Strategy::Aggressive.description().to_owned(), f64::INFINITY);
        assert!(matches!(
            document.to_weights().unwrap_err(),
            SchemaError::NonFinite { path, .. } if path == "output"
        ));
    }

    #[test]
    fn test_rejects_unknown_top_level_field() {
        let mut json = serde_json::to_value(WeightDocument::new(&sample_weights(), None)).unwrap();
        json["bias"] = serde_json::json!([]);
        assert!(serde_json::from_value::<WeightDocument>(json).is_err());
    }
}
