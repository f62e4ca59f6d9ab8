use std::path::Path;

use anyhow::Context;
use haig_evaluator::{document::WeightDocument, forward::Evaluation, weights::WeightTensor};
use rand::Rng;

use crate::util;

const FILE_KIND: &str = "strategy model";

/// Weight tensor of one recommendation or training session, plus the scratch of the last
/// forward pass written alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyModel {
    pub weights: WeightTensor,
    pub last_evaluation: Option<Evaluation>,
}

impl StrategyModel {
    pub fn untrained<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            weights: WeightTensor::random(rng),
            last_evaluation: None,
        }
    }

    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let document: WeightDocument = util::read_json_file(FILE_KIND, path)?;
        let weights = document
            .to_weights()
            .with_context(|| format!("Invalid {FILE_KIND} file: {}", path.display()))?;
        log::debug!("loaded {FILE_KIND} from {}", path.display());
        Ok(Self {
            weights,
            last_evaluation: None,
        })
    }

    pub fn to_document(&self) -> WeightDocument {
        WeightDocument::new(&self.weights, self.last_evaluation.as_ref())
    }

    /// Writes the model to `path`, or to stdout when `path` is `None`.
    ///
    /// Nothing is written when the document would not load back.
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<()> {
        let document = self.to_document();
        document
            .to_weights()
            .with_context(|| format!("Refusing to save an invalid {FILE_KIND}"))?;
        util::write_json_file(FILE_KIND, &document, path)
    }
}

#[cfg(test)]
mod tests {
    use haig_core::{Feature, PlayStyle, SlotTensor};
    use haig_evaluator::forward;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_save_and_open_round_trip_bit_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neural_network.json");
        let model = StrategyModel::untrained(&mut Pcg64Mcg::seed_from_u64(5));

        model.save(Some(&path)).unwrap();
        let loaded = StrategyModel::open(&path).unwrap();

        assert_eq!(loaded.weights, model.weights);
        for (a, b) in model.weights.values().zip(loaded.weights.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_saved_scratch_does_not_affect_loaded_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let weights = WeightTensor::constant(0.75);
        let slots = SlotTensor::new([PlayStyle::from_fn(|f| f != Feature::Lift); 4]);
        let model = StrategyModel {
            last_evaluation: Some(forward::evaluate(&slots, &weights)),
            weights,
        };

        model.save(Some(&path)).unwrap();
        let loaded = StrategyModel::open(&path).unwrap();

        assert_eq!(loaded.weights, WeightTensor::constant(0.75));
        assert_eq!(loaded.last_evaluation, None);
    }

    #[test]
    fn test_open_rejects_incomplete_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut document = StrategyModel::untrained(&mut rand::rng()).to_document();
        document.weights.hidden[0][2].remove("Speed");
        util::write_json_file("test", &document, Some(&path)).unwrap();

        let err = StrategyModel::open(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid strategy model file"));
        assert!(message.contains("weights.hidden[0][2]"));
    }

    #[test]
    fn test_save_refuses_non_finite_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut model = StrategyModel::untrained(&mut Pcg64Mcg::seed_from_u64(8));
        model.save(Some(&path)).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        model.weights.input[1][Feature::OwnSide.index()] = f64::NEG_INFINITY;
        let err = model.save(Some(&path)).unwrap_err();

        assert!(format!("{err:#}").contains("is not a finite number"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StrategyModel::open(dir.path().join("absent.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to open strategy model file"));
    }
}
