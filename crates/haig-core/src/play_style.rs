use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Feature, SchemaError};

/// Observed play-style of one team: one yes/no answer per catalog [`Feature`].
///
/// Records are keyed by [`Feature::key`] when (de)serialized, and must contain exactly the
/// catalog keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct PlayStyle {
    answers: [bool; Feature::COUNT],
}

impl PlayStyle {
    /// Builds a record by answering every feature with `f`.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Feature) -> bool,
    {
        Self {
            answers: Feature::ALL.map(&mut f),
        }
    }

    /// Returns a copy with `feature` set to `value`.
    #[must_use]
    pub const fn with(mut self, feature: Feature, value: bool) -> Self {
        self.answers[feature.index()] = value;
        self
    }

    #[must_use]
    pub const fn has(&self, feature: Feature) -> bool {
        self.answers[feature.index()]
    }

    /// Iterates `(feature, answer)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, bool)> + '_ {
        Feature::ALL.into_iter().map(|f| (f, self.has(f)))
    }

    /// Number of features answered "yes".
    #[must_use]
    pub fn count_true(&self) -> usize {
        self.answers.iter().filter(|a| **a).count()
    }

    /// Parses a record from a key/answer map, rejecting missing or unknown keys.
    ///
    /// `path` names the record in error messages.
    pub fn from_map(path: &str, map: &BTreeMap<String, bool>) -> Result<Self, SchemaError> {
        if let Some(key) = map.keys().find(|k| Feature::from_key(k).is_none()) {
            return Err(SchemaError::UnknownKey {
                path: path.to_owned(),
                key: key.clone(),
            });
        }
        let mut answers = [false; Feature::COUNT];
        for feature in Feature::ALL {
            let answer = map
                .get(feature.key())
                .ok_or_else(|| SchemaError::MissingKey {
                    path: path.to_owned(),
                    key: feature.key().to_owned(),
                })?;
            answers[feature.index()] = *answer;
        }
        Ok(Self { answers })
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.iter().map(|(f, a)| (f.key().to_owned(), a)).collect()
    }
}

impl TryFrom<BTreeMap<String, bool>> for PlayStyle {
    type Error = SchemaError;

    fn try_from(map: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        Self::from_map("play style", &map)
    }
}

impl From<PlayStyle> for BTreeMap<String, bool> {
    fn from(style: PlayStyle) -> Self {
        style.to_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map(value: bool) -> BTreeMap<String, bool> {
        Feature::ALL
            .iter()
            .map(|f| (f.key().to_owned(), value))
            .collect()
    }

    #[test]
    fn test_from_map_accepts_exact_keys() {
        let mut map = full_map(false);
        map.insert("Turret".to_owned(), true);
        let style = PlayStyle::from_map("red1", &map).unwrap();
        assert!(style.has(Feature::Turret));
        assert_eq!(style.count_true(), 1);
        assert_eq!(style.to_map(), map);
    }

    #[test]
    fn test_from_map_rejects_missing_key() {
        let mut map = full_map(true);
        map.remove("Other side");
        let err = PlayStyle::from_map("blue2", &map).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingKey {
                path: "blue2".to_owned(),
                key: "Other side".to_owned(),
            }
        );
    }

    #[test]
    fn test_from_map_rejects_unknown_key() {
        let mut map = full_map(true);
        map.insert("Climb".to_owned(), true);
        let err = PlayStyle::from_map("red2", &map).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownKey { key, .. } if key == "Climb"));
    }

    #[test]
    fn test_with_and_from_fn_agree() {
        let a = PlayStyle::default()
            .with(Feature::Speed, true)
            .with(Feature::Lift, true);
        let b = PlayStyle::from_fn(|f| matches!(f, Feature::Speed | Feature::Lift));
        assert_eq!(a, b);
        assert_eq!(
            a.iter().filter(|(_, v)| *v).map(|(f, _)| f).collect::<Vec<_>>(),
            vec![Feature::Speed, Feature::Lift]
        );
    }

    #[test]
    fn test_json_uses_feature_keys() {
        let style = PlayStyle::default().with(Feature::OwnSide, true);
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"Side\":true"));
        assert!(json.contains("\"Other side\":false"));
        let parsed: PlayStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, style);
    }

    #[test]
    fn test_json_rejects_incomplete_record() {
        let result = serde_json::from_str::<PlayStyle>(r#"{"Circuits": true}"#);
        assert!(result.is_err());
    }
}
