use std::collections::BTreeMap;

use crate::{Feature, FeatureType, Language};

/// One analysis of a word form: its stem/suffix split and grammatical features.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Inflection {
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub features: BTreeMap<FeatureType, Feature>,
}

impl Inflection {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stem: None,
            suffix: None,
            features: BTreeMap::new(),
        }
    }

    /// Stores `feature` under its type, replacing any feature of that type.
    pub fn add_feature(&mut self, feature: Feature) -> &mut Self {
        self.features.insert(feature.feature_type(), feature);
        self
    }

    pub fn feature(&self, feature_type: FeatureType) -> Option<&Feature> {
        self.features.get(&feature_type)
    }
}

/// A known spelling of a word together with its grammatical features,
/// e.g. one row of a pronoun paradigm.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Form {
    pub value: String,
    #[serde(default)]
    pub features: BTreeMap<FeatureType, Feature>,
}

impl Form {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            features: BTreeMap::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature.feature_type(), feature);
        self
    }

    pub fn feature(&self, feature_type: FeatureType) -> Option<&Feature> {
        self.features.get(&feature_type)
    }
}
