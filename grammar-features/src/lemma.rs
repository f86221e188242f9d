use std::collections::BTreeMap;

use crate::{Error, Feature, FeatureType, Language, Result};

/// A dictionary headword with its grammatical features.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lemma {
    pub word: String,
    pub language: Language,
    #[serde(default)]
    pub principal_parts: Vec<String>,
    #[serde(default)]
    pub features: BTreeMap<FeatureType, Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
}

impl Lemma {
    pub fn new(
        word: impl Into<String>,
        language: Language,
        principal_parts: Vec<String>,
    ) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(Error::EmptyValue("word"));
        }
        Ok(Self {
            word,
            language,
            principal_parts,
            features: BTreeMap::new(),
            translation: None,
        })
    }

    /// Stores `feature` under its type, replacing any feature of that type.
    pub fn add_feature(&mut self, feature: Feature) -> &mut Self {
        self.features.insert(feature.feature_type(), feature);
        self
    }

    pub fn add_features(&mut self, features: impl IntoIterator<Item = Feature>) -> &mut Self {
        for feature in features {
            self.add_feature(feature);
        }
        self
    }

    pub fn feature(&self, feature_type: FeatureType) -> Option<&Feature> {
        self.features.get(&feature_type)
    }

    /// `word-code-values…`, with feature values in feature-type order.
    pub fn key(&self) -> String {
        std::iter::once(self.word.clone())
            .chain(std::iter::once(self.language.iso_639_3().to_string()))
            .chain(self.features.values().map(Feature::value))
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn add_translation(&mut self, translation: Translation) -> &mut Self {
        self.translation = Some(translation);
        self
    }
}

/// Short meanings of a lemma in another language.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Translation {
    pub lemma_key: String,
    pub meanings: Vec<String>,
}

impl Translation {
    pub fn new(lemma: &Lemma, meanings: Vec<String>) -> Self {
        Self {
            lemma_key: lemma.key(),
            meanings,
        }
    }
}
