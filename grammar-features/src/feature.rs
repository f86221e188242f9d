//! A grammatical feature: one or more values of a single [`FeatureType`],
//! scoped to a language and kept in a canonical order.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::text_cleanup::collation_key;
use crate::{Error, FeatureImporter, FeatureType, Language, Result, compare_languages};

pub const DEFAULT_SORT_ORDER: i32 = 1;
pub const DEFAULT_IMPORTER: &str = "default";
const JOIN_SEPARATOR: &str = " ";

#[derive(
    Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct FeatureValue {
    pub value: String,
    #[serde(default = "default_sort_order")]
    pub sort_order: i32,
}

fn default_sort_order() -> i32 {
    DEFAULT_SORT_ORDER
}

/// The accepted shapes of feature input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureData {
    /// A single value with the default sort order.
    Value(String),
    /// Several values, ranked by their position (starting from one).
    Values(Vec<String>),
    /// Values with explicit sort orders. A missing sort order means the default.
    Sorted(Vec<(String, Option<i32>)>),
}

impl FeatureData {
    /// Builds [`FeatureData::Sorted`] from textual sort orders, e.g. a tagset export.
    /// Sort orders that are not integers fall back to the default.
    pub fn from_text_pairs<I, V, O>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, O)>,
        V: Into<String>,
        O: AsRef<str>,
    {
        FeatureData::Sorted(
            pairs
                .into_iter()
                .map(|(value, order)| (value.into(), order.as_ref().trim().parse().ok()))
                .collect(),
        )
    }

    fn into_feature_values(self) -> Result<Vec<FeatureValue>> {
        let values: Vec<FeatureValue> = match self {
            FeatureData::Value(value) => vec![FeatureValue {
                value,
                sort_order: DEFAULT_SORT_ORDER,
            }],
            FeatureData::Values(values) => values
                .into_iter()
                .zip(1..)
                .map(|(value, sort_order)| FeatureValue { value, sort_order })
                .collect(),
            FeatureData::Sorted(pairs) => pairs
                .into_iter()
                .map(|(value, sort_order)| FeatureValue {
                    value,
                    sort_order: sort_order.unwrap_or(DEFAULT_SORT_ORDER),
                })
                .collect(),
        };
        if values.is_empty() {
            return Err(Error::EmptyValue("feature data"));
        }
        if values.iter().any(|v| v.value.is_empty()) {
            return Err(Error::EmptyValue("feature value"));
        }
        Ok(values)
    }
}

impl From<&str> for FeatureData {
    fn from(value: &str) -> Self {
        FeatureData::Value(value.to_string())
    }
}

impl From<String> for FeatureData {
    fn from(value: String) -> Self {
        FeatureData::Value(value)
    }
}

impl From<Vec<String>> for FeatureData {
    fn from(values: Vec<String>) -> Self {
        FeatureData::Values(values)
    }
}

impl From<Vec<&str>> for FeatureData {
    fn from(values: Vec<&str>) -> Self {
        FeatureData::Values(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FeatureData {
    fn from(values: &[&str]) -> Self {
        FeatureData::Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FeatureData {
    fn from(values: [&str; N]) -> Self {
        FeatureData::Values(values.into_iter().map(String::from).collect())
    }
}

impl From<Vec<(String, i32)>> for FeatureData {
    fn from(pairs: Vec<(String, i32)>) -> Self {
        FeatureData::Sorted(pairs.into_iter().map(|(v, o)| (v, Some(o))).collect())
    }
}

impl From<Vec<(&str, i32)>> for FeatureData {
    fn from(pairs: Vec<(&str, i32)>) -> Self {
        FeatureData::Sorted(
            pairs
                .into_iter()
                .map(|(v, o)| (v.to_string(), Some(o)))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, i32); N]> for FeatureData {
    fn from(pairs: [(&str, i32); N]) -> Self {
        FeatureData::Sorted(
            pairs
                .into_iter()
                .map(|(v, o)| (v.to_string(), Some(o)))
                .collect(),
        )
    }
}

/// A grammatical feature.
///
/// Values are always ordered by sort order, then in dictionary order (base
/// letters, then accents, then case with lower case first), so two features
/// holding the same values render identically no matter how they were built.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "FeatureRecord")]
pub struct Feature {
    #[serde(rename = "type")]
    feature_type: FeatureType,
    language: Language,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    allowed_values: Vec<String>,
    data: Vec<FeatureValue>,
    #[serde(skip)]
    importers: BTreeMap<String, Arc<FeatureImporter>>,
}

#[derive(serde::Deserialize)]
struct FeatureRecord {
    #[serde(rename = "type")]
    feature_type: FeatureType,
    language: Language,
    #[serde(default)]
    allowed_values: Vec<String>,
    data: Vec<FeatureValue>,
}

impl TryFrom<FeatureRecord> for Feature {
    type Error = Error;

    fn try_from(record: FeatureRecord) -> Result<Self> {
        let data = record
            .data
            .into_iter()
            .map(|fv| (fv.value, Some(fv.sort_order)))
            .collect();
        Ok(Feature::new(record.feature_type, FeatureData::Sorted(data), record.language)?
            .with_allowed_values(record.allowed_values))
    }
}

impl Feature {
    pub fn new(
        feature_type: FeatureType,
        data: impl Into<FeatureData>,
        language: Language,
    ) -> Result<Self> {
        let mut feature = Self {
            feature_type,
            language,
            allowed_values: Vec::new(),
            data: data.into().into_feature_values()?,
            importers: BTreeMap::new(),
        };
        feature.sort();
        Ok(feature)
    }

    pub fn from_value(
        feature_type: FeatureType,
        value: impl Into<String>,
        language: Language,
    ) -> Result<Self> {
        Self::new(feature_type, FeatureData::Value(value.into()), language)
    }

    pub fn from_values<I, S>(feature_type: FeatureType, values: I, language: Language) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(feature_type, FeatureData::Values(values), language)
    }

    pub fn from_pairs<I, S>(feature_type: FeatureType, pairs: I, language: Language) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(value, sort_order)| (value.into(), Some(sort_order)))
            .collect();
        Self::new(feature_type, FeatureData::Sorted(pairs), language)
    }

    /// Restricts the vocabulary this feature is defined over. An empty list means
    /// any value is allowed.
    pub fn with_allowed_values<I, S>(mut self, allowed_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = allowed_values.into_iter().map(Into::into).collect();
        self
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn allowed_values(&self) -> &[String] {
        &self.allowed_values
    }

    pub fn allows_unrestricted_values(&self) -> bool {
        self.allowed_values.is_empty()
    }

    pub fn data(&self) -> &[FeatureValue] {
        &self.data
    }

    /// Restores canonical order. Every mutating method calls this itself.
    pub fn sort(&mut self) {
        self.data.sort_by_cached_key(|fv| {
            (fv.sort_order, collation_key(&fv.value), fv.value.clone())
        });
    }

    pub fn values(&self) -> Vec<&str> {
        self.data.iter().map(|fv| fv.value.as_str()).collect()
    }

    /// All values as a single string, in canonical order.
    pub fn value(&self) -> String {
        self.values().join(JOIN_SEPARATOR)
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.data.iter().any(|fv| fv.value == value)
    }

    /// Same type, same language, and the same values in the same order. Sort
    /// orders and registered importers are not compared.
    pub fn is_equal(&self, other: &Feature) -> bool {
        self.feature_type == other.feature_type
            && compare_languages(self.language, other.language)
            && self.values() == other.values()
    }

    pub fn add_value(&mut self, value: impl Into<String>, sort_order: i32) -> Result<&mut Self> {
        self.add_values(FeatureData::Sorted(vec![(value.into(), Some(sort_order))]))
    }

    pub fn add_values(&mut self, data: impl Into<FeatureData>) -> Result<&mut Self> {
        let values = data.into().into_feature_values()?;
        self.data.extend(values);
        self.sort();
        Ok(self)
    }

    /// Removes every entry equal to `value`. A feature cannot be emptied this way.
    pub fn remove_value(&mut self, value: &str) -> Result<&mut Self> {
        if self.data.iter().all(|fv| fv.value == value) {
            return Err(Error::EmptyValue("feature data"));
        }
        self.data.retain(|fv| fv.value != value);
        Ok(self)
    }

    /// A new feature of the same type, language and vocabulary holding a single value.
    pub fn create_feature(&self, value: impl Into<String>, sort_order: i32) -> Result<Feature> {
        self.create_features(FeatureData::Sorted(vec![(value.into(), Some(sort_order))]))
    }

    /// A new feature of the same type, language and vocabulary holding `data`.
    pub fn create_features(&self, data: impl Into<FeatureData>) -> Result<Feature> {
        Ok(Feature::new(self.feature_type, data, self.language)?
            .with_allowed_values(self.allowed_values.iter().cloned()))
    }

    /// Registers `importer` under `name`, replacing any importer already there.
    pub fn add_importer(&mut self, importer: Arc<FeatureImporter>, name: &str) -> &mut Self {
        self.importers.insert(name.to_string(), importer);
        self
    }

    pub fn importer(&self, name: &str) -> Result<&FeatureImporter> {
        self.importers
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| Error::MissingImporter(name.to_string()))
    }

    /// Translates foreign values through the importer registered under `name` and
    /// appends them. Nothing is added unless every value translates.
    pub fn add_from_importer(
        &mut self,
        foreign_data: impl Into<FeatureData>,
        name: &str,
    ) -> Result<&mut Self> {
        let imported = self.import(foreign_data.into(), name)?;
        self.data.extend(imported);
        self.sort();
        Ok(self)
    }

    /// Like [`Feature::add_from_importer`], but the translated values go into a new
    /// feature of the same type, language and vocabulary.
    pub fn create_from_importer(
        &self,
        foreign_data: impl Into<FeatureData>,
        name: &str,
    ) -> Result<Feature> {
        let imported = self.import(foreign_data.into(), name)?;
        let pairs = imported
            .into_iter()
            .map(|fv| (fv.value, Some(fv.sort_order)))
            .collect();
        self.create_features(FeatureData::Sorted(pairs))
    }

    /// A multi-valued mapping expands into one entry per library value, all
    /// sharing the sort order of the foreign value.
    fn import(&self, foreign_data: FeatureData, name: &str) -> Result<Vec<FeatureValue>> {
        let importer = self.importer(name)?;
        let mut imported = Vec::new();
        for foreign in foreign_data.into_feature_values()? {
            let library_value = importer.get(&foreign.value)?;
            imported.extend(library_value.values().iter().map(|value| FeatureValue {
                value: value.clone(),
                sort_order: foreign.sort_order,
            }));
        }
        Ok(imported)
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender(data: impl Into<FeatureData>) -> Feature {
        Feature::new(FeatureType::Gender, data, Language::Latin).unwrap()
    }

    #[test]
    fn test_single_value() {
        let feature = gender("x");
        assert_eq!(feature.value(), "x");
        assert_eq!(feature.data()[0].sort_order, DEFAULT_SORT_ORDER);
    }

    #[test]
    fn test_value_list_keeps_position_order() {
        let feature = gender(["b", "a"]);
        assert_eq!(feature.values(), vec!["b", "a"]);
        assert_eq!(feature.value(), "b a");
    }

    #[test]
    fn test_pairs_sort_by_sort_order() {
        let feature = gender([("a", 2), ("b", 1)]);
        assert_eq!(feature.values(), vec!["b", "a"]);
    }

    #[test]
    fn test_equal_sort_orders_sort_alphabetically() {
        let feature = gender([("neuter", 1), ("feminine", 1), ("masculine", 1)]);
        assert_eq!(feature.values(), vec!["feminine", "masculine", "neuter"]);
    }

    #[test]
    fn test_alphabetical_tie_break_ignores_case_and_accents() {
        let feature = gender([("Zeta", 1), ("alpha", 1), ("éta", 1)]);
        assert_eq!(feature.values(), vec!["alpha", "éta", "Zeta"]);
    }

    #[test]
    fn test_unparsable_sort_order_defaults_to_one() {
        let data = FeatureData::from_text_pairs([("b", "2"), ("a", "two"), ("c", "")]);
        let feature = gender(data);
        assert_eq!(feature.values(), vec!["a", "c", "b"]);
        assert!(feature.data()[..2].iter().all(|fv| fv.sort_order == 1));
    }

    #[test]
    fn test_missing_sort_order_defaults_to_one() {
        let feature = gender(FeatureData::Sorted(vec![
            ("b".to_string(), Some(0)),
            ("a".to_string(), None),
        ]));
        assert_eq!(feature.values(), vec!["b", "a"]);
        assert_eq!(feature.data()[1].sort_order, 1);
    }

    #[test]
    fn test_order_does_not_depend_on_insertion_order() {
        let pairs = [("c", 2), ("B", 1), ("b", 1), ("á", 1), ("A", 1), ("a", 1)];
        let expected = gender(pairs);
        assert_eq!(expected.values(), vec!["a", "A", "á", "b", "B", "c"]);
        for shift in 1..pairs.len() {
            let mut rotated = pairs;
            rotated.rotate_left(shift);
            assert_eq!(gender(rotated).data(), expected.data(), "rotation {shift}");
            rotated.reverse();
            assert_eq!(gender(rotated).data(), expected.data(), "reversed rotation {shift}");
        }
    }

    #[test]
    fn test_case_ties_put_lower_case_first() {
        let feature = gender([("a", 1), ("A", 1), ("b", 1), ("B", 1)]);
        assert_eq!(feature.values(), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn test_greek_ties_order_accents_after_case() {
        let feature = Feature::new(
            FeatureType::Case,
            [("β", 1), ("α", 1), ("ά", 1), ("Α", 1)],
            Language::Greek,
        )
        .unwrap();
        assert_eq!(feature.values(), vec!["α", "Α", "ά", "β"]);
    }

    #[test]
    fn test_empty_data_is_rejected() {
        assert!(matches!(
            Feature::new(FeatureType::Gender, "", Language::Latin),
            Err(Error::EmptyValue(_))
        ));
        assert!(matches!(
            Feature::new(FeatureType::Gender, Vec::<String>::new(), Language::Latin),
            Err(Error::EmptyValue("feature data"))
        ));
        assert!(matches!(
            Feature::new(FeatureType::Gender, ["a", ""], Language::Latin),
            Err(Error::EmptyValue("feature value"))
        ));
    }

    #[test]
    fn test_explicit_constructors() {
        let single = Feature::from_value(FeatureType::Case, "dative", Language::Greek).unwrap();
        assert_eq!(single.values(), vec!["dative"]);
        let list =
            Feature::from_values(FeatureType::Case, ["genitive", "dative"], Language::Greek)
                .unwrap();
        assert_eq!(list.values(), vec!["genitive", "dative"]);
        let pairs =
            Feature::from_pairs(FeatureType::Case, [("genitive", 2), ("dative", 1)], Language::Greek)
                .unwrap();
        assert_eq!(pairs.values(), vec!["dative", "genitive"]);
    }

    #[test]
    fn test_add_value_resorts() {
        let mut feature = gender(["a"]);
        feature.add_value("z", 0).unwrap();
        assert_eq!(feature.values()[0], "z");
        feature.add_value("m", 1).unwrap().add_value("b", 5).unwrap();
        assert_eq!(feature.values(), vec!["z", "a", "m", "b"]);
    }

    #[test]
    fn test_add_values() {
        let mut feature = gender("masculine");
        feature.add_values(["neuter", "feminine"]).unwrap();
        // "neuter" gets sort order 1 and "feminine" 2
        assert_eq!(feature.values(), vec!["masculine", "neuter", "feminine"]);
        assert!(feature.has_value("feminine"));
        assert!(!feature.has_value("common"));
    }

    #[test]
    fn test_failed_add_leaves_feature_untouched() {
        let mut feature = gender("masculine");
        assert!(feature.add_values(["neuter", ""]).is_err());
        assert_eq!(feature.values(), vec!["masculine"]);
    }

    #[test]
    fn test_remove_value() {
        let mut feature = gender(["masculine", "feminine"]);
        feature.remove_value("masculine").unwrap();
        assert_eq!(feature.values(), vec!["feminine"]);
        assert!(matches!(
            feature.remove_value("feminine"),
            Err(Error::EmptyValue(_))
        ));
        assert_eq!(feature.values(), vec!["feminine"]);
    }

    #[test]
    fn test_create_feature_shares_kind() {
        let feature = gender("masculine").with_allowed_values(["masculine", "feminine"]);
        let sibling = feature.create_feature("y", DEFAULT_SORT_ORDER).unwrap();
        assert_eq!(sibling.value(), "y");
        assert_eq!(sibling.feature_type(), feature.feature_type());
        assert_eq!(sibling.language(), feature.language());
        assert_eq!(sibling.allowed_values(), feature.allowed_values());

        let siblings = feature.create_features(["b", "a"]).unwrap();
        assert_eq!(siblings.values(), vec!["b", "a"]);
        assert!(!siblings.allows_unrestricted_values());
    }

    #[test]
    fn test_is_equal() {
        let a = gender(["a", "b"]);
        let b = gender([("b", 7), ("a", 3)]);
        assert!(a.is_equal(&b));
        assert_eq!(a, b);

        let greek = Feature::new(FeatureType::Gender, ["a", "b"], Language::Greek).unwrap();
        assert!(!a.is_equal(&greek));

        let other_type = Feature::new(FeatureType::Case, ["a", "b"], Language::Latin).unwrap();
        assert!(!a.is_equal(&other_type));

        let reordered = gender(["b", "a"]);
        assert!(!a.is_equal(&reordered));
    }

    #[test]
    fn test_add_from_importer() {
        let mut importer = FeatureImporter::default();
        importer
            .map("m", "masculine")
            .unwrap()
            .map("f", "feminine")
            .unwrap();
        let mut feature = gender("neuter");
        feature.add_importer(Arc::new(importer), DEFAULT_IMPORTER);
        feature.add_from_importer(["m", "f"], DEFAULT_IMPORTER).unwrap();
        assert_eq!(feature.values(), vec!["masculine", "neuter", "feminine"]);
    }

    #[test]
    fn test_add_from_importer_is_all_or_nothing() {
        let importer = FeatureImporter::new(["masculine"], false).unwrap();
        let mut feature = gender("neuter");
        feature.add_importer(Arc::new(importer), DEFAULT_IMPORTER);
        let err = feature
            .add_from_importer(["masculine", "common"], DEFAULT_IMPORTER)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownValue(value) if value == "common"));
        assert_eq!(feature.values(), vec!["neuter"]);
    }

    #[test]
    fn test_missing_importer() {
        let mut feature = gender("neuter");
        let err = feature.add_from_importer("m", "perseus").unwrap_err();
        assert!(matches!(err, Error::MissingImporter(name) if name == "perseus"));
        let err = feature.create_from_importer("m", DEFAULT_IMPORTER).unwrap_err();
        assert!(matches!(err, Error::MissingImporter(name) if name == DEFAULT_IMPORTER));
    }

    #[test]
    fn test_named_importers_are_independent() {
        let mut strict = FeatureImporter::default();
        strict.map("m", "masculine").unwrap();
        let lenient = FeatureImporter::new(Vec::<String>::new(), true).unwrap();

        let mut feature = gender("neuter");
        feature
            .add_importer(Arc::new(strict), DEFAULT_IMPORTER)
            .add_importer(Arc::new(lenient), "lenient");
        assert!(feature.create_from_importer("x", DEFAULT_IMPORTER).is_err());
        assert_eq!(
            feature.create_from_importer("x", "lenient").unwrap().value(),
            "x"
        );
    }

    #[test]
    fn test_create_from_importer() {
        let mut importer = FeatureImporter::default();
        importer.map("m/f", ["masculine", "feminine"]).unwrap();
        importer.map("n", "neuter").unwrap();
        let mut feature = gender("neuter").with_allowed_values(["masculine", "feminine", "neuter"]);
        feature.add_importer(Arc::new(importer), DEFAULT_IMPORTER);

        let created = feature.create_from_importer(["n", "m/f"], DEFAULT_IMPORTER).unwrap();
        assert_eq!(created.values(), vec!["neuter", "feminine", "masculine"]);
        assert_eq!(created.allowed_values(), feature.allowed_values());
        // the receiver is not modified
        assert_eq!(feature.values(), vec!["neuter"]);
    }

    #[test]
    fn test_serde_round_trip_restores_order() {
        let json = r#"{
            "type": "grmCase",
            "language": "Greek",
            "data": [
                { "value": "genitive", "sort_order": 2 },
                { "value": "dative", "sort_order": 1 }
            ]
        }"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.feature_type(), FeatureType::Case);
        assert_eq!(feature.values(), vec!["dative", "genitive"]);

        let serialized = serde_json::to_string(&feature).unwrap();
        let back: Feature = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, feature);
    }

    #[test]
    fn test_deserialize_defaults_missing_sort_order() {
        let json = r#"{
            "type": "case",
            "language": "Greek",
            "data": [{ "value": "genitive", "sort_order": 0 }, { "value": "dative" }]
        }"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.values(), vec!["genitive", "dative"]);
        assert_eq!(feature.data()[1].sort_order, DEFAULT_SORT_ORDER);
    }

    #[test]
    fn test_deserialize_rejects_empty_data() {
        let json = r#"{ "type": "case", "language": "Greek", "data": [] }"#;
        assert!(serde_json::from_str::<Feature>(json).is_err());
    }
}
