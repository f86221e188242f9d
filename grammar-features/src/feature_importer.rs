//! Translation tables from third-party tagsets to library feature values.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::{Error, Result};

/// One or more library values an imported value maps to.
#[derive(
    Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(untagged)]
pub enum LibraryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl LibraryValue {
    pub fn values(&self) -> &[String] {
        match self {
            LibraryValue::Single(value) => std::slice::from_ref(value),
            LibraryValue::Multiple(values) => values,
        }
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty() || self.values().iter().any(|v| v.is_empty())
    }
}

impl From<&str> for LibraryValue {
    fn from(value: &str) -> Self {
        LibraryValue::Single(value.to_string())
    }
}

impl From<String> for LibraryValue {
    fn from(value: String) -> Self {
        LibraryValue::Single(value)
    }
}

impl From<Vec<String>> for LibraryValue {
    fn from(values: Vec<String>) -> Self {
        LibraryValue::Multiple(values)
    }
}

impl From<Vec<&str>> for LibraryValue {
    fn from(values: Vec<&str>) -> Self {
        LibraryValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LibraryValue {
    fn from(values: [&str; N]) -> Self {
        LibraryValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

/// Maps external values onto library values.
///
/// Lookups of unmapped values either pass the value through untouched
/// (`return_unknown`) or fail with [`Error::UnknownValue`]. The policy is fixed at
/// construction.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ImporterConfig")]
pub struct FeatureImporter {
    table: FxHashMap<String, LibraryValue>,
    return_unknown: bool,
}

/// The on-disk shape of an importer table.
#[derive(serde::Deserialize)]
struct ImporterConfig {
    #[serde(default)]
    defaults: Vec<String>,
    #[serde(default)]
    table: BTreeMap<String, LibraryValue>,
    #[serde(default)]
    return_unknown: bool,
}

impl TryFrom<ImporterConfig> for FeatureImporter {
    type Error = Error;

    fn try_from(config: ImporterConfig) -> Result<Self> {
        let mut importer = FeatureImporter::new(config.defaults, config.return_unknown)?;
        for (imported, library) in config.table {
            importer.map(imported, library)?;
        }
        Ok(importer)
    }
}

impl FeatureImporter {
    /// Each default is mapped onto itself, which lets an importer act as a
    /// membership set of accepted values.
    pub fn new<I, S>(defaults: I, return_unknown: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut importer = Self {
            table: FxHashMap::default(),
            return_unknown,
        };
        for value in defaults {
            let value = value.into();
            importer.map(value.clone(), value)?;
        }
        Ok(importer)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Sets the library value(s) for an imported value. A later mapping of the
    /// same imported value replaces the earlier one.
    pub fn map(
        &mut self,
        imported_value: impl Into<String>,
        library_value: impl Into<LibraryValue>,
    ) -> Result<&mut Self> {
        let imported_value = imported_value.into();
        if imported_value.is_empty() {
            return Err(Error::EmptyValue("imported value"));
        }
        let library_value = library_value.into();
        if library_value.is_empty() {
            return Err(Error::EmptyValue("library value"));
        }
        self.table.insert(imported_value, library_value);
        Ok(self)
    }

    pub fn has(&self, imported_value: &str) -> bool {
        self.table.contains_key(imported_value)
    }

    pub fn get(&self, imported_value: &str) -> Result<LibraryValue> {
        if let Some(library_value) = self.table.get(imported_value) {
            Ok(library_value.clone())
        } else if self.return_unknown {
            log::debug!("Passing unknown value {imported_value:?} through the importer");
            Ok(LibraryValue::Single(imported_value.to_string()))
        } else {
            Err(Error::UnknownValue(imported_value.to_string()))
        }
    }

    pub fn return_unknown(&self) -> bool {
        self.return_unknown
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
