pub mod constants;
pub mod error;
pub mod feature;
pub mod feature_importer;
pub mod feature_type;
pub mod inflection;
pub mod language_model;
pub mod lemma;
pub mod text_cleanup;

pub use error::{Error, Result};
pub use feature::{DEFAULT_IMPORTER, DEFAULT_SORT_ORDER, Feature, FeatureData, FeatureValue};
pub use feature_importer::{FeatureImporter, LibraryValue};
pub use feature_type::FeatureType;
pub use inflection::{Form, Inflection};
pub use language_model::{
    AlternateEncoding, BaseLanguageModel, BaseUnit, InflectionGrammar, LanguageModel,
    TextDirection, greek::GreekLanguageModel, language_model,
};
pub use lemma::{Lemma, Translation};

#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum Language {
    Latin,
    Greek,
    Arabic,
    Persian,
    Geez,
    Chinese,
    Syriac,
}

impl Language {
    pub fn iso_639_3(&self) -> &'static str {
        match self {
            Language::Latin => "lat",
            Language::Greek => "grc",
            Language::Arabic => "ara",
            Language::Persian => "per",
            Language::Geez => "gez",
            Language::Chinese => "lzh",
            Language::Syriac => "syr",
        }
    }

    /// Every code a text may be tagged with for this language. The first one is canonical.
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            Language::Latin => &["lat", "la"],
            Language::Greek => &["grc"],
            Language::Arabic => &["ara", "ar"],
            Language::Persian => &["per", "fas", "fa", "fa-IR"],
            Language::Geez => &["gez"],
            Language::Chinese => &["lzh", "zh", "zh-tw", "zh-hant", "zh-hans"],
            Language::Syriac => &["syr", "syc", "syr-Syrj"],
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        LANGUAGES
            .iter()
            .copied()
            .find(|language| language.codes().iter().any(|c| c.eq_ignore_ascii_case(code)))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Latin => write!(f, "Latin"),
            Language::Greek => write!(f, "Greek"),
            Language::Arabic => write!(f, "Arabic"),
            Language::Persian => write!(f, "Persian"),
            Language::Geez => write!(f, "Ge'ez"),
            Language::Chinese => write!(f, "Chinese"),
            Language::Syriac => write!(f, "Syriac"),
        }
    }
}

pub const LANGUAGES: &[Language] = &[
    Language::Latin,
    Language::Greek,
    Language::Arabic,
    Language::Persian,
    Language::Geez,
    Language::Chinese,
    Language::Syriac,
];

/// Language identity check used wherever two language-scoped values are compared.
pub fn compare_languages(a: Language, b: Language) -> bool {
    a == b
}
