//! Per-language behaviour: word normalization, lookup variants, feature
//! vocabularies and pronoun-class resolution.
//!
//! Every language is served through the [`LanguageModel`] trait. The default
//! methods are the behaviour of a language with no special rules; languages that
//! need more (currently Greek) implement their own model. Use [`language_model`]
//! to get the model for a language.

pub mod greek;

use std::borrow::Cow;

use crate::constants::*;
use crate::{Feature, FeatureData, FeatureType, Form, Inflection, Language, Result};
use greek::GreekLanguageModel;

/// Characters treated as word boundaries.
pub const PUNCTUATION: &str = ".,;:!?'\"(){}[]<>/\\\u{00A0}\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{2018}\u{2019}\u{201C}\u{201D}\u{0387}\u{00B7}\n\r";

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BaseUnit {
    Word,
    Character,
}

/// Which spelling variant [`LanguageModel::alternate_word_encodings`] produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlternateEncoding {
    #[default]
    StrippedVowelLength,
    StrippedDiaeresis,
}

/// How an inflection should be matched against inflection tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InflectionGrammar {
    pub full_form_based: bool,
    pub suffix_based: bool,
    pub pronoun_class_required: bool,
}

pub trait LanguageModel: Send + Sync {
    fn language(&self) -> Language;

    fn codes(&self) -> &'static [&'static str] {
        self.language().codes()
    }

    fn has_code(&self, code: &str) -> bool {
        self.codes().iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    fn to_code(&self) -> &'static str {
        self.language().iso_639_3()
    }

    fn direction(&self) -> TextDirection {
        match self.language() {
            Language::Arabic | Language::Persian | Language::Syriac => TextDirection::Rtl,
            Language::Latin | Language::Greek | Language::Geez | Language::Chinese => {
                TextDirection::Ltr
            }
        }
    }

    fn base_unit(&self) -> BaseUnit {
        match self.language() {
            Language::Chinese => BaseUnit::Character,
            _ => BaseUnit::Word,
        }
    }

    /// Number of units after the selection used as lookup context.
    fn context_forward(&self) -> usize {
        0
    }

    /// Number of units before the selection used as lookup context.
    fn context_backward(&self) -> usize {
        0
    }

    /// Whether inflection tables can be produced for this language.
    fn can_inflect(&self) -> bool {
        false
    }

    /// The closed vocabulary of a feature type. Empty means unrestricted.
    fn feature_values(&self, feature_type: FeatureType) -> &'static [&'static str] {
        base_feature_values(feature_type)
    }

    /// A feature in this language restricted to its vocabulary.
    fn feature(&self, feature_type: FeatureType, data: FeatureData) -> Result<Feature> {
        Ok(Feature::new(feature_type, data, self.language())?
            .with_allowed_values(self.feature_values(feature_type).iter().copied()))
    }

    /// Feature types shown in grammar summaries.
    fn grammar_features(&self) -> &'static [FeatureType] {
        &[]
    }

    /// A form of `word` suitable for equality comparison.
    fn normalize_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }

    /// Spellings to try when `word` is not found in a lexicon as-is.
    fn alternate_word_encodings(
        &self,
        _word: &str,
        _preceding: Option<&str>,
        _following: Option<&str>,
        _encoding: Option<AlternateEncoding>,
    ) -> Vec<String> {
        Vec::new()
    }

    fn punctuation(&self) -> &'static str {
        PUNCTUATION
    }

    fn is_punctuation(&self, c: char) -> bool {
        self.punctuation().contains(c)
    }

    fn get_inflection_grammar(&self, _inflection: &Inflection) -> InflectionGrammar {
        InflectionGrammar::default()
    }

    /// Grammatical classes of the catalogue forms spelled like `word`.
    fn get_pronoun_classes(
        &self,
        _forms: &[Form],
        _word: &str,
        _normalize: bool,
    ) -> Result<Vec<Feature>> {
        Ok(Vec::new())
    }
}

/// Model for languages without language-specific rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BaseLanguageModel {
    language: Language,
}

impl BaseLanguageModel {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }
}

impl LanguageModel for BaseLanguageModel {
    fn language(&self) -> Language {
        self.language
    }
}

fn base_feature_values(feature_type: FeatureType) -> &'static [&'static str] {
    match feature_type {
        FeatureType::Part => &[
            POFS_ADJECTIVE,
            POFS_ADVERB,
            POFS_ARTICLE,
            POFS_CONJUNCTION,
            POFS_EXCLAMATION,
            POFS_INTERJECTION,
            POFS_NOUN,
            POFS_NUMERAL,
            POFS_PARTICLE,
            POFS_PREFIX,
            POFS_PREPOSITION,
            POFS_PRONOUN,
            POFS_SUFFIX,
            POFS_VERB,
            POFS_VERB_PARTICIPLE,
        ],
        FeatureType::Gender => &[GEND_MASCULINE, GEND_FEMININE, GEND_NEUTER],
        FeatureType::Type => &[TYPE_REGULAR, TYPE_IRREGULAR],
        FeatureType::Person => &[ORD_1ST, ORD_2ND, ORD_3RD],
        FeatureType::Comparison => &[COMP_POSITIVE, COMP_COMPARATIVE, COMP_SUPERLATIVE],
        _ => &[],
    }
}

static GREEK: GreekLanguageModel = GreekLanguageModel;
static LATIN: BaseLanguageModel = BaseLanguageModel::new(Language::Latin);
static ARABIC: BaseLanguageModel = BaseLanguageModel::new(Language::Arabic);
static PERSIAN: BaseLanguageModel = BaseLanguageModel::new(Language::Persian);
static GEEZ: BaseLanguageModel = BaseLanguageModel::new(Language::Geez);
static CHINESE: BaseLanguageModel = BaseLanguageModel::new(Language::Chinese);
static SYRIAC: BaseLanguageModel = BaseLanguageModel::new(Language::Syriac);

/// The model serving `language`.
pub fn language_model(language: Language) -> &'static dyn LanguageModel {
    match language {
        Language::Greek => &GREEK,
        Language::Latin => &LATIN,
        Language::Arabic => &ARABIC,
        Language::Persian => &PERSIAN,
        Language::Geez => &GEEZ,
        Language::Chinese => &CHINESE,
        Language::Syriac => &SYRIAC,
    }
}
