//! Ancient Greek.

use std::borrow::Cow;

use indexmap::IndexSet;

use super::{AlternateEncoding, InflectionGrammar, LanguageModel, base_feature_values};
use crate::constants::*;
use crate::text_cleanup::normalize_nfc;
use crate::{
    Feature, FeatureData, FeatureType, Form, Inflection, Language, Result, compare_languages,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GreekLanguageModel;

impl LanguageModel for GreekLanguageModel {
    fn language(&self) -> Language {
        Language::Greek
    }

    fn feature_values(&self, feature_type: FeatureType) -> &'static [&'static str] {
        match feature_type {
            FeatureType::Class => &[
                CLASS_DEMONSTRATIVE,
                CLASS_GENERAL_RELATIVE,
                CLASS_INDEFINITE,
                CLASS_INTENSIVE,
                CLASS_INTERROGATIVE,
                CLASS_PERSONAL,
                CLASS_POSSESSIVE,
                CLASS_RECIPROCAL,
                CLASS_REFLEXIVE,
                CLASS_RELATIVE,
            ],
            FeatureType::Number => &[NUM_SINGULAR, NUM_PLURAL, NUM_DUAL],
            FeatureType::Case => &[
                CASE_NOMINATIVE,
                CASE_GENITIVE,
                CASE_DATIVE,
                CASE_ACCUSATIVE,
                CASE_VOCATIVE,
            ],
            FeatureType::Declension => &[ORD_1ST, ORD_2ND, ORD_3RD],
            FeatureType::Tense => &[
                TENSE_PRESENT,
                TENSE_IMPERFECT,
                TENSE_FUTURE,
                TENSE_PERFECT,
                TENSE_PLUPERFECT,
                TENSE_FUTURE_PERFECT,
                TENSE_AORIST,
            ],
            FeatureType::Voice => &[VOICE_PASSIVE, VOICE_ACTIVE, VOICE_MEDIOPASSIVE, VOICE_MIDDLE],
            FeatureType::Mood => &[
                MOOD_INDICATIVE,
                MOOD_SUBJUNCTIVE,
                MOOD_OPTATIVE,
                MOOD_IMPERATIVE,
            ],
            FeatureType::Dialect => &["attic", "epic", "doric"],
            other => base_feature_values(other),
        }
    }

    fn grammar_features(&self) -> &'static [FeatureType] {
        &[
            FeatureType::Part,
            FeatureType::Case,
            FeatureType::Mood,
            FeatureType::Declension,
            FeatureType::Tense,
            FeatureType::Voice,
        ]
    }

    /// Greek words are compared in canonical composition (NFC).
    fn normalize_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        normalize_nfc(word)
    }

    /// Lower-cased NFC with either vowel-length marks or diaeresis removed.
    /// Exactly one variant is returned per call.
    fn alternate_word_encodings(
        &self,
        word: &str,
        _preceding: Option<&str>,
        _following: Option<&str>,
        encoding: Option<AlternateEncoding>,
    ) -> Vec<String> {
        let normalized = self.normalize_word(word).to_lowercase();
        let alternate = match encoding.unwrap_or_default() {
            AlternateEncoding::StrippedVowelLength => strip_vowel_length(&normalized),
            AlternateEncoding::StrippedDiaeresis => strip_diaeresis(&normalized),
        };
        vec![alternate]
    }

    /// Full-form matching for pronouns, suffix matching for everything else.
    /// An inflection without a single part of speech is left unclassified.
    fn get_inflection_grammar(&self, inflection: &Inflection) -> InflectionGrammar {
        let mut grammar = InflectionGrammar::default();
        let part = inflection.feature(FeatureType::Part);
        match part {
            Some(part) if part.data().len() == 1 => {
                if part.value() == POFS_PRONOUN {
                    grammar.full_form_based = true;
                } else {
                    grammar.suffix_based = true;
                }
            }
            _ => {
                log::warn!(
                    "Unable to set grammar: part of speech data is missing or is incorrect: {part:?}"
                );
            }
        }

        grammar.pronoun_class_required = compare_languages(Language::Greek, inflection.language)
            && part.and_then(|part| part.values().first().copied()) == Some(POFS_PRONOUN);

        grammar
    }

    /// Classes are returned in the order they are first met among matching forms,
    /// each class once.
    fn get_pronoun_classes(
        &self,
        forms: &[Form],
        word: &str,
        normalize: bool,
    ) -> Result<Vec<Feature>> {
        let target = if normalize {
            self.normalize_word(word)
        } else {
            Cow::Borrowed(word)
        };

        let mut classes: IndexSet<&str> = IndexSet::new();
        let matching_forms = forms.iter().filter(|form| {
            !form.value.is_empty()
                && if normalize {
                    self.normalize_word(&form.value) == target
                } else {
                    form.value == word
                }
        });
        for form in matching_forms {
            if let Some(class) = form.feature(FeatureType::Class) {
                classes.extend(class.values());
            }
        }

        classes
            .into_iter()
            .map(|class| self.feature(FeatureType::Class, FeatureData::from(class)))
            .collect()
    }
}

fn strip_vowel_length(word: &str) -> String {
    word.chars()
        .filter_map(|c| match c {
            // vrachy, macron
            '\u{1FB0}' | '\u{1FB1}' => Some('\u{03B1}'),
            '\u{1FB8}' | '\u{1FB9}' => Some('\u{0391}'),
            '\u{1FD0}' | '\u{1FD1}' => Some('\u{03B9}'),
            '\u{1FD8}' | '\u{1FD9}' => Some('\u{0399}'),
            '\u{1FE0}' | '\u{1FE1}' => Some('\u{03C5}'),
            '\u{1FE8}' | '\u{1FE9}' => Some('\u{03A5}'),
            // spacing macron, combining macron, combining breve
            '\u{00AF}' | '\u{0304}' | '\u{0306}' => None,
            _ => Some(c),
        })
        .collect()
}

fn strip_diaeresis(word: &str) -> String {
    word.chars()
        .filter_map(|c| match c {
            '\u{0390}' => Some('\u{03AF}'),
            '\u{03AA}' => Some('\u{0399}'),
            '\u{03AB}' => Some('\u{03A5}'),
            '\u{03B0}' => Some('\u{03CD}'),
            '\u{03CA}' => Some('\u{03B9}'),
            '\u{03CB}' => Some('\u{03C5}'),
            '\u{1FD2}' => Some('\u{1F76}'),
            '\u{1FD3}' => Some('\u{1F77}'),
            '\u{1FD7}' => Some('\u{1FD6}'),
            '\u{1FE2}' => Some('\u{1F7A}'),
            '\u{1FE3}' => Some('\u{1F7B}'),
            '\u{1FE7}' => Some('\u{1FE6}'),
            '\u{1FC1}' => Some('\u{1FC0}'),
            '\u{1FED}' => Some('\u{1FEF}'),
            '\u{1FEE}' => Some('\u{1FFD}'),
            // spacing and combining diaeresis
            '\u{00A8}' | '\u{0308}' => None,
            _ => Some(c),
        })
        .collect()
}
