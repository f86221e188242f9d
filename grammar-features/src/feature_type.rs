use crate::Error;

/// The closed set of grammatical feature kinds. Synonymous spellings (`grmCase`,
/// `grmClass`) resolve to a single tag when parsed or deserialized.
#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Word,
    #[serde(rename = "part of speech", alias = "part")]
    Part,
    Number,
    #[serde(alias = "grmCase")]
    Case,
    Declension,
    Gender,
    Type,
    #[serde(alias = "grmClass")]
    Class,
    Conjugation,
    Comparison,
    Tense,
    Voice,
    Mood,
    Person,
    Frequency, // how frequent this word is
    Meaning,
    Source, // source of a word definition
    Footnote, // a footnote for a word's ending
    Dialect,
    Note,
    Pronunciation,
    Age,
    Area,
    Geo, // geographical data
    Kind, // verb kind information
    Derivtype,
    Stemtype,
    Morph, // general morphological information
    Var,
}

pub const FEATURE_TYPES: &[FeatureType] = &[
    FeatureType::Word,
    FeatureType::Part,
    FeatureType::Number,
    FeatureType::Case,
    FeatureType::Declension,
    FeatureType::Gender,
    FeatureType::Type,
    FeatureType::Class,
    FeatureType::Conjugation,
    FeatureType::Comparison,
    FeatureType::Tense,
    FeatureType::Voice,
    FeatureType::Mood,
    FeatureType::Person,
    FeatureType::Frequency,
    FeatureType::Meaning,
    FeatureType::Source,
    FeatureType::Footnote,
    FeatureType::Dialect,
    FeatureType::Note,
    FeatureType::Pronunciation,
    FeatureType::Age,
    FeatureType::Area,
    FeatureType::Geo,
    FeatureType::Kind,
    FeatureType::Derivtype,
    FeatureType::Stemtype,
    FeatureType::Morph,
    FeatureType::Var,
];

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Word => "word",
            FeatureType::Part => "part of speech",
            FeatureType::Number => "number",
            FeatureType::Case => "case",
            FeatureType::Declension => "declension",
            FeatureType::Gender => "gender",
            FeatureType::Type => "type",
            FeatureType::Class => "class",
            FeatureType::Conjugation => "conjugation",
            FeatureType::Comparison => "comparison",
            FeatureType::Tense => "tense",
            FeatureType::Voice => "voice",
            FeatureType::Mood => "mood",
            FeatureType::Person => "person",
            FeatureType::Frequency => "frequency",
            FeatureType::Meaning => "meaning",
            FeatureType::Source => "source",
            FeatureType::Footnote => "footnote",
            FeatureType::Dialect => "dialect",
            FeatureType::Note => "note",
            FeatureType::Pronunciation => "pronunciation",
            FeatureType::Age => "age",
            FeatureType::Area => "area",
            FeatureType::Geo => "geo",
            FeatureType::Kind => "kind",
            FeatureType::Derivtype => "derivtype",
            FeatureType::Stemtype => "stemtype",
            FeatureType::Morph => "morph",
            FeatureType::Var => "var",
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FeatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "part" => Ok(FeatureType::Part),
            "grmCase" => Ok(FeatureType::Case),
            "grmClass" => Ok(FeatureType::Class),
            _ => FEATURE_TYPES
                .iter()
                .copied()
                .find(|feature_type| feature_type.as_str() == s)
                .ok_or_else(|| Error::InvalidFeatureType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for feature_type in FEATURE_TYPES {
            assert_eq!(
                feature_type.as_str().parse::<FeatureType>().unwrap(),
                *feature_type
            );
        }
    }

    #[test]
    fn test_synonyms_resolve_to_one_tag() {
        assert_eq!("grmCase".parse::<FeatureType>().unwrap(), FeatureType::Case);
        assert_eq!("grmClass".parse::<FeatureType>().unwrap(), FeatureType::Class);
        assert_eq!("part".parse::<FeatureType>().unwrap(), FeatureType::Part);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = "aspect".parse::<FeatureType>().unwrap_err();
        assert!(matches!(err, Error::InvalidFeatureType(name) if name == "aspect"));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        assert_eq!(
            serde_json::to_string(&FeatureType::Part).unwrap(),
            "\"part of speech\""
        );
        let case: FeatureType = serde_json::from_str("\"grmCase\"").unwrap();
        assert_eq!(case, FeatureType::Case);
    }
}
