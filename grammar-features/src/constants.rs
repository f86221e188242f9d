//! Canonical feature values shared by the language models.

pub const POFS_ADJECTIVE: &str = "adjective";
pub const POFS_ADVERB: &str = "adverb";
pub const POFS_ARTICLE: &str = "article";
pub const POFS_CONJUNCTION: &str = "conjunction";
pub const POFS_EXCLAMATION: &str = "exclamation";
pub const POFS_INTERJECTION: &str = "interjection";
pub const POFS_NOUN: &str = "noun";
pub const POFS_NUMERAL: &str = "numeral";
pub const POFS_PARTICLE: &str = "particle";
pub const POFS_PREFIX: &str = "prefix";
pub const POFS_PREPOSITION: &str = "preposition";
pub const POFS_PRONOUN: &str = "pronoun";
pub const POFS_SUFFIX: &str = "suffix";
pub const POFS_VERB: &str = "verb";
pub const POFS_VERB_PARTICIPLE: &str = "verb participle";

pub const GEND_MASCULINE: &str = "masculine";
pub const GEND_FEMININE: &str = "feminine";
pub const GEND_NEUTER: &str = "neuter";

pub const ORD_1ST: &str = "1st";
pub const ORD_2ND: &str = "2nd";
pub const ORD_3RD: &str = "3rd";

pub const COMP_POSITIVE: &str = "positive";
pub const COMP_COMPARATIVE: &str = "comparative";
pub const COMP_SUPERLATIVE: &str = "superlative";

pub const TYPE_REGULAR: &str = "regular";
pub const TYPE_IRREGULAR: &str = "irregular";

pub const NUM_SINGULAR: &str = "singular";
pub const NUM_PLURAL: &str = "plural";
pub const NUM_DUAL: &str = "dual";

pub const CASE_NOMINATIVE: &str = "nominative";
pub const CASE_GENITIVE: &str = "genitive";
pub const CASE_DATIVE: &str = "dative";
pub const CASE_ACCUSATIVE: &str = "accusative";
pub const CASE_VOCATIVE: &str = "vocative";

pub const TENSE_PRESENT: &str = "present";
pub const TENSE_IMPERFECT: &str = "imperfect";
pub const TENSE_FUTURE: &str = "future";
pub const TENSE_PERFECT: &str = "perfect";
pub const TENSE_PLUPERFECT: &str = "pluperfect";
pub const TENSE_FUTURE_PERFECT: &str = "future perfect";
pub const TENSE_AORIST: &str = "aorist";

pub const VOICE_PASSIVE: &str = "passive";
pub const VOICE_ACTIVE: &str = "active";
pub const VOICE_MEDIOPASSIVE: &str = "mediopassive";
pub const VOICE_MIDDLE: &str = "middle";

pub const MOOD_INDICATIVE: &str = "indicative";
pub const MOOD_SUBJUNCTIVE: &str = "subjunctive";
pub const MOOD_OPTATIVE: &str = "optative";
pub const MOOD_IMPERATIVE: &str = "imperative";

pub const CLASS_DEMONSTRATIVE: &str = "demonstrative";
pub const CLASS_GENERAL_RELATIVE: &str = "general relative";
pub const CLASS_INDEFINITE: &str = "indefinite";
pub const CLASS_INTENSIVE: &str = "intensive";
pub const CLASS_INTERROGATIVE: &str = "interrogative";
pub const CLASS_PERSONAL: &str = "personal";
pub const CLASS_POSSESSIVE: &str = "possessive";
pub const CLASS_RECIPROCAL: &str = "reciprocal";
pub const CLASS_REFLEXIVE: &str = "reflexive";
pub const CLASS_RELATIVE: &str = "relative";
