//! Unicode helpers shared by the feature sorter and the language models.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// Canonical composition (NFC). Borrows the input when it is already composed.
pub fn normalize_nfc(word: &str) -> Cow<'_, str> {
    if unicode_normalization::is_nfc(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.nfc().collect())
    }
}

/// Dictionary sort key. Strings compare by base letters first, then by accents
/// (unaccented first), then by case (lower case first).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: Vec<String>,
    upper: Vec<bool>,
}

pub fn collation_key(s: &str) -> CollationKey {
    let mut key = CollationKey::default();
    for c in s.nfd() {
        if unicode_normalization::char::is_combining_mark(c) {
            match key.accents.last_mut() {
                Some(marks) => marks.push(c),
                None => key.accents.push(c.to_string()),
            }
        } else {
            key.base.extend(c.to_lowercase());
            key.accents.push(String::new());
            key.upper.push(c.is_uppercase());
        }
    }
    key
}
