use std::ops::Deref;

/// The words of an identifier, in order.
///
/// Each word borrows from the string passed to [`split`] and keeps its
/// original letter case. Casing is only normalized when the words are
/// composed into a [`Style`](crate::Style). A word is never empty and never
/// contains a delimiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Words<'a> {
    words: Vec<&'a str>,
}

/// Splits `src` into words.
///
/// Spaces, hyphens and underscores separate words and are dropped; runs of
/// them never produce empty words. Inside each delimiter-free segment a new
/// word starts:
///
/// * before an uppercase letter that follows a lowercase letter
///   (`helloWorld` → `hello`, `World`), and
/// * before the last letter of an uppercase run when a lowercase letter
///   follows it (`XMLParser` → `XML`, `Parser`).
///
/// Any other uppercase run stays in one word (`helloWORLD` → `hello`,
/// `WORLD`). Digits and symbols never start a word; they stick to the word
/// they appear in and are skipped when looking at the previous letter, so
/// `oauth2Token` → `oauth2`, `Token`.
///
/// ```
/// let words = casework::split("parseXMLHttp_request");
/// assert_eq!(&words[..], ["parse", "XML", "Http", "request"]);
/// ```
pub fn split(src: &str) -> Words<'_> {
    let mut words = Vec::new();

    for segment in src.split(is_delimiter).filter(|segment| !segment.is_empty()) {
        split_segment(segment, &mut words);
    }

    log::trace!("split {src:?} into {words:?}");

    Words { words }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '-' | '_')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Upper,
    Lower,
    Other,
}

impl Class {
    fn of(c: char) -> Class {
        if c.is_uppercase() {
            Class::Upper
        } else if c.is_lowercase() {
            Class::Lower
        } else {
            Class::Other
        }
    }
}

/// Splits a non-empty, delimiter-free segment on case transitions.
fn split_segment<'a>(segment: &'a str, words: &mut Vec<&'a str>) {
    let mut start = 0;
    // Class of the last letter seen; `Other` until the first letter
    let mut prev = Class::Other;
    let mut chars = segment.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let class = Class::of(c);

        let boundary = match (prev, class) {
            (Class::Lower, Class::Upper) => true,
            // Last letter of an acronym run when a lowercase letter follows
            (Class::Upper, Class::Upper) => {
                matches!(chars.peek(), Some(&(_, next)) if Class::of(next) == Class::Lower)
            }
            _ => false,
        };

        if boundary && i > start {
            words.push(&segment[start..i]);
            start = i;
        }

        if class != Class::Other {
            prev = class;
        }
    }

    words.push(&segment[start..]);
}

impl<'a> Words<'a> {
    /// Returns the words as a vector of slices into the original input.
    pub fn into_vec(self) -> Vec<&'a str> {
        self.words
    }
}

impl<'a> Deref for Words<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &[&'a str] {
        &self.words
    }
}

impl<'a> IntoIterator for Words<'a> {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Words<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().copied()
    }
}
