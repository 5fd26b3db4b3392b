use crate::Error;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Endings that take `es` rather than `s` in the plural. A stem ending in
/// `ss` is covered by `s`.
const SIBILANT_ENDINGS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

/// Switches a noun between its singular and plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inflection {
    Plural,
    Singular,
}

impl Inflection {
    pub fn apply(self, word: &str) -> String {
        match self {
            Inflection::Plural => pluralize(word),
            Inflection::Singular => singularize(word),
        }
    }
}

impl FromStr for Inflection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Inflection, Error> {
        match s {
            "plural" => Ok(Inflection::Plural),
            "singular" => Ok(Inflection::Singular),
            _ => Err(Error::unknown_inflection(s)),
        }
    }
}

impl core::fmt::Display for Inflection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Inflection::Plural => "plural",
            Inflection::Singular => "singular",
        })
    }
}

fn has_sibilant_ending(stem: &str) -> bool {
    SIBILANT_ENDINGS.iter().any(|ending| stem.ends_with(ending))
}

/// Returns the plural form of `word`.
///
/// Only the end of the string is looked at, and only regular English
/// endings are handled: a trailing `y` becomes `ies`, a trailing `s`, `x`,
/// `z`, `ch` or `sh` gains `es`, anything else gains `s`. Irregular nouns
/// (`mouse`, `child`) are not recognised.
///
/// ```
/// assert_eq!(casework::pluralize("batch"), "batches");
/// assert_eq!(casework::pluralize("property"), "properties");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(stem) = word.strip_suffix('y') {
        return format!("{stem}ies");
    }

    if has_sibilant_ending(word) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Returns the singular form of `word`, undoing [`pluralize`] for regular
/// nouns.
///
/// ```
/// assert_eq!(casework::singularize("batches"), "batch");
/// assert_eq!(casework::singularize("items"), "item");
/// ```
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = word.strip_suffix("es") {
        if has_sibilant_ending(stem) {
            return stem.to_owned();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_owned(),
        _ => word.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_rules() {
        assert_eq!(pluralize(""), "");
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("y"), "ies");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("user"), "users");
    }

    #[test]
    fn pluralize_is_case_sensitive() {
        assert_eq!(pluralize("CITY"), "CITYs");
        assert_eq!(pluralize("BOX"), "BOXs");
    }

    #[test]
    fn irregular_nouns_are_not_special() {
        assert_eq!(pluralize("mouse"), "mouses");
        assert_eq!(pluralize("child"), "childs");
        assert_eq!(singularize("mice"), "mice");
    }

    #[test]
    fn singularize_rules() {
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("cities"), "city");
        assert_eq!(singularize("ies"), "ie");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("quizes"), "quiz");
        assert_eq!(singularize("churches"), "church");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize("es"), "e");
        assert_eq!(singularize("user"), "user");
    }

    #[test]
    fn singularize_es_needs_sibilant_stem() {
        assert_eq!(singularize("tables"), "table");
        assert_eq!(singularize("shoes"), "shoe");
    }

    #[test]
    fn round_trip_regular_nouns() {
        for word in ["item", "property", "class", "batch", "box", "wish", "key"] {
            assert_eq!(singularize(&pluralize(word)), word);
        }
    }

    #[test]
    fn inflection_apply() {
        assert_eq!(Inflection::Plural.apply("entry"), "entries");
        assert_eq!(Inflection::Singular.apply("entries"), "entry");
    }

    #[test]
    fn inflection_parse() {
        assert_eq!("plural".parse::<Inflection>().unwrap(), Inflection::Plural);
        assert_eq!(Inflection::Singular.to_string(), "singular");
        let err = "dual".parse::<Inflection>().unwrap_err();
        assert!(err.is_unknown_inflection());
    }
}
