use crate::{compose, Error};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A naming convention that identifiers can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    /// `camelCase`
    Camel,

    /// `PascalCase`
    Pascal,

    /// `snake_case`
    Snake,

    /// `kebab-case`
    Kebab,

    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
}

/// How the letters of a single word are cased during composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Every letter lowercase
    Lower,

    /// Every letter uppercase
    Upper,

    /// First letter uppercase, the rest lowercase
    Capitalized,
}

/// The composition policy for a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRules {
    /// Casing applied to the first word
    pub first: Casing,

    /// Casing applied to every word after the first
    pub rest: Casing,

    /// Inserted between consecutive words
    pub joiner: &'static str,
}

/// Indexed by `Style as usize`; ordered like [`Style::ALL`].
static RULES: [StyleRules; 5] = [
    // camelCase
    StyleRules {
        first: Casing::Lower,
        rest: Casing::Capitalized,
        joiner: "",
    },
    // PascalCase
    StyleRules {
        first: Casing::Capitalized,
        rest: Casing::Capitalized,
        joiner: "",
    },
    // snake_case
    StyleRules {
        first: Casing::Lower,
        rest: Casing::Lower,
        joiner: "_",
    },
    // kebab-case
    StyleRules {
        first: Casing::Lower,
        rest: Casing::Lower,
        joiner: "-",
    },
    // SCREAMING_SNAKE_CASE
    StyleRules {
        first: Casing::Upper,
        rest: Casing::Upper,
        joiner: "_",
    },
];

impl Style {
    /// Every style, in table order.
    pub const ALL: [Style; 5] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Kebab,
        Style::ScreamingSnake,
    ];

    /// Returns the composition policy for this style.
    pub fn rules(self) -> &'static StyleRules {
        &RULES[self as usize]
    }

    /// The canonical name of the style, written in the style itself.
    pub fn name(self) -> &'static str {
        match self {
            Style::Camel => "camelCase",
            Style::Pascal => "PascalCase",
            Style::Snake => "snake_case",
            Style::Kebab => "kebab-case",
            Style::ScreamingSnake => "SCREAMING_SNAKE_CASE",
        }
    }

    /// Converts `src` to this style.
    ///
    /// Equivalent to [`convert(src, self)`](crate::convert).
    pub fn apply(self, src: &str) -> String {
        compose::convert(src, self)
    }
}

impl Casing {
    /// Appends `word` to `dst` with this casing applied.
    pub(crate) fn push_word(self, word: &str, dst: &mut String) {
        match self {
            Casing::Lower => dst.push_str(&word.to_lowercase()),
            Casing::Upper => dst.push_str(&word.to_uppercase()),
            Casing::Capitalized => dst.push_str(&crate::capitalize(&word.to_lowercase())),
        }
    }
}

impl core::fmt::Display for Style {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parses a canonical style name (`camelCase`, `snake_case`, ...) or one
    /// of the short aliases `camel`, `pascal`, `snake`, `kebab` and
    /// `screaming-snake`. Aliases are matched case-insensitively.
    fn from_str(s: &str) -> Result<Style, Error> {
        if let Some(style) = Style::ALL.into_iter().find(|style| style.name() == s) {
            return Ok(style);
        }

        match s.to_ascii_lowercase().as_str() {
            "camel" => Ok(Style::Camel),
            "pascal" => Ok(Style::Pascal),
            "snake" => Ok(Style::Snake),
            "kebab" => Ok(Style::Kebab),
            "screaming-snake" | "screaming_snake" => Ok(Style::ScreamingSnake),
            _ => Err(Error::unknown_style(s)),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = Error;

    fn try_from(value: String) -> Result<Style, Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> String {
        style.name().to_owned()
    }
}
