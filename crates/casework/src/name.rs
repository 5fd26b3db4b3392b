use crate::{compose, inflect, split, Inflection, Style, Words};

/// An identifier that has already been split into words.
///
/// Useful when the same name is rendered in several styles, e.g. a model
/// that becomes a `PascalCase` type, a `snake_case` table and a
/// `SCREAMING_SNAKE_CASE` constant.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        Self::from_words(&split(src))
    }

    pub fn from_words(words: &Words<'_>) -> Self {
        let parts = words.iter().map(|word| word.to_lowercase()).collect();
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn to_case(&self, style: Style) -> String {
        compose::compose_iter(&self.parts, style)
    }

    pub fn camel_case(&self) -> String {
        self.to_case(Style::Camel)
    }

    pub fn pascal_case(&self) -> String {
        self.to_case(Style::Pascal)
    }

    pub fn snake_case(&self) -> String {
        self.to_case(Style::Snake)
    }

    pub fn kebab_case(&self) -> String {
        self.to_case(Style::Kebab)
    }

    pub fn screaming_snake_case(&self) -> String {
        self.to_case(Style::ScreamingSnake)
    }

    /// Returns the name with its last word pluralized.
    pub fn plural(&self) -> Name {
        self.map_last(inflect::pluralize)
    }

    /// Returns the name with its last word singularized.
    pub fn singular(&self) -> Name {
        self.map_last(inflect::singularize)
    }

    pub fn inflect(&self, inflection: Inflection) -> Name {
        match inflection {
            Inflection::Plural => self.plural(),
            Inflection::Singular => self.singular(),
        }
    }

    fn map_last(&self, f: impl FnOnce(&str) -> String) -> Name {
        let mut parts = self.parts.clone();
        if let Some(last) = parts.last_mut() {
            *last = f(last);
        }
        Name { parts }
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.snake_case())
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Name {
        Name::new(src)
    }
}
