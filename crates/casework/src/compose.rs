use crate::{split, Style, Words};

/// Joins `words` into a single identifier written in `style`.
///
/// The original casing of each word is discarded; the style's
/// [`rules`](Style::rules) alone decide the output.
pub fn compose(words: &Words<'_>, style: Style) -> String {
    compose_iter(words, style)
}

pub(crate) fn compose_iter<I>(words: I, style: Style) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let rules = style.rules();
    let mut dst = String::new();

    for (i, word) in words.into_iter().enumerate() {
        if i == 0 {
            rules.first.push_word(word.as_ref(), &mut dst);
        } else {
            dst.push_str(rules.joiner);
            rules.rest.push_word(word.as_ref(), &mut dst);
        }
    }

    dst
}

/// Converts `src` to `style` by splitting it into words and composing them.
pub fn convert(src: &str, style: Style) -> String {
    let converted = compose(&split(src), style);
    log::trace!("convert {src:?} to {style}: {converted:?}");
    converted
}

/// Converts `src` to `camelCase`.
///
/// ```
/// assert_eq!(casework::camel_case("hello_world"), "helloWorld");
/// ```
pub fn camel_case(src: &str) -> String {
    convert(src, Style::Camel)
}

/// Converts `src` to `PascalCase`.
///
/// ```
/// assert_eq!(casework::pascal_case("XMLHttpRequest"), "XmlHttpRequest");
/// ```
pub fn pascal_case(src: &str) -> String {
    convert(src, Style::Pascal)
}

/// Converts `src` to `snake_case`.
pub fn snake_case(src: &str) -> String {
    convert(src, Style::Snake)
}

/// Converts `src` to `kebab-case`.
pub fn kebab_case(src: &str) -> String {
    convert(src, Style::Kebab)
}

/// Converts `src` to `SCREAMING_SNAKE_CASE`.
pub fn screaming_snake_case(src: &str) -> String {
    convert(src, Style::ScreamingSnake)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_empty() {
        for style in Style::ALL {
            assert_eq!(compose(&Words::default(), style), "");
        }
    }

    #[test]
    fn compose_discards_original_case() {
        let words = split("hELLO_World_XML");
        assert_eq!(compose(&words, Style::Camel), "helloWorldXml");
        assert_eq!(compose(&words, Style::Pascal), "HelloWorldXml");
        assert_eq!(compose(&words, Style::Snake), "hello_world_xml");
        assert_eq!(compose(&words, Style::Kebab), "hello-world-xml");
        assert_eq!(compose(&words, Style::ScreamingSnake), "HELLO_WORLD_XML");
    }

    #[test]
    fn compose_owned_parts() {
        let parts = vec!["user".to_owned(), "ID".to_owned()];
        assert_eq!(compose_iter(&parts, Style::Pascal), "UserId");
    }

    #[test]
    fn single_word() {
        assert_eq!(camel_case("Hello"), "hello");
        assert_eq!(pascal_case("hello"), "Hello");
        assert_eq!(screaming_snake_case("hello"), "HELLO");
    }

    #[test]
    fn digits_keep_their_place() {
        assert_eq!(camel_case("user_2_name"), "user2Name");
        assert_eq!(snake_case("v2Api"), "v2_api");
        assert_eq!(camel_case("oauth2_token"), "oauth2Token");
        assert_eq!(snake_case("page1Title"), "page1_title");
        assert_eq!(kebab_case("item_42"), "item-42");
    }
}
