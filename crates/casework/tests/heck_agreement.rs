//! For letters-only identifiers the conversions agree with `heck`.

use casework::Style;
use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use pretty_assertions::assert_eq;

const IDENTIFIERS: &[&str] = &[
    "hello",
    "helloWorld",
    "HelloWorld",
    "hello_world",
    "hello-world",
    "hello world",
    "HELLO_WORLD",
    "XMLHttpRequest",
    "parseXML",
    "userID",
    "getHTTPResponseCode",
    "already_snake_case",
    "kebab-case-name",
    "PascalCaseName",
];

fn heck(src: &str, style: Style) -> String {
    match style {
        Style::Camel => src.to_lower_camel_case(),
        Style::Pascal => src.to_upper_camel_case(),
        Style::Snake => src.to_snake_case(),
        Style::Kebab => src.to_kebab_case(),
        Style::ScreamingSnake => src.to_shouty_snake_case(),
    }
}

#[test]
fn agrees_with_heck() {
    for style in Style::ALL {
        for src in IDENTIFIERS {
            assert_eq!(style.apply(src), heck(src, style), "{style} of {src:?}");
        }
    }
}
