//! Whole-string and first-character case transforms.
//!
//! Unlike the style conversions these never split the input into words and
//! never touch delimiters.

/// Uppercases every character of `src`.
pub fn uppercase(src: &str) -> String {
    src.to_uppercase()
}

/// Lowercases every character of `src`.
pub fn lowercase(src: &str) -> String {
    src.to_lowercase()
}

/// Uppercases the first character of `src` and leaves the rest untouched.
///
/// ```
/// assert_eq!(casework::capitalize("hello"), "Hello");
/// assert_eq!(casework::capitalize("HELLO"), "HELLO");
/// ```
pub fn capitalize(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character of `src` and leaves the rest untouched.
pub fn uncapitalize(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(uppercase(""), "");
        assert_eq!(lowercase(""), "");
        assert_eq!(capitalize(""), "");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn whole_string() {
        assert_eq!(uppercase("hello-world_1"), "HELLO-WORLD_1");
        assert_eq!(lowercase("Hello-World_1"), "hello-world_1");
    }

    #[test]
    fn capitalize_leaves_rest() {
        assert_eq!(capitalize("HELLO"), "HELLO");
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("1st"), "1st");
    }

    #[test]
    fn uncapitalize_leaves_rest() {
        assert_eq!(uncapitalize("HELLO"), "hELLO");
        assert_eq!(uncapitalize("Hello"), "hello");
        assert_eq!(uncapitalize("_Hello"), "_Hello");
    }

    #[test]
    fn multi_char_case_mapping() {
        assert_eq!(capitalize("ßeta"), "SSeta");
    }
}
