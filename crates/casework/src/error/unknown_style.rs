use super::Error;

/// Error when a string does not name any supported naming style.
#[derive(Debug)]
pub(super) struct UnknownStyle {
    name: Box<str>,
}

impl std::error::Error for UnknownStyle {}

impl core::fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown naming style `{}`; expected one of camelCase, PascalCase, \
             snake_case, kebab-case, SCREAMING_SNAKE_CASE",
            self.name
        )
    }
}

impl Error {
    /// Creates an unknown style error for the given user-supplied name.
    pub fn unknown_style(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownStyle(UnknownStyle {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown style error.
    pub fn is_unknown_style(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownStyle(_))
    }
}
