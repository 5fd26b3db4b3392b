use super::Error;

#[derive(Debug)]
pub(super) struct UnknownInflection {
    name: Box<str>,
}

impl std::error::Error for UnknownInflection {}

impl core::fmt::Display for UnknownInflection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown inflection `{}`; expected `plural` or `singular`",
            self.name
        )
    }
}

impl Error {
    pub fn unknown_inflection(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownInflection(UnknownInflection {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_inflection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownInflection(_))
    }
}
