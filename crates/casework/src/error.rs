mod unknown_inflection;
mod unknown_style;

use std::sync::Arc;
use unknown_inflection::UnknownInflection;
use unknown_style::UnknownStyle;

/// An error that can occur in casework.
///
/// Case conversion itself never fails. Errors only come from parsing the
/// name of a [`Style`](crate::Style) or [`Inflection`](crate::Inflection)
/// supplied by a user, for example on the command line or in a config file.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", self.kind())
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    UnknownStyle(UnknownStyle),
    UnknownInflection(UnknownInflection),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorKind::UnknownStyle(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::UnknownInflection(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Error stays one word wide
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn debug_matches_display_unless_alternate() {
        let err = Error::unknown_style("hungarian");
        assert_eq!(format!("{err:?}"), err.to_string());
        assert!(format!("{err:#?}").contains("UnknownStyle"));
    }
}
