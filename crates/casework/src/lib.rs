//! Converts identifiers between naming conventions and inflects
//! identifier-like nouns.
//!
//! ```
//! use casework::Style;
//!
//! assert_eq!(casework::snake_case("HelloWorld"), "hello_world");
//! assert_eq!(Style::Kebab.apply("XMLHttpRequest"), "xml-http-request");
//! assert_eq!(casework::pluralize("batch"), "batches");
//! ```

mod compose;
pub use compose::{
    camel_case, compose, convert, kebab_case, pascal_case, screaming_snake_case, snake_case,
};

mod error;
pub use error::Error;

mod inflect;
pub use inflect::{pluralize, singularize, Inflection};

mod name;
pub use name::Name;

mod simple;
pub use simple::{capitalize, lowercase, uncapitalize, uppercase};

mod split;
pub use split::{split, Words};

mod style;
pub use style::{Casing, Style, StyleRules};

/// A Result type alias that uses casework's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
