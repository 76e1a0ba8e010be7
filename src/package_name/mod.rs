//! Package name validation and identifier derivation.
//!
//! Packages generated by the tool follow the `@scope/ckeditor5-name`
//! convention. [`validate`] checks a candidate name against the npm naming
//! rules plus that convention; [`derive`] turns an accepted name into the
//! identifiers consumed by the generated DLL build configuration.

mod derive;
mod validate;

pub use derive::{derive, DerivedIdentifiers};
pub use validate::{
    validate, ValidationResult, REASON_BAD_PATTERN, REASON_CAPITAL_LETTERS,
    REASON_INVALID_CHARACTERS, REASON_TOO_LONG,
};

/// Required prefix of the local (post-scope) segment of a package name.
pub const PACKAGE_NAME_PREFIX: &str = "ckeditor5-";
