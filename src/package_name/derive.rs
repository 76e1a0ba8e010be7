//! Identifier derivation for validated package names.

use super::PACKAGE_NAME_PREFIX;

/// Identifiers computed from a validated package name.
///
/// These feed the template variables of the generated package, so their
/// exact casing and the absence of the `ckeditor5-` prefix matter for the
/// produced DLL build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    /// Directory the package is created in (local name, scope discarded).
    pub directory_name: String,
    /// Key under which webpack exposes the bundle on `window.CKEditor5`.
    pub global_key: String,
    /// File name of the DLL build output.
    pub output_file_name: String,
}

/// Derives the directory name, global namespace key and DLL file name from
/// a package name.
///
/// The input must already have passed [`super::validate`]; the result for a
/// name that never did is unspecified (it is not re-validated here). A
/// local name without the `ckeditor5-` prefix is kept whole rather than
/// treated as an error.
pub fn derive(name: &str) -> DerivedIdentifiers {
    let local_name = name.split('/').nth(1).unwrap_or(name);
    let slug = local_name
        .strip_prefix(PACKAGE_NAME_PREFIX)
        .unwrap_or(local_name);

    DerivedIdentifiers {
        directory_name: local_name.to_string(),
        global_key: camelize(slug),
        output_file_name: format!("{slug}.js"),
    }
}

/// Replaces each `-<ascii lowercase>` pair with the uppercased letter;
/// every other character is kept as-is.
fn camelize(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    let mut chars = slug.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}
