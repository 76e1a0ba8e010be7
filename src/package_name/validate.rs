//! Candidate package name validation.

use std::sync::LazyLock;

use regex::Regex;

use super::PACKAGE_NAME_PREFIX;

/// npm rejects new package names longer than this (legacy packages exempt).
const MAX_NAME_LENGTH: usize = 214;

// Stable reason strings, surfaced verbatim; callers may match on them.
pub const REASON_TOO_LONG: &str = "Name can not be longer than 214 characters.";
pub const REASON_BAD_PATTERN: &str = "Name has to follow the correct pattern.";
pub const REASON_INVALID_CHARACTERS: &str = "Name contains invalid characters.";
pub const REASON_CAPITAL_LETTERS: &str = "Capital letters are not allowed.";

/// Matches `@scope/ckeditor5-name`, capturing the scope and the suffix.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^@([^/]+)/{}([^/]+)$", PACKAGE_NAME_PREFIX)).unwrap()
});

/// Outcome of validating a candidate package name.
///
/// Holds the distinct human-readable reasons for every violated rule, in
/// rule order. The reason strings are a stable contract; callers surface
/// them verbatim and may match on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    reasons: Vec<&'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Reasons for rejection, one per violated rule.
    pub fn reasons(&self) -> &[&'static str] {
        &self.reasons
    }
}

/// Checks whether `name` is acceptable for a generated package.
///
/// Rules are applied independently, each contributing its own reason:
///
/// 1. at most 214 characters,
/// 2. matches `@scope/ckeditor5-name`,
/// 3. scope and suffix survive URI-component percent-encoding unchanged,
/// 4. none of `~ ' ! ( ) *` anywhere in the name (these survive
///    percent-encoding but npm still rejects them),
/// 5. no uppercase ASCII letters.
///
/// Rule 3 is skipped when rule 2 fails since there are no captured segments
/// to check. Rules 3 and 4 share a reason string, reported at most once.
pub fn validate(name: &str) -> ValidationResult {
    let mut reasons = Vec::new();

    if name.len() > MAX_NAME_LENGTH {
        reasons.push(REASON_TOO_LONG);
    }

    match NAME_PATTERN.captures(name) {
        None => reasons.push(REASON_BAD_PATTERN),
        Some(captures) => {
            let scope = &captures[1];
            let suffix = &captures[2];

            if !is_uri_component_safe(scope) || !is_uri_component_safe(suffix) {
                reasons.push(REASON_INVALID_CHARACTERS);
            }
        }
    }

    if name.contains(['~', '\'', '!', '(', ')', '*'])
        && !reasons.contains(&REASON_INVALID_CHARACTERS)
    {
        reasons.push(REASON_INVALID_CHARACTERS);
    }

    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        reasons.push(REASON_CAPITAL_LETTERS);
    }

    ValidationResult { reasons }
}

/// True when `segment` is unchanged by URI-component percent-encoding,
/// i.e. consists only of `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
fn is_uri_component_safe(segment: &str) -> bool {
    segment.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_name() {
        let result = validate("@scope/ckeditor5-name");
        assert!(result.is_valid());
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn accepts_multi_word_suffix() {
        assert!(validate("@my-org/ckeditor5-rich-text").is_valid());
    }

    #[test]
    fn accepts_dots_and_underscores() {
        assert!(validate("@sco_pe.x/ckeditor5-na_me.y").is_valid());
    }

    #[test]
    fn rejects_name_longer_than_214_characters() {
        let name = format!("@scope/ckeditor5-{}", "a".repeat(214));
        let result = validate(&name);
        assert!(!result.is_valid());
        assert!(result.reasons().contains(&REASON_TOO_LONG));
    }

    #[test]
    fn accepts_name_of_exactly_214_characters() {
        let name = format!("@scope/ckeditor5-{}", "a".repeat(214 - 17));
        assert_eq!(name.len(), 214);
        assert!(validate(&name).is_valid());
    }

    #[test]
    fn rejects_missing_scope() {
        let result = validate("ckeditor5-name");
        assert_eq!(result.reasons(), [REASON_BAD_PATTERN]);
    }

    #[test]
    fn rejects_missing_prefix() {
        let result = validate("@scope/name");
        assert_eq!(result.reasons(), [REASON_BAD_PATTERN]);
    }

    #[test]
    fn rejects_extra_path_segment() {
        let result = validate("@scope/ckeditor5-na/me");
        assert_eq!(result.reasons(), [REASON_BAD_PATTERN]);
    }

    #[test]
    fn rejects_empty_suffix() {
        let result = validate("@scope/ckeditor5-");
        assert_eq!(result.reasons(), [REASON_BAD_PATTERN]);
    }

    #[test]
    fn rejects_characters_escaped_by_percent_encoding() {
        let result = validate("@sco pe/ckeditor5-name");
        assert_eq!(result.reasons(), [REASON_INVALID_CHARACTERS]);

        let result = validate("@scope/ckeditor5-na#me");
        assert_eq!(result.reasons(), [REASON_INVALID_CHARACTERS]);
    }

    #[test]
    fn rejects_non_ascii_characters() {
        let result = validate("@scope/ckeditor5-náme");
        assert_eq!(result.reasons(), [REASON_INVALID_CHARACTERS]);
    }

    #[test]
    fn rejects_forbidden_literals_without_duplicating_the_reason() {
        // Parentheses survive percent-encoding, so only rule 4 catches them.
        let result = validate("@scope/ckeditor5-na(me)");
        assert_eq!(result.reasons(), [REASON_INVALID_CHARACTERS]);

        for name in [
            "@scope/ckeditor5-na~me",
            "@scope/ckeditor5-na'me",
            "@scope/ckeditor5-na!me",
            "@scope/ckeditor5-na*me",
        ] {
            let result = validate(name);
            assert_eq!(result.reasons(), [REASON_INVALID_CHARACTERS], "{name}");
        }
    }

    #[test]
    fn rejects_capital_letters() {
        let result = validate("@Scope/ckeditor5-name");
        assert_eq!(result.reasons(), [REASON_CAPITAL_LETTERS]);

        let result = validate("@scope/ckeditor5-Name");
        assert_eq!(result.reasons(), [REASON_CAPITAL_LETTERS]);
    }

    #[test]
    fn collects_reasons_from_independent_rules_in_rule_order() {
        let name = format!("@Scope/ckeditor5-{}(x)", "a".repeat(220));
        let result = validate(&name);
        assert_eq!(
            result.reasons(),
            [
                REASON_TOO_LONG,
                REASON_INVALID_CHARACTERS,
                REASON_CAPITAL_LETTERS,
            ]
        );
    }

    #[test]
    fn pattern_failure_still_reports_capital_letters() {
        let result = validate("NotAPackage");
        assert_eq!(result.reasons(), [REASON_BAD_PATTERN, REASON_CAPITAL_LETTERS]);
    }

    #[test]
    fn validation_is_idempotent() {
        let first = validate("@scope/ckeditor5-na(me)");
        let second = validate("@scope/ckeditor5-na(me)");
        assert_eq!(first, second);
    }
}
