//! Package name validation and derivation through the public API.

use pretty_assertions::assert_eq;

use create_ckeditor5_plugin::package_name::{derive, validate};

mod validation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_the_canonical_shape() {
        let result = validate("@scope/ckeditor5-name");
        assert!(result.is_valid());
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn rejects_overlong_names_with_the_length_reason() {
        let name = format!("@scope/ckeditor5-{}", "x".repeat(300));
        let result = validate(&name);
        assert!(!result.is_valid());
        assert!(result
            .reasons()
            .contains(&"Name can not be longer than 214 characters."));
    }

    #[test]
    fn rejects_unscoped_names_with_the_pattern_reason() {
        for name in ["ckeditor5-name", "@scope/name", "scope/ckeditor5-name", ""] {
            let result = validate(name);
            assert!(!result.is_valid(), "{name:?}");
            assert!(
                result
                    .reasons()
                    .contains(&"Name has to follow the correct pattern."),
                "{name:?}"
            );
        }
    }

    #[test]
    fn rejects_capital_letters_with_the_case_reason() {
        let result = validate("@Scope/ckeditor5-name");
        assert_eq!(result.reasons(), ["Capital letters are not allowed."]);
    }

    #[test]
    fn rejects_forbidden_characters_with_a_single_reason() {
        let result = validate("@scope/ckeditor5-na(me)");
        assert_eq!(result.reasons(), ["Name contains invalid characters."]);
    }

    #[test]
    fn reports_every_violated_rule() {
        let result = validate("@Scope/ckeditor5-na me");
        assert_eq!(
            result.reasons(),
            [
                "Name contains invalid characters.",
                "Capital letters are not allowed.",
            ]
        );
    }
}

mod derivation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derives_the_documented_identifiers() {
        let ids = derive("@scope/ckeditor5-rich-text");
        assert_eq!(ids.directory_name, "ckeditor5-rich-text");
        assert_eq!(ids.global_key, "richText");
        assert_eq!(ids.output_file_name, "rich-text.js");
    }

    #[test]
    fn handles_a_single_character_suffix() {
        let ids = derive("@scope/ckeditor5-a");
        assert_eq!(ids.directory_name, "ckeditor5-a");
        assert_eq!(ids.global_key, "a");
        assert_eq!(ids.output_file_name, "a.js");
    }

    #[test]
    fn validate_then_derive_is_deterministic() {
        let name = "@org/ckeditor5-special-characters";
        assert!(validate(name).is_valid());
        assert_eq!(derive(name), derive(name));
        assert_eq!(derive(name).global_key, "specialCharacters");
    }
}
