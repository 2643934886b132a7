//! Property-based tests for form state

use proptest::prelude::*;

use devconnect::client::FormState;

proptest! {
    #[test]
    fn test_with_field_leaves_original_untouched(name in "[a-z]{1,10}", value in "\\PC{0,20}") {
        let before = FormState::new().with_field("handle", "jane");
        let after = before.with_field(&name, value.clone());
        prop_assert_eq!(after.get(&name), value.as_str());
        prop_assert_eq!(before.get("handle"), "jane");
        if name != "handle" {
            prop_assert_eq!(before.get(&name), "");
        }
    }

    #[test]
    fn test_social_toggle_is_an_involution(times in 0usize..10) {
        let mut form = FormState::new();
        for _ in 0..times {
            form = form.toggle_social_inputs();
        }
        prop_assert_eq!(form.display_social_inputs(), times % 2 == 1);
    }

    #[test]
    fn test_blank_optional_inputs_are_none(spaces in " {0,5}") {
        let request = FormState::new().with_field("bio", spaces).to_profile_request();
        prop_assert_eq!(request.bio, None);
    }
}
