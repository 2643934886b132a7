//! Property-based tests for skills parsing and date ranges

use chrono::NaiveDate;
use proptest::prelude::*;

use devconnect::shared::profile::{parse_date_range, parse_skills};

proptest! {
    #[test]
    fn test_skills_are_trimmed_and_non_empty(raw in "[a-zA-Z ,]{0,60}") {
        for skill in parse_skills(&raw) {
            prop_assert!(!skill.is_empty());
            prop_assert_eq!(skill.trim(), skill.as_str());
            prop_assert!(!skill.contains(','));
        }
    }

    #[test]
    fn test_joined_skills_parse_back(skills in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,10}", 0..8)) {
        prop_assert_eq!(parse_skills(&skills.join(",")), skills.clone());
        prop_assert_eq!(parse_skills(&skills.join(" , ")), skills);
    }

    #[test]
    fn test_current_ignores_to_date(days in 0i64..20_000, to in "\\PC{0,12}") {
        let from = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days);
        let from = from.format("%Y-%m-%d").to_string();
        let range = parse_date_range(&from, Some(&to), true).unwrap();
        prop_assert_eq!(range.to, None);
    }

    #[test]
    fn test_to_never_before_from(a in 0i64..20_000, b in 0i64..20_000) {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let from = (epoch + chrono::Duration::days(a)).format("%Y-%m-%d").to_string();
        let to = (epoch + chrono::Duration::days(b)).format("%Y-%m-%d").to_string();
        let result = parse_date_range(&from, Some(&to), false);
        prop_assert_eq!(result.is_ok(), b >= a);
    }
}
