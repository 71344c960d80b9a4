mod prop_tests {
    use crate::{FilterOptions, downcode, filter};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn length_bound(s in ".{0,300}", max in 1usize..60) {
            let options = FilterOptions::new().max_length(max);
            let out = filter(&s, &options);
            prop_assert!(out.chars().count() <= max);
        }

        #[test]
        fn output_is_slug_charset(s in ".{0,200}") {
            let out = filter(&s, &FilterOptions::new());
            prop_assert!(out.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'));
        }

        #[test]
        fn downcode_is_deterministic(s in ".{0,200}", other in ".{0,50}") {
            let first = downcode(&s, "de");
            let _ = downcode(&other, "tr");
            let _ = downcode(&other, "ru");
            prop_assert_eq!(first, downcode(&s, "de"));
        }

        #[test]
        fn separators_collapse(s in "[a-z _\\-\"`]{0,80}") {
            let out = filter(&s, &FilterOptions::new());
            prop_assert!(!out.contains("--"));
            prop_assert!(!out.starts_with('-'));
            prop_assert!(!out.ends_with('-'));
        }

        #[test]
        fn clean_ascii_slug_is_fixed_point(s in "[a-z0-9]{1,20}(-[a-z0-9]{1,20}){0,5}") {
            let options = FilterOptions::new().lowercase(true);
            prop_assert_eq!(filter(&s, &options), s);
        }

        #[test]
        fn filter_is_idempotent(s in ".{0,200}") {
            let options = FilterOptions::new().lowercase(true);
            let once = filter(&s, &options);
            prop_assert_eq!(filter(&once, &options), once.clone());
        }
    }
}
