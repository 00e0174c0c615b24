use proptest::prelude::*;
use setup_fs::NormalizedPath;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "[a-z./\\\\]{0,24}") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(
            as_str == "." || !as_str.split('/').any(|c| c == "."),
            "dot component in {}",
            as_str
        );

        let again = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, again);
    }

    #[test]
    fn join_of_plain_segment_stays_under_base(segment in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let base = NormalizedPath::new("/project");
        let joined = base.join(&segment);
        prop_assert_eq!(joined.relative_to(&base), Some(segment));
    }
}
