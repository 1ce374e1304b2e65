use pods_fs::{NormalizedPath, validate_path_segment};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn valid_segment_is_the_joined_file_name(segment in "[A-Za-z0-9_.-]{1,24}") {
        prop_assume!(validate_path_segment(&segment).is_ok());

        let joined = NormalizedPath::new(".symlinks/plugins").join(&segment);

        prop_assert_eq!(joined.file_name(), Some(segment.as_str()));
        let parent = joined.parent().unwrap();
        prop_assert_eq!(parent.as_str(), ".symlinks/plugins");
    }
}
