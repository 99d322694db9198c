//! Property-based tests for path classification.

use super::{classify, split_segments, ClassifyOptions};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 _-]{1,12}",
        "[A-Za-z0-9_-]{1,8}\\.[A-Za-z0-9]{1,6}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\\"), Just("/"), Just("\\\\"), Just("//"), Just("\\/")]
}

fn path_strategy() -> impl Strategy<Value = (Option<char>, Vec<String>)> {
    (
        prop::option::of(prop::char::range('A', 'Z')),
        prop::collection::vec(segment_strategy(), 1..8),
    )
}

fn render(drive: Option<char>, segments: &[String], separators: &[&str]) -> String {
    let mut line = drive.map(|d| format!("{d}:")).unwrap_or_default();
    for (i, segment) in segments.iter().enumerate() {
        line.push_str(separators[i % separators.len()]);
        line.push_str(segment);
    }
    line
}

proptest! {
    // file_name is present exactly when the entry is a file
    #[test]
    fn file_name_iff_is_file((drive, segments) in path_strategy()) {
        let line = render(drive, &segments, &["\\"]);
        let entry = classify(&line, &ClassifyOptions::default()).unwrap();
        prop_assert_eq!(entry.file_name().is_some(), entry.is_file());
        prop_assert_eq!(
            entry.folders().len() + usize::from(entry.is_file()),
            entry.segments().len()
        );
    }

    // Separator style never changes the classification
    #[test]
    fn separator_style_independent(
        (drive, segments) in path_strategy(),
        separators in prop::collection::vec(separator_strategy(), 1..4),
    ) {
        let options = ClassifyOptions::default();
        let canonical = classify(&render(drive, &segments, &["\\"]), &options);
        let mixed = classify(&render(drive, &segments, &separators), &options);
        prop_assert_eq!(canonical, mixed);
    }

    // Segments never contain separators and are never empty
    #[test]
    fn segments_are_clean(s in "[a-z\\\\/]{0,30}") {
        for segment in split_segments(&s) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains(['\\', '/']));
        }
    }

    // Filtering only ever removes non-file entries
    #[test]
    fn filter_keeps_only_files((drive, segments) in path_strategy()) {
        let line = render(drive, &segments, &["/"]);
        let filtering = ClassifyOptions { filter_files: true, ..Default::default() };
        let unfiltered = classify(&line, &ClassifyOptions::default()).unwrap();
        match classify(&line, &filtering) {
            Some(entry) => prop_assert_eq!(entry, unfiltered),
            None => prop_assert!(!unfiltered.is_file()),
        }
    }
}
