//! Property-based tests for ordering guarantees

use proptest::prelude::*;
use quill::prompt::render_code_context;
use quill::source::{SourceFile, SourceSet};

/// The serialized context embeds each file exactly once, in input order, for
/// any permutation of the input list.
#[test]
fn test_context_order_preservation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let contents = proptest::collection::vec("[a-z0-9 \\n]{0,40}", 1..8);
    runner
        .run(&contents.prop_shuffle(), |contents| {
            let files: Vec<SourceFile> = contents
                .iter()
                .enumerate()
                .map(|(i, content)| SourceFile::new(format!("file-{i}.rs"), content.clone()))
                .collect();

            let context = render_code_context(&files);

            let mut last = 0usize;
            for file in &files {
                let marker = format!("File: {}", file.name);
                let pos = context[last..]
                    .find(&marker)
                    .expect("every file appears after its predecessor");
                assert_eq!(
                    context.matches(&marker).count(),
                    1,
                    "each file appears exactly once"
                );
                last += pos + marker.len();
            }
            Ok(())
        })
        .unwrap();
}

/// The aggregator is append-only and order-preserving for any sequence of
/// add_files calls.
#[test]
fn test_aggregator_append_order_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let batches = proptest::collection::vec(
        proptest::collection::vec("[a-z]{1,8}", 0..5),
        0..6,
    );
    runner
        .run(&batches, |batches| {
            let expected: Vec<String> = batches.iter().flatten().cloned().collect();

            let mut set = SourceSet::new();
            for batch in &batches {
                set.add_files(batch.iter().map(|name| SourceFile::new(name.clone(), "")));
            }

            assert_eq!(set.len(), expected.len());
            let names: Vec<String> = set.files().iter().map(|f| f.name.clone()).collect();
            assert_eq!(names, expected);
            Ok(())
        })
        .unwrap();
}

/// Removing an in-bounds index drops exactly that entry; out-of-bounds
/// removals change nothing.
#[test]
fn test_remove_file_bounds_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let input = (proptest::collection::vec("[a-z]{1,8}", 0..10), any::<usize>());
    runner
        .run(&input, |(names, index)| {
            let mut set = SourceSet::new();
            set.add_files(names.iter().map(|name| SourceFile::new(name.clone(), "")));

            set.remove_file(index);

            let mut expected = names.clone();
            if index < expected.len() {
                expected.remove(index);
            }
            let got: Vec<String> = set.files().iter().map(|f| f.name.clone()).collect();
            assert_eq!(got, expected);
            Ok(())
        })
        .unwrap();
}
