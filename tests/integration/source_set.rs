//! Input aggregator behavior: append-only ordering and bounded removal.

use quill::source::{read_sources, SourceFile, SourceSet};

#[test]
fn list_length_equals_sum_of_added_entries() {
    let mut set = SourceSet::new();
    let batches = vec![
        vec![SourceFile::new("a", "1"), SourceFile::new("b", "2")],
        vec![],
        vec![
            SourceFile::new("c", "3"),
            SourceFile::new("d", "4"),
            SourceFile::new("e", "5"),
        ],
    ];
    let expected: Vec<String> = batches
        .iter()
        .flatten()
        .map(|f| f.name.clone())
        .collect();

    for batch in batches {
        set.add_files(batch);
    }

    assert_eq!(set.len(), 5);
    let names: Vec<String> = set.files().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, expected, "call order is preserved");
}

#[test]
fn remove_within_bounds_shifts_left_by_one() {
    let mut set = SourceSet::new();
    set.add_files((0..4).map(|i| SourceFile::new(format!("f{i}"), "")));

    set.remove_file(1);

    let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["f0", "f2", "f3"]);
}

#[test]
fn remove_out_of_bounds_leaves_list_unchanged() {
    let mut set = SourceSet::new();
    set.add_files(vec![SourceFile::new("only", "")]);

    set.remove_file(1);
    set.remove_file(usize::MAX);

    assert_eq!(set.len(), 1);
    assert_eq!(set.files()[0].name, "only");
}

#[test]
fn read_sources_mixes_files_and_directories_in_argument_order() {
    let temp = tempfile::tempdir().unwrap();
    let standalone = temp.path().join("standalone.rs");
    std::fs::write(&standalone, "fn s() {}").unwrap();

    let dir = temp.path().join("lib");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("a.rs"), "a").unwrap();
    std::fs::write(dir.join("b.rs"), "b").unwrap();

    let files = read_sources(&[dir.clone(), standalone.clone()]).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.rs", "b.rs", "standalone.rs"]);
}
