//! Prompt assembly: deterministic serialization and order preservation.

use quill::config::{ReadmeConfig, ReadmeStyle};
use quill::prompt::{build_prompt, render_code_context};
use quill::source::SourceFile;

#[test]
fn context_embeds_name_and_content_per_file() {
    let files = vec![SourceFile::new("a.ts", "x")];
    assert_eq!(render_code_context(&files), "File: a.ts\n```\nx\n```");
}

#[test]
fn context_joins_files_with_blank_lines_in_order() {
    let files = vec![
        SourceFile::new("one.rs", "1"),
        SourceFile::new("two.rs", "2"),
    ];
    assert_eq!(
        render_code_context(&files),
        "File: one.rs\n```\n1\n```\n\nFile: two.rs\n```\n2\n```"
    );
}

#[test]
fn context_order_follows_input_for_every_permutation() {
    let base = vec![
        SourceFile::new("m0.rs", "a"),
        SourceFile::new("m1.rs", "b"),
        SourceFile::new("m2.rs", "c"),
    ];
    let permutations: Vec<Vec<usize>> = vec![
        vec![0, 1, 2],
        vec![0, 2, 1],
        vec![1, 0, 2],
        vec![1, 2, 0],
        vec![2, 0, 1],
        vec![2, 1, 0],
    ];

    for permutation in permutations {
        let files: Vec<SourceFile> = permutation.iter().map(|&i| base[i].clone()).collect();
        let context = render_code_context(&files);
        let positions: Vec<usize> = files
            .iter()
            .map(|f| context.find(&format!("File: {}", f.name)).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "context order must match input order for {:?}",
            permutation
        );
    }
}

#[test]
fn prompt_requires_every_structural_section() {
    let prompt = build_prompt(&ReadmeConfig::default(), &[SourceFile::new("a.rs", "")]);
    for section in [
        "Header",
        "Description",
        "Features",
        "Installation",
        "Usage",
        "Roadmap",
        "Contributing",
        "License",
    ] {
        assert!(prompt.contains(section), "missing section: {}", section);
    }
}

#[test]
fn prompt_carries_style_and_toggle_choices() {
    let config = ReadmeConfig {
        project_name: "demo".to_string(),
        repo_url: None,
        include_license: true,
        include_badges: false,
        style: ReadmeStyle::Playful,
    };
    let prompt = build_prompt(&config, &[SourceFile::new("a.rs", "")]);

    assert!(prompt.contains("Style: playful"));
    assert!(prompt.contains("Include Badges: false"));
    assert!(prompt.contains("Include License: true"));
    assert!(prompt.contains("Repository URL: Not provided"));
}
