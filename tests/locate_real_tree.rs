// tests/locate_real_tree.rs

mod common;
use crate::common::init_tracing;

use std::fs;

use rootbuild::fs::RealFileSystem;
use rootbuild::locate::{Located, Locator};
use rootbuild_test_utils::builders::ProjectTreeBuilder;
use rootbuild_test_utils::recording::{CountingFileSystem, RecordingObserver};

#[test]
fn nested_start_ascends_two_levels_to_project() {
    init_tracing();

    let tree = ProjectTreeBuilder::new("abc123")
        .file("Cargo.toml", "[package]\nname = \"demo\"\n")
        .dir("src/nested")
        .build();

    let fs = CountingFileSystem::new(RealFileSystem);
    let observer = RecordingObserver::new();
    let start = tree.project_dir().join("src").join("nested");

    let located = Locator::new(&fs, "Cargo.toml")
        .with_observer(&observer)
        .locate(&start);

    assert_eq!(located, Located::Found(tree.project_dir()));
    assert_eq!(fs.file_probes(), 3);
    assert_eq!(
        observer.seen(),
        vec![
            (start.clone(), false),
            (tree.project_dir().join("src"), false),
            (tree.project_dir(), true),
        ]
    );
}

#[test]
fn nested_manifest_shadows_outer_one() {
    init_tracing();

    let tree = ProjectTreeBuilder::new("bucket")
        .file("Cargo.toml", "[workspace]\n")
        .file("crates/inner/Cargo.toml", "[package]\n")
        .dir("crates/inner/src")
        .build();

    let start = tree.project_dir().join("crates/inner/src");
    let located = Locator::new(&RealFileSystem, "Cargo.toml").locate(&start);

    assert_eq!(located, Located::Found(tree.project_dir().join("crates/inner")));
}

#[test]
fn locating_leaves_the_tree_untouched() {
    init_tracing();

    let tree = ProjectTreeBuilder::new("bucket")
        .file("Cargo.toml", "")
        .dir("a/b")
        .build();

    let snapshot = |dir: &std::path::Path| {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        names.sort();
        names
    };

    let before = snapshot(&tree.project_dir());
    let locator = Locator::new(&RealFileSystem, "Cargo.toml");
    let first = locator.locate(&tree.project_dir().join("a/b"));
    let second = locator.locate(&tree.project_dir().join("a/b"));

    assert_eq!(first, second);
    assert_eq!(before, snapshot(&tree.project_dir()));
}
