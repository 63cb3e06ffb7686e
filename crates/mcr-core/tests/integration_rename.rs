//! Integration test: scan a temp tree and run the rename pass over it.
//!
//! Exercises scan, extraction, deconfliction and rename together, including a
//! second pass over an already normalized tree.

mod common;

use common::video_dir::{default_video_types, VideoDir};
use mcr_core::rename::{rename_all, RenameOptions, RenameOutcome, SkipReason};
use mcr_core::scan::collect_video_files;
use std::fs;

#[test]
fn noisy_name_is_normalized() {
    let tree = VideoDir::new();
    tree.add("MOVIE-CODE-XYZ-001-com-site.mkv", b"movie");

    let files = collect_video_files(tree.root(), &default_video_types()).unwrap();
    let report = rename_all(&files, RenameOptions::default());

    assert_eq!(report.renamed(), 1);
    assert_eq!(tree.names_in(""), vec!["XYZ-001.mkv"]);
    assert_eq!(fs::read(tree.root().join("XYZ-001.mkv")).unwrap(), b"movie");
}

#[test]
fn collision_gets_numbered_suffix() {
    let tree = VideoDir::new();
    tree.add("XYZ-001.mkv", b"first");
    tree.add("MOVIE-CODE-XYZ-001-com-site.mkv", b"second");

    let files = collect_video_files(tree.root(), &default_video_types()).unwrap();
    let report = rename_all(&files, RenameOptions::default());

    assert_eq!(report.renamed(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(tree.names_in(""), vec!["XYZ-001.mkv", "XYZ-001_1.mkv"]);
    assert_eq!(fs::read(tree.root().join("XYZ-001.mkv")).unwrap(), b"first");
    assert_eq!(fs::read(tree.root().join("XYZ-001_1.mkv")).unwrap(), b"second");
}

#[test]
fn files_stay_in_their_directory() {
    let tree = VideoDir::new();
    tree.add("a/[hd]abc-100(2021).mp4", b"");
    tree.add("a/b/def-200-c.avi", b"");
    tree.add("a/b/notes.txt", b"");

    let files = collect_video_files(tree.root(), &default_video_types()).unwrap();
    assert_eq!(files.len(), 2);
    rename_all(&files, RenameOptions::default());

    assert_eq!(tree.names_in("a"), vec!["ABC-100.mp4", "b"]);
    assert_eq!(tree.names_in("a/b"), vec!["DEF-200-C.avi", "notes.txt"]);
}

#[test]
fn unrecognized_names_are_skipped() {
    let tree = VideoDir::new();
    let path = tree.add("randomfile.mp4", b"");

    let files = collect_video_files(tree.root(), &default_video_types()).unwrap();
    let report = rename_all(&files, RenameOptions::default());

    match &report.outcomes[..] {
        [RenameOutcome::Skipped { path: p, reason }] => {
            assert_eq!(p, &path);
            assert_eq!(*reason, SkipReason::AlreadyNamed);
        }
        other => panic!("expected one skip, got {other:?}"),
    }
    assert!(path.exists());
}

#[test]
fn second_pass_skips_everything() {
    let tree = VideoDir::new();
    tree.add("[site-com]abc-123(2020).mp4", b"");
    tree.add("sub/def-456-uc_net-promo.mkv", b"");
    tree.add("plain.avi", b"");

    let types = default_video_types();
    let first = rename_all(
        &collect_video_files(tree.root(), &types).unwrap(),
        RenameOptions::default(),
    );
    assert_eq!(first.renamed(), 2);
    assert_eq!(first.failed(), 0);

    let second = rename_all(
        &collect_video_files(tree.root(), &types).unwrap(),
        RenameOptions::default(),
    );
    assert_eq!(second.renamed(), 0);
    assert_eq!(second.skipped(), 3);
    assert_eq!(tree.names_in(""), vec!["ABC-123.mp4", "plain.avi", "sub"]);
    assert_eq!(tree.names_in("sub"), vec!["DEF-456-UC.mkv"]);
}

#[test]
fn dry_run_touches_nothing() {
    let tree = VideoDir::new();
    tree.add("abc-1 (trailer).mp4", b"");
    tree.add("ghi-9.mkv-org", b"");

    let files = collect_video_files(tree.root(), &default_video_types()).unwrap();
    let report = rename_all(&files, RenameOptions { dry_run: true });

    assert_eq!(report.renamed(), 1);
    assert!(matches!(
        &report.outcomes[..],
        [RenameOutcome::WouldRename { .. }]
    ));
    assert_eq!(tree.names_in(""), vec!["abc-1 (trailer).mp4", "ghi-9.mkv-org"]);
}

#[test]
fn later_files_still_processed_after_failure() {
    let tree = VideoDir::new();
    let gone = tree.root().join("abc-1 deleted.mp4");
    let present = tree.add("def-2 kept.mp4", b"");

    let report = rename_all(&[gone, present], RenameOptions::default());

    assert_eq!(report.failed(), 1);
    assert_eq!(report.renamed(), 1);
    assert_eq!(tree.names_in(""), vec!["DEF-2.mp4"]);
}
