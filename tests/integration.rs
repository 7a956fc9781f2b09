//! Integration tests for torview


use assert_cmd::Command;
use harness::{DEFAULT_TRACKER, TestDir, TorrentBuilder, run_view};
use predicates::prelude::*;

#[test]
fn test_short_output_scenario() {
    let dir = TestDir::new();
    dir.add_torrent(
        "ubuntu.torrent",
        &TorrentBuilder::single("ubuntu.iso", 1_610_612_736),
    );

    let (stdout, _stderr, success) = run_view(dir.path(), &["-s", "-n", "ubuntu.torrent"]);
    assert!(success);
    assert_eq!(stdout, "ubuntu.torrent\n    ubuntu.iso (1.5 GiB in 1 file)\n");
}

#[test]
fn test_basic_is_default() {
    let dir = TestDir::new();
    dir.add_torrent(
        "a.torrent",
        &TorrentBuilder::single("a.bin", 100).created_by("mktorrent"),
    );

    let (stdout, _stderr, success) = run_view(dir.path(), &["-n", "a.torrent"]);
    assert!(success);
    let expected = format!(
        "a.torrent\n\
         \x20   name           a.bin\n\
         \x20   tracker url    {}\n\
         \x20   created by     mktorrent\n\
         \x20   created on     0\n\
         \x20   file name      a.bin\n\
         \x20   file size      100 B\n\
         \n",
        DEFAULT_TRACKER
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_no_arguments_uses_current_directory() {
    let dir = TestDir::new();
    dir.add_torrent("here.torrent", &TorrentBuilder::single("here.bin", 1));
    dir.add_torrent("sub/nested.torrent", &TorrentBuilder::single("nested.bin", 1));

    let (stdout, _stderr, success) = run_view(dir.path(), &["-s", "-n"]);
    assert!(success);
    assert_eq!(stdout, "here.torrent\n    here.bin (1 B in 1 file)\n");
}

#[test]
fn test_no_arguments_reports_corrupt_file_without_dot_prefix() {
    let dir = TestDir::new();
    dir.add_torrent("a.torrent", &TorrentBuilder::single("a.bin", 1));
    dir.add_file("b.torrent", b"garbage");

    let (stdout, _stderr, success) = run_view(dir.path(), &["-s", "-n"]);
    assert!(success);
    assert_eq!(
        stdout,
        "a.torrent\n    a.bin (1 B in 1 file)\n\
         b.torrent (error: bencode error: unexpected character: 'g')\n"
    );
    assert!(!stdout.contains("./"), "{}", stdout);
}

#[test]
fn test_recursive_from_current_directory_shows_relative_paths() {
    let dir = TestDir::new();
    dir.add_torrent("here.torrent", &TorrentBuilder::single("here.bin", 1));
    dir.add_torrent("sub/deeper/nested.torrent", &TorrentBuilder::single("nested.bin", 1));

    let (stdout, _stderr, success) = run_view(dir.path(), &["-s", "-n", "-r"]);
    assert!(success);
    assert_eq!(
        stdout,
        "here.torrent\n    here.bin (1 B in 1 file)\n\
         sub/deeper/nested.torrent\n    nested.bin (1 B in 1 file)\n"
    );
}

#[test]
fn test_directory_with_valid_and_corrupt_files() {
    let dir = TestDir::new();
    dir.add_torrent("d/a.torrent", &TorrentBuilder::single("a.bin", 1));
    dir.add_file("d/b.torrent", b"not bencode");

    let (stdout, _stderr, success) = run_view(dir.path(), &["-n", "d"]);
    assert!(success, "per-file errors do not fail the run");
    assert!(stdout.starts_with("a.torrent\n"), "{}", stdout);
    assert!(stdout.contains("    name           a.bin\n"));
    assert!(
        stdout.ends_with("\nd/b.torrent (error: bencode error: unexpected character: 'n')\n"),
        "{}",
        stdout
    );
    assert_eq!(stdout.matches("(error:").count(), 1);
}

#[test]
fn test_long_output() {
    let dir = TestDir::new();
    dir.add_torrent(
        "album.torrent",
        &TorrentBuilder::multi("album")
            .file(&["01.flac"], 3 * 1024 * 1024)
            .file(&["02.flac"], 1024)
            .comment("ripped"),
    );

    let (stdout, _stderr, success) = run_view(dir.path(), &["-l", "-n", "album.torrent"]);
    assert!(success);
    assert!(stdout.contains("    announce groups\n        0\n            http://tracker.example.com/announce\n"));
    assert!(stdout.contains("    comment\n        ripped\n"));
    assert!(stdout.contains("    files (2)\n        01.flac (3.0 MiB)\n        02.flac (1.0 KiB)\n"));
    assert!(stdout.ends_with("\n\n"));
}

#[test]
fn test_colors_on_by_default() {
    let dir = TestDir::new();
    dir.add_torrent("a.torrent", &TorrentBuilder::single("a", 1));

    let (colored, _, _) = run_view(dir.path(), &["a.torrent"]);
    assert!(colored.contains('\x1b'));

    let (plain, _, _) = run_view(dir.path(), &["-n", "a.torrent"]);
    assert!(!plain.contains('\x1b'));
}

#[test]
fn test_no_color_env() {
    let dir = TestDir::new();
    dir.add_torrent("a.torrent", &TorrentBuilder::single("a", 1));

    Command::cargo_bin("torview")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["view", "a.torrent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_verbosity_flags_conflict() {
    Command::cargo_bin("torview")
        .unwrap()
        .args(["view", "-s", "-l"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_flag_prints_usage() {
    Command::cargo_bin("torview")
        .unwrap()
        .args(["view", "-x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("torview")
        .unwrap()
        .args(["view", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"))
        .stdout(predicate::str::contains("--no-color"));
}
