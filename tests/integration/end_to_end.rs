// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{ListFixture, jid_sort};

const NL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[test]
fn in_place_sorts_and_keeps_backup() {
    let list = ListFixture::new("b@y\na@x\n");

    jid_sort().arg(list.path()).assert().success().stdout("");

    assert_eq!(list.contents(), format!("a@x\nb@y{NL}"));
    assert_eq!(list.backup_contents(), "b@y\na@x\n");
}

#[test]
fn stdout_mode_leaves_file_untouched() {
    let list = ListFixture::new("b@y\na@x\n");

    jid_sort().arg("--stdout").arg(list.path()).assert().success().stdout("a@x\nb@y\n");

    assert_eq!(list.contents(), "b@y\na@x\n");
    assert!(!list.backup_path().exists());
}

#[test]
fn orders_by_domain_then_username() {
    let list = ListFixture::new("b@y\na@x\nc@x\n");

    jid_sort().arg("--stdout").arg(list.path()).assert().success().stdout("a@x\nc@x\nb@y\n");
}

#[test]
fn resource_suffix_is_dropped() {
    let list = ListFixture::new("carol@example.org#laptop\nalice@example.org\n");

    jid_sort().arg(list.path()).assert().success();

    assert_eq!(list.contents(), format!("alice@example.org\ncarol@example.org{NL}"));
}

#[test]
fn unparsable_lines_are_reported_and_skipped() {
    let list = ListFixture::new("not-a-jid\nb@y\n\n  a@x  \n");

    jid_sort()
        .arg(list.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to parse \"not-a-jid\""))
        .stdout(predicate::str::contains("Unable to parse \"\""));

    assert_eq!(list.contents(), format!("a@x\nb@y{NL}"));
}

#[test]
fn diagnostics_precede_list_in_stdout_mode() {
    let list = ListFixture::new("b@y\njunk\na@x\n");

    jid_sort()
        .arg("--stdout")
        .arg(list.path())
        .assert()
        .success()
        .stdout("Unable to parse \"junk\"\na@x\nb@y\n");
}

#[test]
fn bare_carriage_returns_split_lines() {
    let list = ListFixture::new("b@y\ra@x\r");

    jid_sort().arg("--stdout").arg(list.path()).assert().success().stdout("a@x\nb@y\n");

    jid_sort().arg(list.path()).assert().success();
    assert_eq!(list.contents(), format!("a@x\nb@y{NL}"));
    assert_eq!(list.backup_contents(), "b@y\ra@x\r");
}

#[test]
fn stale_backup_is_replaced() {
    let list = ListFixture::new("b@y\na@x\n");
    list.write_backup("something old\n");

    jid_sort().arg(list.path()).assert().success();

    assert_eq!(list.backup_contents(), "b@y\na@x\n");
}

#[test]
fn running_twice_is_idempotent() {
    let list = ListFixture::new("z@b\ny@a#home\nx@b\n");

    jid_sort().arg(list.path()).assert().success();
    let once = list.contents();
    jid_sort().arg(list.path()).assert().success();

    assert_eq!(list.contents(), once);
    assert_eq!(once, format!("y@a\nx@b\nz@b{NL}"));
}

#[test]
fn empty_file_becomes_single_separator() {
    let list = ListFixture::new("");

    jid_sort().arg(list.path()).assert().success();

    assert_eq!(list.contents(), NL);
    assert_eq!(list.backup_contents(), "");
}

#[test]
fn missing_file_fails_without_side_effects() {
    let list = ListFixture::new("a@x\n");
    let missing = list.path().with_file_name("absent.txt");

    jid_sort()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent.txt"));

    assert!(!missing.exists());
    assert!(!missing.with_file_name("absent.txt~").exists());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let list = ListFixture::new("b@y\na@x\n");

    jid_sort()
        .args(["--verbose", "--stdout"])
        .arg(list.path())
        .assert()
        .success()
        .stdout("a@x\nb@y\n")
        .stderr(predicate::str::contains("sorted 2 entries"));
}
