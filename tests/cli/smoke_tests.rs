use predicates::prelude::*;

use crate::common::jid_sort;

#[test]
fn shows_help() {
    jid_sort()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stdout"))
        .stdout(predicate::str::contains("filename to sort"));
}

#[test]
fn shows_version() {
    jid_sort()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn filename_is_required() {
    jid_sort().assert().failure().code(2);
}
