//! Fatal conditions must terminate the whole process, whether they unwind (the default) or abort
//! (the `abort` feature). Each test re-executes this test binary, running only itself with
//! `TERMINATION_CHILD` set, and expects the child to exit unsuccessfully.

use std::env;
use std::process::{Command, Stdio};

use contain::collections::contiguous::{Slice, Vector};
use contain::ext::{OptionExtension, ResultExtension};

const CHILD_VAR: &str = "TERMINATION_CHILD";

/// Runs `fatal` in a child process and asserts that the child fails.
fn expect_termination(test_name: &str, fatal: impl FnOnce()) {
    if env::var_os(CHILD_VAR).is_some() {
        fatal();
        // Reaching this means the condition wasn't fatal, exit cleanly so the parent notices.
        std::process::exit(0);
    }

    let exe = env::current_exe().expect("test binary path should be available");
    let status = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_VAR, "1")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("child test process should start");

    assert!(!status.success(), "{test_name} should have terminated the process");
}

#[test]
fn at_out_of_bounds() {
    expect_termination("at_out_of_bounds", || {
        let vec = Vector::from([1, 2, 3]);
        vec.at(3);
    });
}

#[test]
fn slice_at_out_of_bounds() {
    expect_termination("slice_at_out_of_bounds", || {
        Slice::from(&[1_u8]).at(1);
    });
}

#[test]
fn range_past_end() {
    expect_termination("range_past_end", || {
        let vec = Vector::from([1, 2, 3]);
        vec.slice_of(1..4);
    });
}

#[test]
fn throw_on_none() {
    expect_termination("throw_on_none", || {
        Vector::<u8>::new().pop().throw();
    });
}

#[test]
fn throw_on_err() {
    expect_termination("throw_on_err", || {
        Vector::with_capacity(0).push_within_capacity(1).throw();
    });
}
