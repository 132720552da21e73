//! End-to-end tests for the built-in lemmas and the command-line interface.

use std::io::Write;
use std::process::{Command, Stdio};

use exhaust_proof::lemma::Lemma;
use exhaust_proof::pattern::Pattern;

const EXPECTED_LINE: &str = "Guaranteed edge in formula graph: 3->1 = 5->1";

fn report(index: i64) -> Vec<String> {
    let proof = Lemma::builtin(index).unwrap().prove();
    proof
        .guaranteed
        .iter()
        .map(|eq| format!("Guaranteed edge in formula graph: {}", eq))
        .collect()
}

fn run_binary(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_exhaust-proof"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

// ─── Library ───────────────────────────────────────────────────────────────────

#[test]
fn lemma_1_report() {
    assert_eq!(
        report(1),
        [
            "Guaranteed edge in formula graph: 2->1 = 4->1",
            EXPECTED_LINE,
            "Guaranteed edge in formula graph: 3->2 = 5->2",
        ]
    );
}

#[test]
fn lemma_2_report() {
    assert_eq!(
        report(2),
        [
            "Guaranteed edge in formula graph: 1->2 = 4->2",
            EXPECTED_LINE,
            "Guaranteed edge in formula graph: 3->2 = 5->2",
        ]
    );
}

#[test]
fn guaranteed_equalities_keep_pivot_invariant() {
    for index in [1, 2] {
        let proof = Lemma::builtin(index).unwrap().prove();
        assert!(proof.abiding > 0);
        for eq in &proof.guaranteed {
            assert_eq!(eq.first().to, eq.second().to);
            assert!(eq.first().from < eq.second().from);
        }
    }
}

#[test]
fn custom_lemma_without_exclusions() {
    // Without side conditions, the forced rows 1-2 dominate the result.
    let pattern = Pattern::parse(&["010?", "101?"]).unwrap();
    let proof = Lemma::new("custom", pattern, vec![]).prove();
    assert_eq!(proof.abiding, 4);
    let lines: Vec<String> = proof.guaranteed.iter().map(|eq| eq.to_string()).collect();
    assert_eq!(lines, ["1->2 = 3->2"]);
}

// ─── Binary ────────────────────────────────────────────────────────────────────

#[test]
fn binary_reads_lemma_from_stdin() {
    let (ok, stdout, stderr) = run_binary(&[], "1\n");
    assert!(ok);
    assert!(stdout.lines().any(|line| line == EXPECTED_LINE));
    assert_eq!(stdout.lines().count(), 3);
    assert!(stderr.contains("Found abiding matrix #1\n"));
    assert!(stderr.contains("Found abiding matrix #68\n"));
    assert!(!stderr.contains("Found abiding matrix #69\n"));
}

#[test]
fn binary_accepts_lemma_argument() {
    let (ok, stdout, stderr) = run_binary(&["2"], "");
    assert!(ok);
    assert!(stdout.lines().any(|line| line == EXPECTED_LINE));
    assert!(stderr.contains("Found abiding matrix #59\n"));
}

#[test]
fn binary_rejects_unknown_lemma() {
    let (ok, stdout, _) = run_binary(&[], "3\n");
    assert!(!ok);
    assert!(stdout.is_empty());

    let (ok, _, _) = run_binary(&[], "one\n");
    assert!(!ok);
}
