//! End-to-end runs of the `demo-check` binary against fixture repositories

use demo_check::Demo;
use demo_test_utils::FixtureRepo;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn demo_check(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_demo-check"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn populated_repo() -> FixtureRepo {
    let repo = FixtureRepo::new();
    for demo in Demo::ALL {
        repo.notebook(demo.notebook(), &["code", "markdown", "code"]);
        repo.figure(demo.figure(), 1024);
    }
    repo
}

#[test]
fn fixed_income_report() {
    let repo = populated_repo();
    let output = demo_check(repo.root(), &["fixed-income"]);
    assert!(output.status.success());

    let root = repo.root().display();
    let expected = format!(
        "Fixed Income - artifact check\n\
         Notebook: {root}/finance/notebooks/fixed_income_state_estimation.ipynb (code cells: 2)\n\
         Figure:   {root}/hidden_markov_model/assets/img/act1_kf_baseline.png (bytes: 1024)\n"
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn market_risk_and_sentiment_counts() {
    let repo = populated_repo();

    let stdout = String::from_utf8(demo_check(repo.root(), &["market-risk"]).stdout).unwrap();
    assert!(stdout.contains("(markdown cells: 1)"));

    let stdout = String::from_utf8(demo_check(repo.root(), &["sentiment"]).stdout).unwrap();
    assert!(stdout.contains("(total cells: 3)"));
    assert!(stdout.contains("particle_cloud.gif (bytes: 1024)"));
}

#[test]
fn missing_notebook_exits_nonzero() {
    let repo = FixtureRepo::new();
    repo.figure(Demo::FixedIncome.figure(), 16);

    let output = demo_check(repo.root(), &["fixed-income"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("artifact not found"));
    assert!(stderr.contains("fixed_income_state_estimation.ipynb"));
}

#[test]
fn malformed_notebook_exits_nonzero() {
    let repo = FixtureRepo::new();
    repo.raw(Demo::Sentiment.notebook(), "not json");
    repo.figure(Demo::Sentiment.figure(), 16);

    let output = demo_check(repo.root(), &["sentiment"]);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("invalid notebook"));
}

#[test]
fn all_as_json() {
    let repo = populated_repo();
    let output = demo_check(repo.root(), &["all", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let counts: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![2, 1, 3]);
}

#[test]
fn list_needs_no_artifacts() {
    let repo = FixtureRepo::new();
    let output = demo_check(repo.root(), &["list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for demo in Demo::ALL {
        assert!(stdout.contains(demo.name()));
        assert!(stdout.contains(demo.figure()));
    }
}

#[test]
fn failure_cause_printed_once() {
    let repo = FixtureRepo::new();
    let output = demo_check(repo.root(), &["market-risk"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("artifact not found").count(), 1);
    assert_eq!(stderr.matches("market-risk artifact check failed").count(), 1);
}
