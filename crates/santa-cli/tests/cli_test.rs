//! Pair and check commands against files on disk.

use std::{fs, path::Path};

use santa_cli::{
    CliError, FixedSeed, PAIRINGS_FILE, PairOptions, check_pairings, create_pairings,
    load_pairings,
};
use santa_core::{ConfigError, HatConfig, InfeasibleError, NeverPolicy, PairingError};
use tempfile::TempDir;

const PEOPLE: &str = r#"{
    "names": {
        "Light Yagami": {"email": "kira@example.com"},
        "Eru Roraito": {"email": "l@example.com"},
        "Misa Amane": {"email": "misamisa@example.com", "checked": true},
        "Ryuk": {"text": "+15555550100"},
        "Rem": {"text": "+15555550101"}
    }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(dir: &TempDir) -> PairOptions {
    let mut options = PairOptions::new(write(dir.path(), "names.json", PEOPLE));
    options.output_dir = dir.path().join("data");
    options
}

#[test]
fn pair_saves_valid_pairings() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir);

    let outcome = create_pairings(&options, &FixedSeed(42)).unwrap();

    assert_eq!(outcome.seed, 42);
    assert_eq!(outcome.assignment.len(), 5);
    assert_eq!(outcome.saved_to, dir.path().join("data").join(PAIRINGS_FILE));
    assert_eq!(load_pairings(&options.output_dir).unwrap(), outcome.assignment);

    let checked = check_pairings(&options.people_path, &options.output_dir).unwrap();
    assert_eq!(checked, outcome.assignment);
}

#[test]
fn explicit_seed_wins_over_source() {
    let dir = TempDir::new().unwrap();
    let mut options = options(&dir);
    options.seed = Some(7);

    let outcome = create_pairings(&options, &FixedSeed(42)).unwrap();
    assert_eq!(outcome.seed, 7);
}

#[test]
fn same_seed_same_file() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir);

    let first = create_pairings(&options, &FixedSeed(1234)).unwrap();
    let first_file = fs::read(&first.saved_to).unwrap();
    let second = create_pairings(&options, &FixedSeed(1234)).unwrap();
    let second_file = fs::read(&second.saved_to).unwrap();

    assert_eq!(first.assignment, second.assignment);
    assert_eq!(first_file, second_file);
}

#[test]
fn constraints_are_honoured() {
    let dir = TempDir::new().unwrap();
    let mut options = options(&dir);
    options.constraints_path = Some(write(
        dir.path(),
        "constraints.json",
        r#"{"constraints": {
            "always": [["Light Yagami", "Misa Amane"]],
            "never": [["Ryuk", "Rem"]]
        }}"#,
    ));
    options.hat.max_attempts = 50;

    for seed in 1..=25 {
        let outcome = create_pairings(&options, &FixedSeed(seed)).unwrap();
        assert_eq!(outcome.assignment.receiver_of("Light Yagami"), Some("Misa Amane"));
        assert_ne!(outcome.assignment.receiver_of("Ryuk"), Some("Rem"));
    }
}

#[test]
fn unknown_name_in_constraints_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let mut options = options(&dir);
    options.constraints_path = Some(write(
        dir.path(),
        "constraints.json",
        r#"{"constraints": {"never": [["Near", "Ryuk"]]}}"#,
    ));

    let err = create_pairings(&options, &FixedSeed(1)).unwrap_err();
    assert!(matches!(
        &err,
        CliError::Pairing(PairingError::Config(ConfigError::UnknownParticipant { name }))
            if name == "Near"
    ));
    assert_eq!(err.exit_code(), 2);
    assert!(!options.output_dir.join(PAIRINGS_FILE).exists());
}

#[test]
fn infeasible_never_constraints_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let mut options = PairOptions::new(write(
        dir.path(),
        "names.json",
        r#"{"names": {"A": {"email": "a@example.com"}, "B": {"email": "b@example.com"}}}"#,
    ));
    options.output_dir = dir.path().join("data");
    options.constraints_path =
        Some(write(dir.path(), "constraints.json", r#"{"constraints": {"never": [["A", "B"]]}}"#));
    options.hat = HatConfig { max_attempts: 4, ..HatConfig::default() };

    let err = create_pairings(&options, &FixedSeed(1)).unwrap_err();
    assert!(matches!(
        err,
        CliError::Pairing(PairingError::Infeasible(InfeasibleError::RetriesExhausted {
            attempts: 4
        }))
    ));
    assert_eq!(err.exit_code(), 1);

    // The legacy policy ignores never-constraints without always-constraints.
    options.hat.never_policy = NeverPolicy::WithAlwaysOnly;
    let outcome = create_pairings(&options, &FixedSeed(1)).unwrap();
    assert_eq!(outcome.assignment.receiver_of("A"), Some("B"));
}

#[test]
fn check_rejects_tampered_pairings() {
    let dir = TempDir::new().unwrap();
    let options = options(&dir);
    create_pairings(&options, &FixedSeed(3)).unwrap();

    let path = options.output_dir.join(PAIRINGS_FILE);
    let tampered = r#"{
        "Light Yagami": "Light Yagami",
        "Eru Roraito": "Misa Amane",
        "Misa Amane": "Ryuk",
        "Ryuk": "Rem",
        "Rem": "Eru Roraito"
    }"#;
    fs::write(&path, tampered).unwrap();

    let err = check_pairings(&options.people_path, &options.output_dir).unwrap_err();
    assert!(matches!(err, CliError::Sanity(_)));
}

#[test]
fn missing_people_file() {
    let dir = TempDir::new().unwrap();
    let options = PairOptions::new(dir.path().join("nope.json"));
    let err = create_pairings(&options, &FixedSeed(1)).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert_eq!(err.exit_code(), 1);
}
