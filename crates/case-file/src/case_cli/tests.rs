//! Unit tests for the case-file CLI helpers.

use std::path::PathBuf;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use case_engine::{AssemblyError, PoolError};
use rstest::{fixture, rstest};

use super::*;
use crate::archive::test_support::unique_temp_dir;

const SINGLE_TEMPLATE_POOL: &str = r#"{
    "version": 1,
    "templates": [{
        "id": "wow-signal",
        "title": "The Wow! Signal",
        "category": "scientific",
        "difficulty": "medium",
        "briefing": "<p>A narrowband burst from Sagittarius.</p>",
        "referenceLink": "https://en.wikipedia.org/wiki/Wow!_signal",
        "artifacts": [{
            "type": "research",
            "title": "Big Ear printout",
            "description": "The annotated printout",
            "url": "https://en.wikipedia.org/wiki/Wow!_signal"
        }]
    }]
}"#;

#[fixture]
fn settings() -> CaseFileSettings {
    CaseFileSettings {
        pool_path: None,
        json_logs: false,
        enrichment: false,
    }
}

fn options_from(args: &[&str]) -> Options {
    let outcome = parse_args(args.iter().map(|arg| (*arg).to_owned())).expect("parse args");
    let ParseOutcome::Options(options) = outcome else {
        panic!("expected options, got {outcome:?}");
    };
    options
}

fn write_pool(json: &str) -> PathBuf {
    let path = unique_temp_dir("case-cli-pool");
    let dir = Dir::open_ambient_dir(&path, ambient_authority()).expect("open temp dir");
    dir.write("pool.json", json).expect("write pool");
    path.join("pool.json").into_std_path_buf()
}

#[rstest]
#[case::long("--help")]
#[case::short("-h")]
#[case::after_flags("--categories")]
fn parse_args_returns_help(#[case] flag: &str) {
    let args = vec!["--categories".to_owned(), flag.to_owned(), "--help".to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Help);
}

#[rstest]
fn parse_args_collects_options() {
    let options = options_from(&["--id", "CASE0110", "--pool", "pool.json", "--categories"]);

    assert_eq!(options.identifier(), Some("CASE0110"));
    assert_eq!(options.pool_path(), Some(Path::new("pool.json")));
    assert!(options.lists_categories());
}

#[rstest]
fn parse_args_defaults_to_no_options() {
    assert_eq!(options_from(&[]), Options::default());
}

#[rstest]
#[case("--id")]
#[case("--pool")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let err = parse_args(vec![flag.to_owned()].into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[rstest]
fn parse_args_reports_unknown_arguments() {
    let err = parse_args(vec!["--seed".to_owned()].into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--seed".to_owned()
        }
    );
    assert_eq!(err.to_string(), "unknown argument: --seed");
}

#[rstest]
fn execute_prints_bundled_case(settings: CaseFileSettings) {
    let options = options_from(&["--id", "voynich-manuscript"]);

    let output = execute(&options, &settings).expect("case output");
    let payload: CasePayload = serde_json::from_str(&output).expect("payload json");

    assert_eq!(payload.hash, "voynich-manuscript");
    assert_eq!(payload.title, "The Tamam Shud Case");
}

#[rstest]
fn execute_generates_identifier_when_missing(settings: CaseFileSettings) {
    let output = execute(&Options::default(), &settings).expect("case output");
    let payload: CasePayload = serde_json::from_str(&output).expect("payload json");

    assert_eq!(payload.hash.len(), case_engine::IDENTIFIER_LEN);
}

#[rstest]
fn execute_lists_categories(settings: CaseFileSettings) {
    let output = execute(&options_from(&["--categories"]), &settings).expect("listing");

    assert_eq!(
        output,
        "cryptographic\ndisappearance\narchaeological\nhistorical\nscientific"
    );
}

#[rstest]
fn command_line_pool_overrides_settings(mut settings: CaseFileSettings) {
    settings.pool_path = Some(PathBuf::from("target/case-file-tests/absent.json"));
    let pool_path = write_pool(SINGLE_TEMPLATE_POOL);
    let pool_arg = pool_path.to_string_lossy().into_owned();
    let options = options_from(&["--id", "CASE0110", "--pool", &pool_arg]);

    let output = execute(&options, &settings).expect("case output");
    let payload: CasePayload = serde_json::from_str(&output).expect("payload json");

    assert_eq!(payload.title, "The Wow! Signal");
    assert_eq!(payload.artifacts.len(), 1);
}

#[rstest]
fn execute_reports_pool_errors(settings: CaseFileSettings) {
    let pool_path = write_pool(r#"{"version": 1, "templates": []}"#);
    let pool_arg = pool_path.to_string_lossy().into_owned();

    let err = execute(&options_from(&["--pool", &pool_arg]), &settings).expect_err("empty pool");

    assert_eq!(
        err,
        CliError::Pool {
            source: PoolError::EmptyTemplates
        }
    );
}

#[rstest]
fn enrichment_falls_through_to_topic_search(mut settings: CaseFileSettings) {
    settings.enrichment = true;

    let output = execute(&options_from(&["--id", ""]), &settings).expect("case output");
    let payload: CasePayload = serde_json::from_str(&output).expect("payload json");

    assert_eq!(payload.title, "Wow signal from space");
    assert!(payload.wikipedia.is_none());
}

#[rstest]
fn assembly_errors_are_wrapped() {
    let err = CliError::from(AssemblyError::EmptyPool);

    assert_eq!(
        err.to_string(),
        "case assembly error: cannot assemble a case from an empty template pool"
    );
}
