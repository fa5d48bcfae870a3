//! CLI support for opening case files from the command line.
//!
//! The `case-file` binary delegates to this module for argument parsing and
//! case generation so both can be exercised without spawning a process.

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use case_engine::{
    CaseCategory, CasePayload, TemplatePool, assemble_case, generate_case_identifier,
};
use tracing::{debug, info};

use crate::enrichment::{EnrichmentChain, FixtureEncyclopediaSearch, FixtureTextGenerator};
use crate::settings::CaseFileSettings;

pub use error::CliError;

/// Parsed options for the case-file CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    identifier: Option<String>,
    pool_path: Option<PathBuf>,
    list_categories: bool,
}

impl Options {
    /// Identifier supplied with `--id`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use case_file::case_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--id".to_owned(), "CASE0110".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.identifier(), Some("CASE0110"));
    /// ```
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Pool path supplied with `--pool`, if any.
    #[must_use]
    pub fn pool_path(&self) -> Option<&Path> {
        self.pool_path.as_deref()
    }

    /// Whether `--categories` was requested.
    #[must_use]
    pub const fn lists_categories(&self) -> bool {
        self.list_categories
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown or lacks its value.
///
/// # Example
///
/// ```
/// use case_file::case_cli::{ParseOutcome, parse_args};
///
/// let outcome = parse_args(vec!["--help".to_owned()].into_iter()).expect("parse args");
/// assert_eq!(outcome, ParseOutcome::Help);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--id" => {
                let value = next_value(&mut args, "--id")?;
                options.identifier = Some(value);
            }
            "--pool" => {
                let value = next_value(&mut args, "--pool")?;
                options.pool_path = Some(PathBuf::from(value));
            }
            "--categories" => options.list_categories = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Loads the pool named on the command line, else the one from settings.
///
/// # Errors
///
/// Returns [`CliError::Pool`] if the pool cannot be read or validated.
pub fn resolve_pool(
    options: &Options,
    settings: &CaseFileSettings,
) -> Result<TemplatePool, CliError> {
    let pool = options
        .pool_path()
        .map_or_else(|| settings.template_pool(), TemplatePool::from_file)?;
    debug!(templates = pool.len(), "template pool loaded");
    Ok(pool)
}

/// Produces the text the CLI prints for `options`: the category list or
/// the case payload as indented JSON.
///
/// # Errors
///
/// Returns [`CliError`] when the pool cannot be loaded, the case cannot be
/// assembled or the output cannot be rendered.
///
/// # Example
///
/// ```
/// use case_file::case_cli::{ParseOutcome, execute, parse_args};
/// use case_file::settings::CaseFileSettings;
///
/// let args = vec!["--id".to_owned(), String::new()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// let settings = CaseFileSettings { pool_path: None, json_logs: false, enrichment: false };
///
/// let output = execute(&options, &settings).expect("case output");
/// assert!(output.contains("The Zodiac Killer Ciphers"));
/// ```
pub fn execute(options: &Options, settings: &CaseFileSettings) -> Result<String, CliError> {
    let pool = resolve_pool(options, settings)?;
    if options.lists_categories() {
        return Ok(category_listing(&pool));
    }

    let identifier = options
        .identifier()
        .map_or_else(generate_case_identifier, str::to_owned);
    let payload = if settings.enrichment {
        enrich_case(pool, &identifier)?
    } else {
        assemble_case(&identifier, &pool)?
    };
    render_case(&payload)
}

/// One category tag per line, in first-seen pool order.
#[must_use]
pub fn category_listing(pool: &TemplatePool) -> String {
    pool.categories()
        .into_iter()
        .map(CaseCategory::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a payload as indented JSON.
///
/// # Errors
///
/// Returns [`CliError::Render`] if serialization fails.
pub fn render_case(payload: &CasePayload) -> Result<String, CliError> {
    payload.to_json_pretty().map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}

fn enrich_case(pool: TemplatePool, identifier: &str) -> Result<CasePayload, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|err| CliError::Runtime {
            message: err.to_string(),
        })?;
    let chain = EnrichmentChain::standard(
        Arc::new(pool),
        Arc::new(FixtureTextGenerator),
        Arc::new(FixtureEncyclopediaSearch),
    );
    let enriched = runtime.block_on(chain.generate(identifier))?;
    info!(
        identifier,
        origin = enriched.origin.as_str(),
        ai_generated = enriched.ai_generated,
        "case enriched"
    );
    Ok(enriched.payload)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

#[cfg(test)]
mod tests;
