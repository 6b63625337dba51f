//! CLI support for the `faker` binary.
//!
//! Parsing and execution live here so the binary stays a thin shell and the
//! behaviour can be exercised in tests without spawning a process.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use ortho_config::OrthoConfig;
use serde_json::Value;
use thiserror::Error;

use crate::config::FakerSettings;
use crate::error::FakerError;
use crate::faker::Faker;

const PROGRAM_NAME: &str = "faker";

/// `faker` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "faker",
    about = "Generate fake data by function name from the faker registry",
    version,
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Seed for the random source. Falls back to `FAKER_SEED`; zero or
    /// absent draws from system entropy.
    #[arg(long, value_name = "n")]
    seed: Option<u64>,
    /// List every category name.
    #[arg(long, conflicts_with_all = ["catalog", "category", "function"])]
    categories: bool,
    /// Print the full catalog as JSON.
    #[arg(long, conflicts_with_all = ["category", "function"])]
    catalog: bool,
    /// List the functions of one category.
    #[arg(long, value_name = "category", conflicts_with = "function")]
    category: Option<String>,
    /// Function to invoke.
    #[arg(value_name = "function")]
    function: Option<String>,
    /// Positional arguments, parsed as JSON when possible.
    #[arg(value_name = "args", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// What the caller asked the tool to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// List category names.
    Categories,
    /// Export the catalog.
    Catalog,
    /// List the functions of a category.
    Category(String),
    /// Invoke a function.
    Call {
        /// Function name.
        function: String,
        /// Positional arguments.
        args: Vec<Value>,
    },
}

/// Parsed options for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    seed: Option<u64>,
    request: Request,
}

impl Options {
    /// Returns the seed given on the command line, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Help or version text to print before exiting successfully.
    Help(String),
    /// Continue with the parsed options.
    Options(Options),
}

/// Errors raised by the `faker` CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error("{message}")]
    Usage {
        /// Rendered parser diagnostic.
        message: String,
    },
    /// Neither a listing flag nor a function name was given.
    #[error("a function name is required (try --categories)")]
    MissingFunction,
    /// `--category` named a category that does not exist.
    #[error("unknown category '{name}'")]
    UnknownCategory {
        /// The category that was not found.
        name: String,
    },
    /// Configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Loader diagnostic.
        message: String,
    },
    /// Output could not be serialized.
    #[error("failed to render output: {message}")]
    Render {
        /// Serializer diagnostic.
        message: String,
    },
    /// The invocation itself failed.
    #[error(transparent)]
    Faker(#[from] FakerError),
}

/// Parses CLI arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for malformed flags and
/// [`CliError::MissingFunction`] when there is nothing to do.
///
/// # Example
///
/// ```
/// use faker_registry::cli::{ParseOutcome, Request, parse_args};
/// use serde_json::json;
///
/// let outcome = parse_args(["--seed", "7", "number", "1", "6"]).expect("parse");
/// let ParseOutcome::Options(options) = outcome else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.seed(), Some(7));
/// assert_eq!(
///     options.request(),
///     &Request::Call {
///         function: "number".to_owned(),
///         args: vec![json!(1), json!(6)],
///     }
/// );
/// ```
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv =
        std::iter::once(OsString::from(PROGRAM_NAME)).chain(args.into_iter().map(Into::into));
    let parsed = match CliArgs::try_parse_from(argv) {
        Ok(parsed) => parsed,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Help(err.to_string()))
                }
                _ => Err(CliError::Usage {
                    message: err.to_string(),
                }),
            };
        }
    };

    let request = if parsed.categories {
        Request::Categories
    } else if parsed.catalog {
        Request::Catalog
    } else if let Some(category) = parsed.category {
        Request::Category(category)
    } else {
        let function = parsed.function.ok_or(CliError::MissingFunction)?;
        Request::Call {
            function,
            args: parsed.args.iter().map(|raw| parse_argument(raw)).collect(),
        }
    };

    Ok(ParseOutcome::Options(Options {
        seed: parsed.seed,
        request,
    }))
}

/// Interprets one positional argument, falling back to plain text.
///
/// # Example
///
/// ```
/// use faker_registry::cli::parse_argument;
/// use serde_json::json;
///
/// assert_eq!(parse_argument("42"), json!(42));
/// assert_eq!(parse_argument("[1,2]"), json!([1, 2]));
/// assert_eq!(parse_argument("hello"), json!("hello"));
/// ```
#[must_use]
pub fn parse_argument(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Picks the explicit seed, or loads one from the environment.
///
/// # Errors
///
/// Returns [`CliError::Config`] when configuration cannot be loaded.
pub fn resolve_seed(explicit: Option<u64>) -> Result<u64, CliError> {
    if let Some(seed) = explicit {
        return Ok(seed);
    }
    FakerSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .map(|settings| settings.seed())
        .map_err(|err| CliError::Config {
            message: err.to_string(),
        })
}

/// Runs a request against `faker` and renders the output text.
///
/// # Errors
///
/// Returns [`CliError::UnknownCategory`], [`CliError::Faker`] or
/// [`CliError::Render`].
///
/// # Example
///
/// ```
/// use faker_registry::Faker;
/// use faker_registry::cli::{Request, execute};
///
/// let faker = Faker::new(3);
/// let listing = execute(&faker, &Request::Categories).expect("listing");
/// assert!(listing.lines().any(|line| line == "zen"));
/// ```
pub fn execute(faker: &Faker, request: &Request) -> Result<String, CliError> {
    match request {
        Request::Categories => Ok(faker.category_names().join("\n")),
        Request::Catalog => faker
            .registry()
            .catalog()
            .to_json_pretty()
            .map_err(|err| CliError::Render {
                message: err.to_string(),
            }),
        Request::Category(name) => {
            let view = faker
                .category(name)
                .ok_or_else(|| CliError::UnknownCategory { name: name.clone() })?;
            Ok(view.function_names().collect::<Vec<_>>().join("\n"))
        }
        Request::Call { function, args } => {
            let value = faker.call(function, args)?;
            serde_json::to_string(&value).map_err(|err| CliError::Render {
                message: err.to_string(),
            })
        }
    }
}

/// Resolves the seed, builds an instance, and executes the request.
///
/// # Errors
///
/// Returns any error from [`resolve_seed`] or [`execute`].
pub fn run(options: &Options) -> Result<String, CliError> {
    let faker = Faker::new(resolve_seed(options.seed)?);
    execute(&faker, &options.request)
}
