//! Command-line support for the `namegen` binary.
//!
//! Argument definitions and the run step live here rather than in the binary
//! so they can be exercised in tests without spawning a process.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::Configuration;
use crate::dataset::{BundledSource, DirectorySource};
use crate::error::ConfigError;
use crate::generator::NameGenerator;
use crate::record::Gender;

mod error;

pub use error::CliError;

/// Environment variable consulted when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "NAMEGEN_DATA_DIR";

/// `namegen` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "namegen",
    about = "Generate a random human name from first-name and surname lists",
    version
)]
pub struct Cli {
    /// Filter first names by gender.
    #[arg(short = 'g', long, value_enum)]
    gender: Option<GenderArg>,
    /// Print names in "snake_case" format.
    #[arg(short = 's', long = "snake-case")]
    snake_case: bool,
    /// Print names in "kebab-case" format.
    #[arg(short = 'k', long = "kebab-case")]
    kebab_case: bool,
    /// Pick names according to their relative popularity.
    #[arg(short = 'w', long)]
    weighted: bool,
    /// Create a double-barrelled name.
    #[arg(short = 'd', long = "doublename")]
    double_name: bool,
    /// Seed the random source for reproducible output.
    #[arg(long, value_name = "u64")]
    seed: Option<u64>,
    /// Directory containing `names.json` and `surnames.json`. The bundled
    /// lists are used when omitted.
    #[arg(long = "data-dir", value_name = "path", env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
}

/// Gender values accepted by `--gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    /// Male first names only.
    Male,
    /// Female first names only.
    Female,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
        }
    }
}

impl Cli {
    /// Builds the generation settings from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingCaseStyles`] if both
    /// `--snake-case` and `--kebab-case` were given.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use namegen::cli::Cli;
    /// use namegen::{CaseStyle, Gender};
    ///
    /// let cli = Cli::try_parse_from(["namegen", "-g", "female", "-k"]).expect("parse");
    /// let config = cli.configuration().expect("valid flags");
    ///
    /// assert_eq!(config.gender_filter, Some(Gender::Female));
    /// assert_eq!(config.case_style, CaseStyle::Kebab);
    /// ```
    pub fn configuration(&self) -> Result<Configuration, ConfigError> {
        Configuration::from_flags(
            self.gender.map(Gender::from),
            self.snake_case,
            self.kebab_case,
            self.weighted,
            self.double_name,
        )
    }

    /// Returns the seed supplied with `--seed`, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the data directory from `--data-dir` or the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NonUtf8DataDir`] if the path is not UTF-8.
    pub fn data_dir(&self) -> Result<Option<Utf8PathBuf>, CliError> {
        self.data_dir
            .clone()
            .map(|path| {
                Utf8PathBuf::from_path_buf(path).map_err(|raw| CliError::NonUtf8DataDir {
                    path: raw.display().to_string(),
                })
            })
            .transpose()
    }
}

/// Validates the flags, generates one name and returns it.
///
/// Without `--seed` a fresh seed is drawn from the thread RNG; it is logged
/// at debug level so the run can be replayed.
///
/// # Errors
///
/// Returns [`CliError`] if the configuration is invalid, the datasets are
/// unavailable, or a pool is empty.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use namegen::cli::{Cli, run};
///
/// let cli = Cli::try_parse_from(["namegen", "--seed", "7", "-s"]).expect("parse");
///
/// let name = run(&cli).expect("name generated");
/// assert_eq!(name, run(&cli).expect("name generated"));
/// assert!(!name.contains(' '));
/// ```
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let config = cli.configuration()?;
    let seed = cli.seed.unwrap_or_else(random_seed);
    debug!(seed, "seeded random source");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let name = match cli.data_dir()? {
        Some(path) => {
            let source = DirectorySource::open(&path)?;
            NameGenerator::new(source).generate_name(&config, &mut rng)?
        }
        None => NameGenerator::new(BundledSource).generate_name(&config, &mut rng)?,
    };
    Ok(name)
}

fn random_seed() -> u64 {
    rand::rng().random()
}
