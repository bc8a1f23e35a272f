//! Random human name generation from first-name and surname datasets.
//!
//! A name is built by drawing a first name and a surname from JSON name
//! lists, either uniformly or in proportion to each name's popularity
//! weight, and rendering the pair as plain text, `snake_case` or
//! `kebab-case`.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading name datasets from a directory or from the bundled lists
//! - Filtering first names by gender
//! - Uniform and popularity-weighted selection with an explicit RNG
//! - Double-barrelled surnames
//! - ASCII snake/kebab rendering of accented names
//!
//! # Example
//!
//! ```
//! use namegen::{BundledSource, CaseStyle, Configuration, Gender, NameGenerator};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = Configuration {
//!     gender_filter: Some(Gender::Female),
//!     case_style: CaseStyle::Kebab,
//!     weighted: true,
//!     double_name: true,
//! };
//! let mut rng = ChaCha8Rng::seed_from_u64(2026);
//!
//! let name = NameGenerator::new(BundledSource)
//!     .generate_name(&config, &mut rng)
//!     .expect("bundled datasets are valid");
//!
//! assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
//! ```

pub mod cli;
mod composer;
mod config;
mod dataset;
mod error;
mod format;
mod generator;
mod record;
mod selector;

pub use composer::{ComposedName, compose};
pub use config::Configuration;
pub use dataset::{BundledSource, DatasetKind, DatasetSource, DirectorySource};
pub use error::{ConfigError, NameError};
pub use format::{CaseStyle, format_name};
pub use generator::NameGenerator;
pub use record::{Gender, NameRecord};
pub use selector::{SelectionStrategy, pick_uniform, pick_weighted};
