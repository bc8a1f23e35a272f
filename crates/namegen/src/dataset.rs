//! Name dataset loading and filtering.
//!
//! Datasets are JSON arrays of [`NameRecord`] objects. Two sources implement
//! [`DatasetSource`]: a data directory opened as a capability handle, and the
//! datasets bundled into the crate at compile time.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use crate::error::NameError;
use crate::record::{Gender, NameRecord};

const BUNDLED_FIRST_NAMES: &str = include_str!("../data/names.json");
const BUNDLED_SURNAMES: &str = include_str!("../data/surnames.json");

/// The two datasets a generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Gender-tagged first names.
    FirstNames,
    /// Untagged surnames.
    Surnames,
}

impl DatasetKind {
    /// Returns the file name of this dataset inside a data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::FirstNames => "names.json",
            Self::Surnames => "surnames.json",
        }
    }

    /// Returns a short label used in log events and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstNames => "first name",
            Self::Surnames => "surname",
        }
    }
}

/// Supplies name records for a dataset kind.
///
/// Implementations read the full dataset on every call and apply the gender
/// filter, preserving dataset order.
pub trait DatasetSource {
    /// Loads the records of `kind`, keeping only those tagged with
    /// `gender_filter` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::DataUnavailable`] if the dataset cannot be read
    /// or is not a valid JSON array of records.
    fn load_records(
        &self,
        kind: DatasetKind,
        gender_filter: Option<Gender>,
    ) -> Result<Vec<NameRecord>, NameError>;

    /// Loads first names, optionally filtered by gender.
    ///
    /// # Errors
    ///
    /// See [`DatasetSource::load_records`].
    fn load_first_names(&self, gender_filter: Option<Gender>) -> Result<Vec<NameRecord>, NameError> {
        self.load_records(DatasetKind::FirstNames, gender_filter)
    }

    /// Loads all surnames.
    ///
    /// # Errors
    ///
    /// See [`DatasetSource::load_records`].
    fn load_surnames(&self) -> Result<Vec<NameRecord>, NameError> {
        self.load_records(DatasetKind::Surnames, None)
    }
}

/// Datasets compiled into the crate.
///
/// # Example
///
/// ```
/// use namegen::{BundledSource, DatasetSource, Gender};
///
/// let names = BundledSource.load_first_names(Some(Gender::Female)).expect("bundled data");
/// assert!(!names.is_empty());
/// assert!(names.iter().all(|record| record.gender() == Some(Gender::Female)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundledSource;

impl DatasetSource for BundledSource {
    fn load_records(
        &self,
        kind: DatasetKind,
        gender_filter: Option<Gender>,
    ) -> Result<Vec<NameRecord>, NameError> {
        let json = match kind {
            DatasetKind::FirstNames => BUNDLED_FIRST_NAMES,
            DatasetKind::Surnames => BUNDLED_SURNAMES,
        };
        let origin = Utf8PathBuf::from("<bundled>").join(kind.file_name());
        let records = parse_records(json, &origin)?;
        debug!(dataset = kind.label(), count = records.len(), source = "bundled", "loaded dataset");
        Ok(filter_by_gender(records, gender_filter))
    }
}

/// Datasets read from `names.json` and `surnames.json` in a directory.
#[derive(Debug)]
pub struct DirectorySource {
    dir: Dir,
    root: Utf8PathBuf,
}

impl DirectorySource {
    /// Opens `path` as the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::DataUnavailable`] if the directory cannot be
    /// opened.
    pub fn open(path: &Utf8Path) -> Result<Self, NameError> {
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| {
            NameError::DataUnavailable {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Ok(Self::from_dir(dir, path))
    }

    /// Wraps an already opened directory handle. `root` is only used to
    /// report paths in errors and log events.
    #[must_use]
    pub fn from_dir(dir: Dir, root: &Utf8Path) -> Self {
        Self {
            dir,
            root: root.to_path_buf(),
        }
    }

    /// Returns the directory path the source reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl DatasetSource for DirectorySource {
    fn load_records(
        &self,
        kind: DatasetKind,
        gender_filter: Option<Gender>,
    ) -> Result<Vec<NameRecord>, NameError> {
        let file_name = kind.file_name();
        let path = self.root.join(file_name);
        let contents =
            self.dir
                .read_to_string(file_name)
                .map_err(|err| NameError::DataUnavailable {
                    path: path.clone(),
                    message: err.to_string(),
                })?;
        let records = parse_records(&contents, &path)?;
        debug!(dataset = kind.label(), count = records.len(), source = %path, "loaded dataset");
        Ok(filter_by_gender(records, gender_filter))
    }
}

/// Parses a dataset JSON array, attributing failures to `origin`.
fn parse_records(json: &str, origin: &Utf8Path) -> Result<Vec<NameRecord>, NameError> {
    serde_json::from_str(json).map_err(|err| NameError::DataUnavailable {
        path: origin.to_path_buf(),
        message: err.to_string(),
    })
}

fn filter_by_gender(records: Vec<NameRecord>, gender_filter: Option<Gender>) -> Vec<NameRecord> {
    let Some(gender) = gender_filter else {
        return records;
    };
    let filtered: Vec<NameRecord> = records
        .into_iter()
        .filter(|record| record.gender() == Some(gender))
        .collect();
    debug!(?gender, count = filtered.len(), "applied gender filter");
    filtered
}
