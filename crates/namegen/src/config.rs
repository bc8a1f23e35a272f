//! Generation settings shared by the library entry point and the CLI.

use crate::error::ConfigError;
use crate::format::CaseStyle;
use crate::record::Gender;
use crate::selector::SelectionStrategy;

/// Validated settings for one name generation.
///
/// # Example
///
/// ```
/// use namegen::{CaseStyle, ConfigError, Configuration};
///
/// let config = Configuration::from_flags(None, true, false, false, true).expect("valid flags");
/// assert_eq!(config.case_style, CaseStyle::Snake);
///
/// let conflict = Configuration::from_flags(None, true, true, false, false);
/// assert_eq!(conflict, Err(ConfigError::ConflictingCaseStyles));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Only draw first names tagged with this gender.
    pub gender_filter: Option<Gender>,
    /// Casing applied to the final name.
    pub case_style: CaseStyle,
    /// Draw names in proportion to their popularity weight.
    pub weighted: bool,
    /// Join two independently drawn surnames with a hyphen.
    pub double_name: bool,
}

impl Configuration {
    /// Builds a configuration from raw command-line flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingCaseStyles`] if both `snake_case`
    /// and `kebab_case` are set.
    pub const fn from_flags(
        gender_filter: Option<Gender>,
        snake_case: bool,
        kebab_case: bool,
        weighted: bool,
        double_name: bool,
    ) -> Result<Self, ConfigError> {
        let case_style = match (snake_case, kebab_case) {
            (true, true) => return Err(ConfigError::ConflictingCaseStyles),
            (true, false) => CaseStyle::Snake,
            (false, true) => CaseStyle::Kebab,
            (false, false) => CaseStyle::Plain,
        };
        Ok(Self {
            gender_filter,
            case_style,
            weighted,
            double_name,
        })
    }

    /// Returns the draw strategy implied by [`Configuration::weighted`].
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        SelectionStrategy::from_weighted_flag(self.weighted)
    }
}
