//! The load → select → compose → format pipeline.

use rand::Rng;
use tracing::debug;

use crate::composer::compose;
use crate::config::Configuration;
use crate::dataset::DatasetSource;
use crate::error::NameError;
use crate::format::format_name;

/// Generates formatted names from a dataset source.
///
/// # Example
///
/// ```
/// use namegen::{BundledSource, Configuration, NameGenerator};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = NameGenerator::new(BundledSource);
/// let config = Configuration { weighted: true, ..Configuration::default() };
///
/// let first = generator.generate_name(&config, &mut ChaCha8Rng::seed_from_u64(42)).expect("name");
/// let second = generator.generate_name(&config, &mut ChaCha8Rng::seed_from_u64(42)).expect("name");
///
/// assert_eq!(first, second);
/// assert!(first.contains(' '));
/// ```
#[derive(Debug, Clone)]
pub struct NameGenerator<S> {
    source: S,
}

impl<S: DatasetSource> NameGenerator<S> {
    /// Creates a generator reading from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the dataset source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Loads both datasets, draws a name and renders it per `config`.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::DataUnavailable`] if a dataset cannot be loaded
    /// and [`NameError::EmptyPool`] if a pool (typically the gender-filtered
    /// first names) has no records.
    pub fn generate_name<R: Rng>(
        &self,
        config: &Configuration,
        rng: &mut R,
    ) -> Result<String, NameError> {
        let first_names = self.source.load_first_names(config.gender_filter)?;
        let surnames = self.source.load_surnames()?;

        let composed = compose(config, rng, &first_names, &surnames)?;
        let formatted = format_name(&composed.first, &composed.last, config.case_style);
        debug!(case_style = ?config.case_style, name = %formatted, "generated name");
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::dataset::DatasetKind;
    use crate::format::CaseStyle;
    use crate::record::{Gender, NameRecord};

    /// In-memory source used to drive the pipeline without touching disk.
    struct StaticSource {
        first_names: Vec<NameRecord>,
        surnames: Vec<NameRecord>,
    }

    impl DatasetSource for StaticSource {
        fn load_records(
            &self,
            kind: DatasetKind,
            gender_filter: Option<Gender>,
        ) -> Result<Vec<NameRecord>, NameError> {
            let records = match kind {
                DatasetKind::FirstNames => &self.first_names,
                DatasetKind::Surnames => &self.surnames,
            };
            Ok(records
                .iter()
                .filter(|record| gender_filter.is_none_or(|gender| record.gender() == Some(gender)))
                .cloned()
                .collect())
        }
    }

    struct UnavailableSource;

    impl DatasetSource for UnavailableSource {
        fn load_records(
            &self,
            kind: DatasetKind,
            _gender_filter: Option<Gender>,
        ) -> Result<Vec<NameRecord>, NameError> {
            Err(NameError::DataUnavailable {
                path: kind.file_name().into(),
                message: "missing".to_owned(),
            })
        }
    }

    fn ann_bob_lee() -> NameGenerator<StaticSource> {
        NameGenerator::new(StaticSource {
            first_names: vec![
                NameRecord::new("Ann", Some(Gender::Female), 1),
                NameRecord::new("Bob", Some(Gender::Male), 9),
            ],
            surnames: vec![NameRecord::new("Lee", None, 1)],
        })
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn female_weighted_is_always_ann_lee(#[case] seed: u64) {
        let config = Configuration {
            gender_filter: Some(Gender::Female),
            weighted: true,
            ..Configuration::default()
        };

        let name = ann_bob_lee()
            .generate_name(&config, &mut ChaCha8Rng::seed_from_u64(seed))
            .expect("name generated");

        assert_eq!(name, "Ann Lee");
    }

    #[rstest]
    #[case(CaseStyle::Plain, "Bob Lee-Lee")]
    #[case(CaseStyle::Snake, "bob_lee_lee")]
    #[case(CaseStyle::Kebab, "bob-lee-lee")]
    fn case_style_applies_to_double_name(#[case] case_style: CaseStyle, #[case] expected: &str) {
        let config = Configuration {
            gender_filter: Some(Gender::Male),
            case_style,
            weighted: false,
            double_name: true,
        };

        let name = ann_bob_lee()
            .generate_name(&config, &mut ChaCha8Rng::seed_from_u64(5))
            .expect("name generated");

        assert_eq!(name, expected);
    }

    #[test]
    fn gender_filter_matching_nothing_is_an_empty_pool() {
        let generator = NameGenerator::new(StaticSource {
            first_names: vec![NameRecord::new("Ann", Some(Gender::Female), 1)],
            surnames: vec![NameRecord::new("Lee", None, 1)],
        });
        let config = Configuration {
            gender_filter: Some(Gender::Male),
            ..Configuration::default()
        };

        let result = generator.generate_name(&config, &mut ChaCha8Rng::seed_from_u64(1));

        assert_eq!(
            result,
            Err(NameError::EmptyPool {
                pool: "first name".to_owned()
            })
        );
    }

    #[test]
    fn unavailable_data_propagates() {
        let generator = NameGenerator::new(UnavailableSource);

        let result =
            generator.generate_name(&Configuration::default(), &mut ChaCha8Rng::seed_from_u64(1));

        assert!(matches!(result, Err(NameError::DataUnavailable { .. })));
    }
}
