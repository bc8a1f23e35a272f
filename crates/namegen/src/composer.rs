//! Composition of a raw first name and surname pair.

use rand::Rng;
use tracing::debug;

use crate::config::Configuration;
use crate::error::NameError;
use crate::record::NameRecord;

/// A drawn name before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedName {
    /// The drawn first name.
    pub first: String,
    /// The drawn surname, or two surnames joined by `-`.
    pub last: String,
}

/// Draws a first name and a surname with the strategy `config` selects.
///
/// With [`Configuration::double_name`] set, a second surname is drawn
/// independently from the same pool (it may repeat the first) and appended
/// after a hyphen. Draws happen in a fixed order, first name then surnames,
/// so a seeded `rng` always yields the same pair.
///
/// # Errors
///
/// Returns [`NameError::EmptyPool`] if either pool is empty.
pub fn compose<R: Rng>(
    config: &Configuration,
    rng: &mut R,
    first_names: &[NameRecord],
    surnames: &[NameRecord],
) -> Result<ComposedName, NameError> {
    let strategy = config.strategy();
    debug!(?strategy, double_name = config.double_name, "composing name");

    let first = strategy.pick(rng, first_names, "first name")?;
    let surname = strategy.pick(rng, surnames, "surname")?;
    let last = if config.double_name {
        let second_surname = strategy.pick(rng, surnames, "surname")?;
        format!("{surname}-{second_surname}")
    } else {
        surname.to_owned()
    };

    Ok(ComposedName {
        first: first.to_owned(),
        last,
    })
}
