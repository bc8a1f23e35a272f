//! Uniform and popularity-weighted random selection over name records.
//!
//! Both strategies take the random source explicitly so callers can seed it
//! for reproducible output.

use rand::Rng;

use crate::error::NameError;
use crate::record::NameRecord;

/// How a name is drawn from a pool of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionStrategy {
    /// Every record is equally likely.
    #[default]
    Uniform,
    /// Records are drawn in proportion to their weight.
    Weighted,
}

impl SelectionStrategy {
    /// Returns the weighted strategy when `weighted` is set, uniform otherwise.
    #[must_use]
    pub const fn from_weighted_flag(weighted: bool) -> Self {
        if weighted { Self::Weighted } else { Self::Uniform }
    }

    /// Draws one name from `records` with this strategy.
    ///
    /// `pool` names the pool in the [`NameError::EmptyPool`] error.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::EmptyPool`] if `records` is empty.
    pub fn pick<'a, R: Rng>(
        self,
        rng: &mut R,
        records: &'a [NameRecord],
        pool: &str,
    ) -> Result<&'a str, NameError> {
        match self {
            Self::Uniform => pick_uniform(rng, records, pool),
            Self::Weighted => pick_weighted(rng, records, pool),
        }
    }
}

/// Draws a name uniformly at random.
///
/// # Errors
///
/// Returns [`NameError::EmptyPool`] if `records` is empty.
///
/// # Example
///
/// ```
/// use namegen::{NameRecord, pick_uniform};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let records = vec![NameRecord::new("Ann", None, 0), NameRecord::new("Bob", None, 0)];
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let name = pick_uniform(&mut rng, &records, "first name").expect("non-empty pool");
/// assert!(name == "Ann" || name == "Bob");
/// ```
pub fn pick_uniform<'a, R: Rng>(
    rng: &mut R,
    records: &'a [NameRecord],
    pool: &str,
) -> Result<&'a str, NameError> {
    if records.is_empty() {
        return Err(empty_pool(pool));
    }
    let index = rng.random_range(0..records.len());
    records
        .get(index)
        .map(NameRecord::name)
        .ok_or_else(|| empty_pool(pool))
}

/// Draws a name with probability proportional to its weight.
///
/// Records are ranked by descending weight (ties keep dataset order). A value
/// `r` is drawn from `0..=total_weight`, inclusive of the upper bound, and
/// each ranked weight is subtracted from it in turn; the first record that
/// brings the running value to zero or below is chosen. The inclusive bound
/// gives the heaviest record one extra chance in `total_weight + 1`.
///
/// When every weight is zero the last ranked record is returned on every
/// call. Do not rely on that pool being sampled uniformly.
///
/// # Errors
///
/// Returns [`NameError::EmptyPool`] if `records` is empty.
///
/// # Example
///
/// ```
/// use namegen::{NameRecord, pick_weighted};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let records = vec![NameRecord::new("Ann", None, 0), NameRecord::new("Bob", None, 5)];
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// assert_eq!(pick_weighted(&mut rng, &records, "surname"), Ok("Bob"));
/// ```
pub fn pick_weighted<'a, R: Rng>(
    rng: &mut R,
    records: &'a [NameRecord],
    pool: &str,
) -> Result<&'a str, NameError> {
    let mut ranked: Vec<&NameRecord> = records.iter().collect();
    // `sort_by` is stable, so equal weights keep their dataset order.
    ranked.sort_by(|a, b| b.weight().cmp(&a.weight()));

    let Some(last) = ranked.last().copied() else {
        return Err(empty_pool(pool));
    };

    let total_weight: u64 = ranked.iter().map(|record| u64::from(record.weight())).sum();
    if total_weight == 0 {
        return Ok(last.name());
    }

    let mut remaining = rng.random_range(0..=total_weight);
    for record in &ranked {
        let weight = u64::from(record.weight());
        if remaining <= weight {
            return Ok(record.name());
        }
        remaining -= weight;
    }

    // The cumulative weight reaches `total_weight >= remaining`, so the loop
    // always returns before getting here.
    Ok(last.name())
}

fn empty_pool(pool: &str) -> NameError {
    NameError::EmptyPool {
        pool: pool.to_owned(),
    }
}
