use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness for target selection and jitter.
pub trait RandomSource {
    /// Returns a value drawn uniformly from `0..bound`, or `0` when `bound` is 0.
    fn below(&mut self, bound: u64) -> u64;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.0.gen_range(0..bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, bound: u64) -> u64 {
        (**self).below(bound)
    }
}

/// Picks one element uniformly at random.
pub fn choose<'items, T, R>(random: &mut R, items: &'items [T]) -> Option<&'items T>
where
    R: RandomSource + ?Sized,
{
    let len = u64::try_from(items.len()).ok()?;
    let index = usize::try_from(random.below(len)).ok()?;
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_support::ScriptedRandom;

    #[test]
    fn choose_follows_the_source() -> Result<(), String> {
        let urls = ["a", "b", "c"];
        let mut random = ScriptedRandom::new([2, 0, 4]);
        let picked: Vec<&str> = (0..3)
            .filter_map(|_| choose(&mut random, &urls).copied())
            .collect();
        if picked != ["c", "a", "b"] {
            return Err(format!("Unexpected picks: {:?}", picked));
        }
        Ok(())
    }

    #[test]
    fn choose_from_empty_is_none() -> Result<(), String> {
        let empty: [&str; 0] = [];
        if choose(&mut RngSource::seeded(1), &empty).is_some() {
            return Err("Expected None for an empty list".to_owned());
        }
        Ok(())
    }

    #[test]
    fn rng_source_covers_every_index() -> Result<(), String> {
        let mut random = RngSource::seeded(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let index = usize::try_from(random.below(4)).map_err(|err| err.to_string())?;
            match seen.get_mut(index) {
                Some(slot) => *slot = true,
                None => return Err(format!("Index {} out of range", index)),
            }
        }
        if seen.iter().any(|hit| !hit) {
            return Err(format!("Not all indices drawn: {:?}", seen));
        }
        Ok(())
    }
}
