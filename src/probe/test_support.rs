use std::collections::VecDeque;

use super::RandomSource;

/// Replays a fixed sequence, reduced modulo the requested bound.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    values: VecDeque<u64>,
}

impl ScriptedRandom {
    pub(crate) fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u64) -> u64 {
        let value = self.values.pop_front().unwrap_or_default();
        value.checked_rem(bound).unwrap_or_default()
    }
}
