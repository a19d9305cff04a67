use std::time::Duration;

use crate::error::ValidationError;

use super::random::RandomSource;

/// Half-open delay window `[from_ms, to_ms)` between probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterWindow {
    from_ms: u64,
    to_ms: u64,
}

impl JitterWindow {
    /// # Errors
    ///
    /// Returns `InvalidJitterWindow` unless `from_ms < to_ms`.
    pub const fn new(from_ms: u64, to_ms: u64) -> Result<Self, ValidationError> {
        if to_ms <= from_ms {
            return Err(ValidationError::InvalidJitterWindow { from_ms, to_ms });
        }
        Ok(Self { from_ms, to_ms })
    }

    #[must_use]
    pub const fn from_ms(&self) -> u64 {
        self.from_ms
    }

    #[must_use]
    pub const fn to_ms(&self) -> u64 {
        self.to_ms
    }

    #[must_use]
    pub const fn span_ms(&self) -> u64 {
        self.to_ms.saturating_sub(self.from_ms)
    }

    /// Draws the next inter-probe delay.
    pub fn delay<R>(&self, random: &mut R) -> Duration
    where
        R: RandomSource + ?Sized,
    {
        let offset = random.below(self.span_ms());
        Duration::from_millis(self.from_ms.saturating_add(offset))
    }
}
