//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier issued by an [`IdSequence`].
///
/// Ids are positive; `0` is never issued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn from_u64(value: u64) -> Self {
                Self(value)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_u64_newtype!(SequenceId, "SequenceId");

/// Monotonic id allocator.
///
/// Every issued id is strictly greater than every id issued or observed before
/// it, so ids never collide even when a store was seeded with explicit ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// A fresh sequence; the first issued id is `1`.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// A sequence whose next id follows `last`.
    pub fn starting_after(last: SequenceId) -> Self {
        Self { last: last.0 }
    }

    /// Highest id issued or observed so far (`None` for a fresh sequence).
    pub fn last(&self) -> Option<SequenceId> {
        (self.last > 0).then_some(SequenceId(self.last))
    }

    /// Record an externally assigned id so later ids stay above it.
    pub fn observe(&mut self, id: SequenceId) {
        self.last = self.last.max(id.0);
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> DomainResult<SequenceId> {
        let next = self
            .last
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("id sequence exhausted"))?;
        self.last = next;
        Ok(SequenceId(next))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
