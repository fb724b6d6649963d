//! Strongly typed simulation-instance index.
//!
//! Every batched array in the framework has one row per parallel simulation
//! instance; `EnvId` is the row index.  The inner integer is `pub` to allow
//! direct construction in tests, but callers should prefer `.index()` when
//! indexing a `Vec`.

use std::fmt;

use crate::{SemanticError, SemanticResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of one parallel simulation instance (0-based within the batch).
    pub struct EnvId(u32);
}

impl EnvId {
    /// Every instance index in a batch of `num_envs`, in ascending order.
    pub fn all(num_envs: usize) -> impl Iterator<Item = EnvId> {
        (0..num_envs as u32).map(EnvId)
    }
}

/// Reject any index that does not address a row of a `num_envs` batch.
///
/// Duplicates are allowed; resetting the same instance twice is harmless.
pub fn validate_env_ids(env_ids: &[EnvId], num_envs: usize) -> SemanticResult<()> {
    match env_ids.iter().find(|id| id.index() >= num_envs) {
        Some(&index) => Err(SemanticError::EnvIndexOutOfRange { index, num_envs }),
        None         => Ok(()),
    }
}
