use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{LazyLock, Mutex},
};
use thiserror::Error as ThisError;
use ulid::Ulid;

///
/// GENERATOR is lazily initiated with a Mutex
/// it has to keep state so ids stay unique within the same millisecond
///

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::default()));

///
/// WillIdError
///

#[derive(Debug, ThisError)]
pub enum WillIdError {
    #[error("id generator overflow")]
    GeneratorOverflow,
}

///
/// WillId
///
/// Opaque record identifier: a ULID string, so the time-based prefix keeps
/// ids roughly creation-ordered and the random suffix keeps them unique.
/// Decoded ids are accepted as-is; the store may hold ids minted elsewhere.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WillId(String);

impl WillId {
    /// Mint a fresh id from the global monotonic generator.
    pub fn generate() -> Result<Self, WillIdError> {
        let mut generator = GENERATOR.lock().expect("id generator mutex poisoned");

        generator.generate().map(|ulid| Self(ulid.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WillId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WillId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

///
/// Generator
///
/// Monotonic ULID generation; increments within the same millisecond so two
/// creates in one tick cannot collide.
///

struct Generator {
    previous: Ulid,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            previous: Ulid::nil(),
        }
    }
}

impl Generator {
    fn generate(&mut self) -> Result<Ulid, WillIdError> {
        let candidate = Ulid::new();

        // maybe time went backward, or it is the same ms.
        // increment instead of generating a new random so that it stays unique
        if candidate <= self.previous {
            let next = self
                .previous
                .increment()
                .ok_or(WillIdError::GeneratorOverflow)?;
            self.previous = next;

            return Ok(next);
        }

        self.previous = candidate;

        Ok(candidate)
    }
}

///
/// TESTS
///
