//! The environment catalog: the fixed set of virtual-room templates an
//! exhibit can be placed in. Each environment has an immutable display-slot
//! capacity; the allocator partitions exactly that many slots.

use core::fmt;
use core::num::NonZeroU32;
use std::path::Path;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier of a virtual-room template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(pub u32);

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display-slot capacity of an environment. Non-zero by construction, so a
/// zero capacity is rejected at the serde boundary instead of surfacing as a
/// degenerate allocation later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotCapacity(pub NonZeroU32);

impl SlotCapacity {
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SlotCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A virtual-room template with a fixed number of display slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: EnvironmentId,
    pub image: String,
    pub slots: SlotCapacity,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no environments")]
    Empty,
    #[error("environment id {0} appears more than once in the catalog")]
    DuplicateEnvironment(EnvironmentId),
}

/// Ordered, validated collection of environments.
///
/// Only constructible through [`Catalog::new`] (or the loaders built on it),
/// so a catalog in hand is always non-empty with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    environments: Vec<Environment>,
}

impl Catalog {
    pub fn new(environments: Vec<Environment>) -> Result<Self, CatalogError> {
        if environments.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(id) = environments
            .iter()
            .map(|environment| environment.id)
            .duplicates()
            .next()
        {
            return Err(CatalogError::DuplicateEnvironment(id));
        }
        Ok(Self { environments })
    }

    /// Parse a catalog from its JSON wire form, a plain array of
    /// environments.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// The catalog shipped with the marketplace: three rooms with 4, 6 and
    /// 10 slots.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn get(&self, id: EnvironmentId) -> Option<&Environment> {
        self.environments
            .iter()
            .find(|environment| environment.id == id)
    }

    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

const fn builtin_capacity(value: u32) -> SlotCapacity {
    match SlotCapacity::new(value) {
        Some(capacity) => capacity,
        None => panic!("built-in capacity must be non-zero"),
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    environments: vec![
        Environment {
            id: EnvironmentId(1),
            image: "https://images.unsplash.com/photo-1594122230689-45899d9e6f69?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                .to_owned(),
            slots: builtin_capacity(4),
        },
        Environment {
            id: EnvironmentId(2),
            image: "https://images.unsplash.com/photo-1580136579312-94651dfd596d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                .to_owned(),
            slots: builtin_capacity(6),
        },
        Environment {
            id: EnvironmentId(3),
            image: "../../pics/slots-10.PNG".to_owned(),
            slots: builtin_capacity(10),
        },
    ],
});
