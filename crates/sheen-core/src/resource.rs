// Copyright 2025 the sheen authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolution of shader locations to raw source bytes.
//!
//! The reload trigger hands the manager a [`ResourceSource`] representing the
//! currently loaded asset set; every registered shader is rebuilt against it.
//! [`MemoryResourceSource`] is a ready-made in-memory implementation for
//! tests and demo hosts.

use crate::location::EffectLocation;
use std::collections::HashMap;

/// Resolves logical shader locations to raw source bytes.
pub trait ResourceSource {
    /// Returns the bytes backing `location`, or `None` when the source has no
    /// such entry.
    fn resolve(&self, location: &EffectLocation) -> Option<Vec<u8>>;
}

/// An in-memory resource source.
///
/// Backed by a `HashMap` for O(1) average-time lookups.
#[derive(Debug, Default)]
pub struct MemoryResourceSource {
    entries: HashMap<EffectLocation, Vec<u8>>,
}

impl MemoryResourceSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` under `location`, replacing any previous entry.
    pub fn insert(&mut self, location: EffectLocation, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(location, bytes.into());
    }
}

impl ResourceSource for MemoryResourceSource {
    fn resolve(&self, location: &EffectLocation) -> Option<Vec<u8>> {
        self.entries.get(location).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_stored_bytes() {
        let mut source = MemoryResourceSource::new();
        let location = EffectLocation::new("demo", "shaders/post/blur.json");
        source.insert(location.clone(), b"{\"passes\": []}".as_slice());

        assert_eq!(
            source.resolve(&location),
            Some(b"{\"passes\": []}".to_vec())
        );
    }

    #[test]
    fn resolve_misses_unknown_location() {
        let source = MemoryResourceSource::new();
        assert_eq!(
            source.resolve(&EffectLocation::new("demo", "missing.json")),
            None
        );
    }

    #[test]
    fn insert_replaces_previous_entry() {
        let mut source = MemoryResourceSource::new();
        let location = EffectLocation::new("demo", "shaders/post/blur.json");
        source.insert(location.clone(), b"v1".as_slice());
        source.insert(location.clone(), b"v2".as_slice());

        assert_eq!(source.resolve(&location), Some(b"v2".to_vec()));
    }
}
