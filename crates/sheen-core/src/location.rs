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

//! Logical addressing of shader resources.

use std::fmt;
use std::str::FromStr;

/// Identifies a shader resource inside a [`ResourceSource`](crate::resource::ResourceSource).
///
/// A location is a `namespace:path` pair, immutable after construction. It only
/// keys resource resolution: two handles registered with equal locations remain
/// distinct registry members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectLocation {
    namespace: String,
    path: String,
}

impl EffectLocation {
    /// Creates a location from its namespace and path components.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// The namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path component, relative to the resource source's root.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for EffectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// A textual location could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocationError {
    input: String,
}

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid effect location '{}': expected 'namespace:path'",
            self.input
        )
    }
}

impl std::error::Error for ParseLocationError {}

impl FromStr for EffectLocation {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() && !path.is_empty() => {
                Ok(Self::new(namespace, path))
            }
            _ => Err(ParseLocationError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_namespace_and_path() {
        let location = EffectLocation::new("demo", "shaders/post/blur.json");
        assert_eq!(format!("{location}"), "demo:shaders/post/blur.json");
    }

    #[test]
    fn parse_round_trip() {
        let location: EffectLocation = "demo:shaders/post/blur.json"
            .parse()
            .expect("Parse should succeed");
        assert_eq!(location.namespace(), "demo");
        assert_eq!(location.path(), "shaders/post/blur.json");
        assert_eq!(format!("{location}"), "demo:shaders/post/blur.json");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = "no-separator".parse::<EffectLocation>().unwrap_err();
        assert_eq!(
            format!("{err}"),
            "invalid effect location 'no-separator': expected 'namespace:path'"
        );
    }

    #[test]
    fn parse_rejects_empty_components() {
        assert!(":path".parse::<EffectLocation>().is_err());
        assert!("namespace:".parse::<EffectLocation>().is_err());
    }

    #[test]
    fn equal_locations_hash_alike() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(EffectLocation::new("demo", "a"), 1);
        assert_eq!(map.get(&EffectLocation::new("demo", "a")), Some(&1));
        assert_eq!(map.get(&EffectLocation::new("demo", "b")), None);
    }
}
