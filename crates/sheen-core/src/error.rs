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

//! Defines the error types surfaced while (re)building managed shaders.

use crate::location::EffectLocation;
use std::fmt;

/// The backend rejected a shader program during creation.
///
/// Produced by [`EffectDevice`](crate::device::EffectDevice) implementations;
/// the managed handle wraps it with the failing location before it reaches a
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    /// Detailed error messages from the shader compiler or linker.
    pub details: String,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader compilation failed: {}", self.details)
    }
}

impl std::error::Error for CompileError {}

/// A managed shader could not be (re)initialized.
///
/// Either cause parks the handle in its failed state; a later reload retries.
#[derive(Debug)]
pub enum InitializationError {
    /// The resource source had no entry for the requested location.
    MissingSource {
        /// The location that failed to resolve.
        location: EffectLocation,
    },
    /// The resolved source failed to compile or link.
    Compilation {
        /// The location whose source was rejected.
        location: EffectLocation,
        /// The underlying backend error.
        cause: CompileError,
    },
}

impl InitializationError {
    /// The location of the shader that failed to initialize.
    pub fn location(&self) -> &EffectLocation {
        match self {
            InitializationError::MissingSource { location } => location,
            InitializationError::Compilation { location, .. } => location,
        }
    }
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::MissingSource { location } => {
                write!(f, "no shader source found for '{location}'")
            }
            InitializationError::Compilation { location, cause } => {
                write!(f, "failed to build shader '{location}': {cause}")
            }
        }
    }
}

impl std::error::Error for InitializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitializationError::Compilation { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn missing_source_display() {
        let err = InitializationError::MissingSource {
            location: EffectLocation::new("demo", "shaders/post/blur.json"),
        };
        assert_eq!(
            format!("{err}"),
            "no shader source found for 'demo:shaders/post/blur.json'"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn compilation_display_wraps_compile_error() {
        let err = InitializationError::Compilation {
            location: EffectLocation::new("demo", "shaders/core/lines.json"),
            cause: CompileError {
                details: "unexpected token at line 3".to_string(),
            },
        };
        assert_eq!(
            format!("{err}"),
            "failed to build shader 'demo:shaders/core/lines.json': \
             shader compilation failed: unexpected token at line 3"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn location_accessor_covers_both_variants() {
        let location = EffectLocation::new("demo", "a");
        let missing = InitializationError::MissingSource {
            location: location.clone(),
        };
        let compile = InitializationError::Compilation {
            location: location.clone(),
            cause: CompileError {
                details: String::new(),
            },
        };
        assert_eq!(missing.location(), &location);
        assert_eq!(compile.location(), &location);
    }
}
