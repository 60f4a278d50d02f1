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

use crate::error::InitializationError;
use crate::location::EffectLocation;
use crate::resource::ResourceSource;
use std::fmt::Debug;

/// Lifecycle state of a managed shader.
///
/// `Failed` and `Uninitialized` are observably different: a failed shader
/// already attempted to build and logged its error, and stays parked until a
/// later reload retries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    /// Initialization has not been attempted yet.
    Uninitialized,
    /// The backend program exists and is usable.
    Initialized,
    /// The last initialization attempt failed.
    Failed,
}

/// Tracks the backend program behind a managed handle.
#[derive(Debug)]
pub(crate) enum ProgramSlot<Id> {
    Vacant,
    Active(Id),
    Failed,
}

impl<Id> ProgramSlot<Id> {
    pub(crate) fn state(&self) -> InitState {
        match self {
            ProgramSlot::Vacant => InitState::Uninitialized,
            ProgramSlot::Active(_) => InitState::Initialized,
            ProgramSlot::Failed => InitState::Failed,
        }
    }
}

/// The registry-facing surface of a managed shader.
///
/// Both managed kinds — post-process effects and core shaders — implement
/// this trait; the manager broadcasts over `dyn ManagedShader` members
/// without caring which kind it holds.
pub trait ManagedShader: Debug + Send + Sync {
    /// The location this shader is loaded from.
    fn location(&self) -> &EffectLocation;

    /// Whether the backend program currently exists.
    fn is_initialized(&self) -> bool;

    /// The current lifecycle state.
    fn init_state(&self) -> InitState;

    /// (Re)builds the backend program from `resources`.
    ///
    /// Idempotent with respect to the state machine: succeeding from
    /// `Initialized` releases the previous program and mints a fresh one,
    /// succeeding from `Failed` recovers the handle. On failure the handle is
    /// parked in `Failed` and the error is returned to the caller.
    fn initialize(&self, resources: &dyn ResourceSource) -> Result<(), InitializationError>;

    /// Applies new surface dimensions to the backend program.
    ///
    /// # Panics
    /// Panics when the shader is not initialized. The manager's resize
    /// broadcast guards every call with [`ManagedShader::is_initialized`];
    /// reaching the panic means a caller broke that invariant.
    fn setup(&self, width: u32, height: u32);

    /// Initializes, logging failure instead of propagating it.
    ///
    /// This is the error boundary used by the batch reload: one broken shader
    /// must not keep the remaining members from initializing.
    fn initialize_or_log(&self, resources: &dyn ResourceSource) {
        if let Err(err) = self.initialize(resources) {
            log::error!("Could not create shader program {}: {err}", self.location());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_states_map_to_init_states() {
        assert_eq!(ProgramSlot::<u32>::Vacant.state(), InitState::Uninitialized);
        assert_eq!(ProgramSlot::Active(7u32).state(), InitState::Initialized);
        assert_eq!(ProgramSlot::<u32>::Failed.state(), InitState::Failed);
    }
}
