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

use crate::device::{EffectDevice, PostEffectId};
use crate::effect::handle::{InitState, ManagedShader, ProgramSlot};
use crate::error::InitializationError;
use crate::location::EffectLocation;
use crate::resource::ResourceSource;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Callback invoked after each successful initialization of a post-process
/// effect, with a reference to the freshly initialized handle.
pub type EffectInitCallback = Box<dyn Fn(&ManagedShaderEffect) + Send + Sync>;

/// A post-process shader effect with a reloadable backend program.
///
/// Created through the manager's `manage` family and returned to the caller,
/// who co-owns it and may use [`ManagedShaderEffect::program_id`] for direct
/// draw dispatch. The handle stays uninitialized until the first reload
/// broadcast builds it.
pub struct ManagedShaderEffect {
    location: EffectLocation,
    device: Arc<dyn EffectDevice>,
    init_callback: EffectInitCallback,
    program: Mutex<ProgramSlot<PostEffectId>>,
}

impl ManagedShaderEffect {
    pub(crate) fn new(
        location: EffectLocation,
        device: Arc<dyn EffectDevice>,
        init_callback: EffectInitCallback,
    ) -> Self {
        Self {
            location,
            device,
            init_callback,
            program: Mutex::new(ProgramSlot::Vacant),
        }
    }

    /// The location this effect is loaded from.
    pub fn location(&self) -> &EffectLocation {
        &self.location
    }

    /// The device id of the current backend program, if initialized.
    pub fn program_id(&self) -> Option<PostEffectId> {
        match *self.program() {
            ProgramSlot::Active(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the backend program currently exists.
    pub fn is_initialized(&self) -> bool {
        self.init_state() == InitState::Initialized
    }

    /// The current lifecycle state.
    pub fn init_state(&self) -> InitState {
        self.program().state()
    }

    // A poisoned lock only means a previous panic unwound mid-update; the
    // slot enum is left consistent on every path, so recover the value.
    fn program(&self) -> MutexGuard<'_, ProgramSlot<PostEffectId>> {
        match self.program.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ManagedShader for ManagedShaderEffect {
    fn location(&self) -> &EffectLocation {
        self.location()
    }

    fn is_initialized(&self) -> bool {
        self.is_initialized()
    }

    fn init_state(&self) -> InitState {
        self.init_state()
    }

    fn initialize(&self, resources: &dyn ResourceSource) -> Result<(), InitializationError> {
        let mut slot = self.program();
        // Rebuilding always releases the previous program; a failed attempt
        // leaves the handle without one until a later reload succeeds.
        if let ProgramSlot::Active(previous) = std::mem::replace(&mut *slot, ProgramSlot::Vacant) {
            self.device.destroy_post_effect(previous);
        }

        let Some(source) = resources.resolve(&self.location) else {
            *slot = ProgramSlot::Failed;
            return Err(InitializationError::MissingSource {
                location: self.location.clone(),
            });
        };

        match self.device.create_post_effect(&self.location, &source) {
            Ok(id) => {
                *slot = ProgramSlot::Active(id);
                drop(slot);
                log::debug!("Initialized shader effect {}", self.location);
                (self.init_callback)(self);
                Ok(())
            }
            Err(cause) => {
                *slot = ProgramSlot::Failed;
                Err(InitializationError::Compilation {
                    location: self.location.clone(),
                    cause,
                })
            }
        }
    }

    fn setup(&self, width: u32, height: u32) {
        match *self.program() {
            ProgramSlot::Active(id) => self.device.resize_post_effect(id, width, height),
            _ => panic!(
                "setup() called on shader effect {} before it was initialized",
                self.location
            ),
        }
    }
}

impl fmt::Debug for ManagedShaderEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedShaderEffect")
            .field("location", &self.location)
            .field("state", &self.init_state())
            .finish_non_exhaustive()
    }
}
