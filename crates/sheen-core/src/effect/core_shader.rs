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

use crate::device::{CoreShaderId, EffectDevice};
use crate::effect::handle::{InitState, ManagedShader, ProgramSlot};
use crate::error::InitializationError;
use crate::location::EffectLocation;
use crate::resource::ResourceSource;
use crate::vertex::VertexLayout;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Callback invoked after each successful initialization of a core shader,
/// with a reference to the freshly initialized handle.
pub type CoreShaderInitCallback = Box<dyn Fn(&ManagedCoreShader) + Send + Sync>;

/// A core (vertex + fragment) shader bound to a vertex layout, with a
/// reloadable backend program.
///
/// Unlike a post-process effect, a core shader renders straight to the bound
/// target and keeps no framebuffer-sized resources, so resize broadcasts have
/// nothing to rebuild for it.
pub struct ManagedCoreShader {
    location: EffectLocation,
    layout: VertexLayout,
    device: Arc<dyn EffectDevice>,
    init_callback: CoreShaderInitCallback,
    program: Mutex<ProgramSlot<CoreShaderId>>,
}

impl ManagedCoreShader {
    pub(crate) fn new(
        location: EffectLocation,
        layout: VertexLayout,
        device: Arc<dyn EffectDevice>,
        init_callback: CoreShaderInitCallback,
    ) -> Self {
        Self {
            location,
            layout,
            device,
            init_callback,
            program: Mutex::new(ProgramSlot::Vacant),
        }
    }

    /// The location this shader is loaded from.
    pub fn location(&self) -> &EffectLocation {
        &self.location
    }

    /// The vertex layout the program binds to.
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// The device id of the current backend program, if initialized.
    pub fn program_id(&self) -> Option<CoreShaderId> {
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

    fn program(&self) -> MutexGuard<'_, ProgramSlot<CoreShaderId>> {
        match self.program.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ManagedShader for ManagedCoreShader {
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
        if let ProgramSlot::Active(previous) = std::mem::replace(&mut *slot, ProgramSlot::Vacant) {
            self.device.destroy_core_shader(previous);
        }

        let Some(source) = resources.resolve(&self.location) else {
            *slot = ProgramSlot::Failed;
            return Err(InitializationError::MissingSource {
                location: self.location.clone(),
            });
        };

        match self
            .device
            .create_core_shader(&self.location, &source, &self.layout)
        {
            Ok(id) => {
                *slot = ProgramSlot::Active(id);
                drop(slot);
                log::debug!("Initialized core shader {}", self.location);
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

    fn setup(&self, _width: u32, _height: u32) {
        // Nothing dimension-dependent to rebuild; the call is still only
        // valid on an initialized shader.
        assert!(
            self.is_initialized(),
            "setup() called on core shader {} before it was initialized",
            self.location
        );
    }
}

impl fmt::Debug for ManagedCoreShader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedCoreShader")
            .field("location", &self.location)
            .field("state", &self.init_state())
            .finish_non_exhaustive()
    }
}
