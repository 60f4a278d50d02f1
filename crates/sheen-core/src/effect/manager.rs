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

use crate::device::EffectDevice;
use crate::effect::core_shader::{CoreShaderInitCallback, ManagedCoreShader};
use crate::effect::handle::ManagedShader;
use crate::effect::post_effect::{EffectInitCallback, ManagedShaderEffect};
use crate::event::{SurfaceEvent, SurfaceEventBus};
use crate::location::EffectLocation;
use crate::resource::ResourceSource;
use crate::vertex::VertexLayout;
use std::sync::{Arc, Mutex, MutexGuard};

/// The registry that keeps managed shaders alive and consistent.
///
/// Registration hands out uninitialized handles; the next [`reload`] builds
/// them against the current resource source, and resize events re-derive the
/// size-dependent state of every initialized member. Membership is keyed by
/// handle identity: registering two shaders with the same location yields two
/// independent members. Members are never removed; the collection grows for
/// the manager's lifetime.
///
/// Constructed once during renderer bring-up, with the device and the surface
/// event bus injected; the event subscription is taken at construction and
/// lives as long as the manager.
///
/// [`reload`]: ShaderEffectManager::reload
#[derive(Debug)]
pub struct ShaderEffectManager {
    device: Arc<dyn EffectDevice>,
    effects: Mutex<Vec<Arc<dyn ManagedShader>>>,
    surface_events: flume::Receiver<SurfaceEvent>,
}

impl ShaderEffectManager {
    /// Creates a manager driving programs on `device`, subscribed to `events`.
    pub fn new(device: Arc<dyn EffectDevice>, events: &SurfaceEventBus) -> Self {
        Self {
            device,
            effects: Mutex::new(Vec::new()),
            surface_events: events.subscribe(),
        }
    }

    /// Registers a post-process effect loaded from `location`.
    ///
    /// The returned handle is uninitialized until the next [`reload`]; the
    /// caller co-owns it and may query or draw with it independently of the
    /// manager.
    ///
    /// [`reload`]: ShaderEffectManager::reload
    pub fn manage(&self, location: EffectLocation) -> Arc<ManagedShaderEffect> {
        self.manage_with_init(location, Box::new(|_| {}))
    }

    /// Registers a post-process effect with a callback invoked after every
    /// successful initialization (first build and each rebuild).
    pub fn manage_with_init(
        &self,
        location: EffectLocation,
        init_callback: EffectInitCallback,
    ) -> Arc<ManagedShaderEffect> {
        let effect = Arc::new(ManagedShaderEffect::new(
            location,
            Arc::clone(&self.device),
            init_callback,
        ));
        self.effects().push(Arc::clone(&effect) as Arc<dyn ManagedShader>);
        effect
    }

    /// Registers a core shader with the standard
    /// position/color/texture/overlay/light/normal vertex layout.
    pub fn manage_core_shader(&self, location: EffectLocation) -> Arc<ManagedCoreShader> {
        self.manage_core_shader_with_layout(location, VertexLayout::default())
    }

    /// Registers a core shader bound to `layout`.
    pub fn manage_core_shader_with_layout(
        &self,
        location: EffectLocation,
        layout: VertexLayout,
    ) -> Arc<ManagedCoreShader> {
        self.manage_core_shader_with_init(location, layout, Box::new(|_| {}))
    }

    /// Registers a core shader bound to `layout`, with a callback invoked
    /// after every successful initialization.
    pub fn manage_core_shader_with_init(
        &self,
        location: EffectLocation,
        layout: VertexLayout,
        init_callback: CoreShaderInitCallback,
    ) -> Arc<ManagedCoreShader> {
        let shader = Arc::new(ManagedCoreShader::new(
            location,
            layout,
            Arc::clone(&self.device),
            init_callback,
        ));
        self.effects().push(Arc::clone(&shader) as Arc<dyn ManagedShader>);
        shader
    }

    /// Rebuilds every registered shader against `resources`.
    ///
    /// Failures are logged per member and never abort the batch; a member
    /// that fails stays parked until the next reload retries it.
    pub fn reload(&self, resources: &dyn ResourceSource) {
        let effects = self.effects();
        log::info!("Reloading {} managed shaders", effects.len());
        for effect in effects.iter() {
            effect.initialize_or_log(resources);
        }
    }

    /// Applies new surface dimensions to every initialized member.
    ///
    /// Uninitialized and failed members are skipped; they pick up dimensions
    /// from the next resize event after they build.
    pub fn on_surface_resized(&self, width: u32, height: u32) {
        let effects = self.effects();
        if effects.is_empty() {
            return;
        }
        log::debug!("Resizing managed shaders to {width}x{height}");
        for effect in effects.iter() {
            if effect.is_initialized() {
                effect.setup(width, height);
            }
        }
    }

    /// Drains pending surface events and forwards them to the broadcasts.
    ///
    /// Intended to be called from the render thread once per frame or event
    /// pump tick.
    pub fn process_events(&self) {
        while let Ok(event) = self.surface_events.try_recv() {
            match event {
                SurfaceEvent::Resized { width, height } => self.on_surface_resized(width, height),
            }
        }
    }

    /// The number of registered members.
    pub fn effect_count(&self) -> usize {
        self.effects().len()
    }

    fn effects(&self) -> MutexGuard<'_, Vec<Arc<dyn ManagedShader>>> {
        match self.effects.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
