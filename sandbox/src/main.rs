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

//! Demo host for the reloadable shader-effect manager.
//!
//! Wires a [`ShaderEffectManager`] against a stub device that only logs, then
//! walks the full lifecycle: register, reload (with one deliberately missing
//! shader), resize via the event bus, reload again.

use anyhow::Result;
use sheen_core::device::{CoreShaderId, EffectDevice, PostEffectId};
use sheen_core::error::CompileError;
use sheen_core::event::{SurfaceEvent, SurfaceEventBus};
use sheen_core::resource::MemoryResourceSource;
use sheen_core::vertex::VertexLayout;
use sheen_core::{EffectLocation, ShaderEffectManager};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A device that mints ids and logs what a real backend would do.
#[derive(Debug, Default)]
struct LoggingDevice {
    next_id: AtomicUsize,
}

impl EffectDevice for LoggingDevice {
    fn create_post_effect(
        &self,
        location: &EffectLocation,
        source: &[u8],
    ) -> Result<PostEffectId, CompileError> {
        if source.is_empty() {
            return Err(CompileError {
                details: "empty shader source".to_string(),
            });
        }
        let id = PostEffectId(self.next_id.fetch_add(1, Ordering::Relaxed));
        log::info!("[device] built post effect {location} -> {id:?} ({} bytes)", source.len());
        Ok(id)
    }

    fn resize_post_effect(&self, id: PostEffectId, width: u32, height: u32) {
        log::info!("[device] resized {id:?} to {width}x{height}");
    }

    fn destroy_post_effect(&self, id: PostEffectId) {
        log::info!("[device] destroyed {id:?}");
    }

    fn create_core_shader(
        &self,
        location: &EffectLocation,
        source: &[u8],
        layout: &VertexLayout,
    ) -> Result<CoreShaderId, CompileError> {
        if source.is_empty() {
            return Err(CompileError {
                details: "empty shader source".to_string(),
            });
        }
        let id = CoreShaderId(self.next_id.fetch_add(1, Ordering::Relaxed));
        log::info!(
            "[device] built core shader {location} -> {id:?} ({} attributes, stride {})",
            layout.attributes().len(),
            layout.stride()
        );
        Ok(id)
    }

    fn destroy_core_shader(&self, id: CoreShaderId) {
        log::info!("[device] destroyed {id:?}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let device = Arc::new(LoggingDevice::default());
    let bus = SurfaceEventBus::new();
    let manager = ShaderEffectManager::new(device, &bus);

    let blur: EffectLocation = "sandbox:shaders/post/blur.json".parse()?;
    let outline: EffectLocation = "sandbox:shaders/post/outline.json".parse()?;
    let glow: EffectLocation = "sandbox:shaders/post/glow.json".parse()?;
    let lines: EffectLocation = "sandbox:shaders/core/rendertype_lines.json".parse()?;

    let blur_effect = manager.manage(blur.clone());
    let outline_effect = manager.manage_with_init(
        outline.clone(),
        Box::new(|effect| log::info!("outline ready as {:?}", effect.program_id())),
    );
    let glow_effect = manager.manage(glow.clone());
    let lines_shader = manager.manage_core_shader(lines.clone());

    // First reload: glow's source is deliberately absent, so it fails and is
    // logged while the rest of the batch initializes.
    let mut resources = MemoryResourceSource::new();
    resources.insert(blur.clone(), b"{\"passes\": [\"blur\"]}".as_slice());
    resources.insert(outline.clone(), b"{\"passes\": [\"outline\"]}".as_slice());
    resources.insert(lines.clone(), b"{\"vertex\": \"lines\"}".as_slice());
    manager.reload(&resources);

    log::info!(
        "after first reload: blur={:?} outline={:?} glow={:?} lines={:?}",
        blur_effect.init_state(),
        outline_effect.init_state(),
        glow_effect.init_state(),
        lines_shader.init_state()
    );

    // The window shrinks; only initialized members are set up.
    bus.publish(SurfaceEvent::Resized {
        width: 1280,
        height: 720,
    });
    manager.process_events();

    // A resource pack lands and glow appears; the second reload rebuilds the
    // healthy members and recovers the failed one.
    resources.insert(glow.clone(), b"{\"passes\": [\"glow\"]}".as_slice());
    manager.reload(&resources);

    log::info!(
        "after second reload: glow={:?} ({} shaders managed)",
        glow_effect.init_state(),
        manager.effect_count()
    );

    Ok(())
}
