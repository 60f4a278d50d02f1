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

//! Mock collaborators shared by the effect tests.

use crate::device::{CoreShaderId, EffectDevice, PostEffectId};
use crate::error::CompileError;
use crate::location::EffectLocation;
use crate::vertex::VertexLayout;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A device that mints sequential ids and records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingDevice {
    next_id: AtomicUsize,
    created_post_effects: AtomicUsize,
    created_core_shaders: AtomicUsize,
    destroyed_post_effects: Mutex<Vec<PostEffectId>>,
    destroyed_core_shaders: Mutex<Vec<CoreShaderId>>,
    resizes: Mutex<Vec<(PostEffectId, u32, u32)>>,
    core_shader_layouts: Mutex<Vec<VertexLayout>>,
}

impl RecordingDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn post_effects_created(&self) -> usize {
        self.created_post_effects.load(Ordering::SeqCst)
    }

    pub(crate) fn core_shaders_created(&self) -> usize {
        self.created_core_shaders.load(Ordering::SeqCst)
    }

    pub(crate) fn destroyed_post_effects(&self) -> Vec<PostEffectId> {
        self.destroyed_post_effects.lock().unwrap().clone()
    }

    pub(crate) fn destroyed_core_shaders(&self) -> Vec<CoreShaderId> {
        self.destroyed_core_shaders.lock().unwrap().clone()
    }

    pub(crate) fn resizes(&self) -> Vec<(PostEffectId, u32, u32)> {
        self.resizes.lock().unwrap().clone()
    }

    pub(crate) fn core_shader_layouts(&self) -> Vec<VertexLayout> {
        self.core_shader_layouts.lock().unwrap().clone()
    }
}

impl EffectDevice for RecordingDevice {
    fn create_post_effect(
        &self,
        _location: &EffectLocation,
        _source: &[u8],
    ) -> Result<PostEffectId, CompileError> {
        self.created_post_effects.fetch_add(1, Ordering::SeqCst);
        Ok(PostEffectId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn resize_post_effect(&self, id: PostEffectId, width: u32, height: u32) {
        self.resizes.lock().unwrap().push((id, width, height));
    }

    fn destroy_post_effect(&self, id: PostEffectId) {
        self.destroyed_post_effects.lock().unwrap().push(id);
    }

    fn create_core_shader(
        &self,
        _location: &EffectLocation,
        _source: &[u8],
        layout: &VertexLayout,
    ) -> Result<CoreShaderId, CompileError> {
        self.created_core_shaders.fetch_add(1, Ordering::SeqCst);
        self.core_shader_layouts.lock().unwrap().push(layout.clone());
        Ok(CoreShaderId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn destroy_core_shader(&self, id: CoreShaderId) {
        self.destroyed_core_shaders.lock().unwrap().push(id);
    }
}

/// A device that rejects every program with the given compiler message.
#[derive(Debug)]
struct FailingDevice {
    details: String,
}

impl EffectDevice for FailingDevice {
    fn create_post_effect(
        &self,
        _location: &EffectLocation,
        _source: &[u8],
    ) -> Result<PostEffectId, CompileError> {
        Err(CompileError {
            details: self.details.clone(),
        })
    }

    fn resize_post_effect(&self, _id: PostEffectId, _width: u32, _height: u32) {}

    fn destroy_post_effect(&self, _id: PostEffectId) {}

    fn create_core_shader(
        &self,
        _location: &EffectLocation,
        _source: &[u8],
        _layout: &VertexLayout,
    ) -> Result<CoreShaderId, CompileError> {
        Err(CompileError {
            details: self.details.clone(),
        })
    }

    fn destroy_core_shader(&self, _id: CoreShaderId) {}
}

pub(crate) fn failing_device(details: &str) -> Arc<dyn EffectDevice> {
    Arc::new(FailingDevice {
        details: details.to_string(),
    })
}
