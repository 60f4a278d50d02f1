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

//! The GPU collaborator seam: backend program construction and teardown.

use crate::error::CompileError;
use crate::location::EffectLocation;
use crate::vertex::VertexLayout;
use std::fmt::Debug;

/// Identifies a post-process effect owned by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostEffectId(pub usize);

/// Identifies a core (vertex + fragment) shader owned by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreShaderId(pub usize);

/// Builds and owns backend shader programs.
///
/// This trait is the boundary to the actual graphics backend. Shader
/// compilation, render-target allocation, and draw-call plumbing all live
/// behind it; managed handles only ever address programs through the returned
/// ids. Implementations are expected to tolerate destroy calls during a
/// rebuild (an initialized handle releases its previous program before asking
/// for a new one).
pub trait EffectDevice: Debug + Send + Sync {
    /// Builds a post-process effect from raw shader source.
    /// ## Arguments
    /// * `location` - The logical location the source was resolved from, for labeling and diagnostics.
    /// * `source` - The raw shader source or bytecode.
    /// ## Returns
    /// The id of the created effect, or a `CompileError` if the backend rejects the source.
    fn create_post_effect(
        &self,
        location: &EffectLocation,
        source: &[u8],
    ) -> Result<PostEffectId, CompileError>;

    /// Re-derives the size-dependent state of a post-process effect, such as
    /// framebuffer-sized intermediate targets.
    /// ## Arguments
    /// * `id` - The effect to resize.
    /// * `width` - New framebuffer width in pixels.
    /// * `height` - New framebuffer height in pixels.
    fn resize_post_effect(&self, id: PostEffectId, width: u32, height: u32);

    /// Releases the backend resources of a post-process effect.
    fn destroy_post_effect(&self, id: PostEffectId);

    /// Builds a core shader bound to a vertex layout.
    /// ## Arguments
    /// * `location` - The logical location the source was resolved from.
    /// * `source` - The raw shader source or bytecode.
    /// * `layout` - The vertex attribute layout the program binds to.
    /// ## Returns
    /// The id of the created shader, or a `CompileError` if the backend rejects the source.
    fn create_core_shader(
        &self,
        location: &EffectLocation,
        source: &[u8],
        layout: &VertexLayout,
    ) -> Result<CoreShaderId, CompileError>;

    /// Releases the backend resources of a core shader.
    fn destroy_core_shader(&self, id: CoreShaderId);
}
