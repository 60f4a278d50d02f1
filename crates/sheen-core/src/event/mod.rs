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

//! Surface events and the channel that carries them.
//!
//! The windowing subsystem publishes [`SurfaceEvent`]s on a
//! [`SurfaceEventBus`]; the shader-effect manager subscribes once at
//! construction and drains its receiver from the render thread. Keeping the
//! bus a constructor dependency (rather than a process-wide global) leaves the
//! manager testable without a live window.

mod bus;

pub use self::bus::SurfaceEventBus;

/// Events describing the output surface the managed effects render to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The output surface's framebuffer changed size.
    Resized {
        /// New framebuffer width in pixels.
        width: u32,
        /// New framebuffer height in pixels.
        height: u32,
    },
}
