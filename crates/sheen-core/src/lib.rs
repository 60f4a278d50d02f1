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

//! # Sheen Core
//!
//! Reloadable lifecycle management for GPU shader effects.
//!
//! The crate centers on the [`ShaderEffectManager`]: callers register
//! post-process effects and core shaders by location, the registry keeps them
//! uninitialized until the host's next resource reload builds them, and
//! surface resize events re-derive size-dependent state on every member that
//! built successfully. A shader that fails to compile is logged and parked,
//! never crashing the host or blocking its neighbors.
//!
//! Graphics backends plug in through the [`device::EffectDevice`] seam;
//! resource resolution through [`resource::ResourceSource`]; resize delivery
//! through the [`event::SurfaceEventBus`].

#![warn(missing_docs)]

pub mod device;
pub mod effect;
pub mod error;
pub mod event;
pub mod location;
pub mod resource;
pub mod vertex;

pub use effect::{
    InitState, ManagedCoreShader, ManagedShader, ManagedShaderEffect, ShaderEffectManager,
};
pub use location::EffectLocation;
