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

//! Managed shader handles and the registry that reloads them.
//!
//! The [`ShaderEffectManager`] owns the membership and drives the two
//! broadcasts every managed shader participates in: rebuilding against a
//! fresh resource source after a reload, and re-deriving size-dependent state
//! after a surface resize. Individual handles track their own three-state
//! lifecycle ([`InitState`]) so a broken shader can sit out broadcasts
//! without affecting its neighbors.

mod core_shader;
mod handle;
mod manager;
mod post_effect;

#[cfg(test)]
pub(crate) mod testing;

pub use self::core_shader::{CoreShaderInitCallback, ManagedCoreShader};
pub use self::handle::{InitState, ManagedShader};
pub use self::manager::ShaderEffectManager;
pub use self::post_effect::{EffectInitCallback, ManagedShaderEffect};
