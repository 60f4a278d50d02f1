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

//! Vertex layout descriptors for core shaders.
//!
//! A [`VertexLayout`] is an opaque descriptor handed through to the
//! [`EffectDevice`](crate::device::EffectDevice) when a core shader is built;
//! the manager never interprets it beyond supplying
//! [`VertexLayout::default`] when the caller omits one.

/// The data format of a single vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexElementFormat {
    /// Two 32-bit floating point components.
    Float32x2,
    /// Three 32-bit floating point components.
    Float32x3,
    /// Four 8-bit unsigned integer components normalized to `[0.0, 1.0]`.
    Unorm8x4,
    /// Two 16-bit signed integer components.
    Sint16x2,
    /// Four 8-bit signed integer components normalized to `[-1.0, 1.0]`.
    Snorm8x4,
}

impl VertexElementFormat {
    /// The size of one element of this format, in bytes.
    pub fn byte_size(self) -> u32 {
        match self {
            VertexElementFormat::Float32x2 => 8,
            VertexElementFormat::Float32x3 => 12,
            VertexElementFormat::Unorm8x4 => 4,
            VertexElementFormat::Sint16x2 => 4,
            VertexElementFormat::Snorm8x4 => 4,
        }
    }
}

/// The shader input a vertex attribute feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    /// Model-space vertex position.
    Position,
    /// Per-vertex tint color.
    Color,
    /// Primary texture coordinates.
    Texture,
    /// Overlay texture coordinates (damage / flash overlays).
    Overlay,
    /// Light-map texture coordinates.
    Light,
    /// Vertex normal.
    Normal,
}

/// A single attribute within a vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// The shader input this attribute feeds.
    pub semantic: VertexSemantic,
    /// The format of the attribute's data.
    pub format: VertexElementFormat,
}

/// Describes the memory layout of a single vertex.
///
/// Attribute offsets follow declaration order with no implicit padding; the
/// stride is the sum of the attribute sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Creates a layout from its attributes, in declaration order.
    pub fn new(attributes: Vec<VertexAttribute>) -> Self {
        Self { attributes }
    }

    /// The attributes of this layout, in declaration order.
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// The byte offset of the attribute at `index` from the start of a vertex.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn offset_of(&self, index: usize) -> u32 {
        assert!(
            index < self.attributes.len(),
            "attribute index {index} out of bounds for layout with {} attributes",
            self.attributes.len()
        );
        self.attributes[..index]
            .iter()
            .map(|attribute| attribute.format.byte_size())
            .sum()
    }

    /// The byte distance between consecutive vertices.
    pub fn stride(&self) -> u32 {
        self.attributes
            .iter()
            .map(|attribute| attribute.format.byte_size())
            .sum()
    }

    /// The standard full-featured entity layout: position, color, texture,
    /// overlay, light, normal.
    pub fn position_color_texture_overlay_light_normal() -> Self {
        Self::new(vec![
            VertexAttribute {
                semantic: VertexSemantic::Position,
                format: VertexElementFormat::Float32x3,
            },
            VertexAttribute {
                semantic: VertexSemantic::Color,
                format: VertexElementFormat::Unorm8x4,
            },
            VertexAttribute {
                semantic: VertexSemantic::Texture,
                format: VertexElementFormat::Float32x2,
            },
            VertexAttribute {
                semantic: VertexSemantic::Overlay,
                format: VertexElementFormat::Sint16x2,
            },
            VertexAttribute {
                semantic: VertexSemantic::Light,
                format: VertexElementFormat::Sint16x2,
            },
            VertexAttribute {
                semantic: VertexSemantic::Normal,
                format: VertexElementFormat::Snorm8x4,
            },
        ])
    }
}

impl Default for VertexLayout {
    /// The documented default for core shaders registered without an explicit
    /// layout: [`VertexLayout::position_color_texture_overlay_light_normal`].
    fn default() -> Self {
        Self::position_color_texture_overlay_light_normal()
    }
}
