// Copyright 2025 eraflo
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

//! Defines the resource description: the shape of a buffer or texture.

use crate::gpudesc_bitflags;
use crate::resource::Format;

/// The dimensionality of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ResourceDimension {
    /// The zero state of an unconfigured description.
    #[default]
    Unknown = 0,
    /// A linear block of bytes.
    Buffer = 1,
    /// A one-dimensional texture, optionally arrayed.
    Texture1D = 2,
    /// A two-dimensional texture, optionally arrayed and/or multisampled.
    Texture2D = 3,
    /// A three-dimensional (volume) texture.
    Texture3D = 4,
}

impl ResourceDimension {
    /// Returns the native `D3D12_RESOURCE_DIMENSION` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `D3D12_RESOURCE_DIMENSION` value back, if known.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::Buffer),
            2 => Some(Self::Texture1D),
            3 => Some(Self::Texture2D),
            4 => Some(Self::Texture3D),
            _ => None,
        }
    }
}

/// The memory arrangement of texels in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum TextureLayout {
    /// Driver-chosen layout.
    #[default]
    Unknown = 0,
    /// Rows stored contiguously; required for buffers.
    RowMajor = 1,
    /// 64KB tiles with an adapter-specific swizzle.
    UndefinedSwizzle64Kb = 2,
    /// 64KB tiles with the standard swizzle.
    StandardSwizzle64Kb = 3,
}

impl TextureLayout {
    /// Returns the native `D3D12_TEXTURE_LAYOUT` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `D3D12_TEXTURE_LAYOUT` value back, if known.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::RowMajor),
            2 => Some(Self::UndefinedSwizzle64Kb),
            3 => Some(Self::StandardSwizzle64Kb),
            _ => None,
        }
    }
}

/// Multisampling parameters of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleDesc {
    /// Samples per pixel. Zero only in the unconfigured state.
    pub count: u32,
    /// Implementation-defined quality level.
    pub quality: u32,
}

impl SampleDesc {
    /// One sample per pixel, quality zero.
    pub const SINGLE: Self = Self {
        count: 1,
        quality: 0,
    };
}

gpudesc_bitflags! {
    /// Usage permissions baked into a resource at creation time.
    pub struct ResourceFlags: u32 {
        /// No special usage.
        const NONE = 0;
        /// The resource can be bound as a render target.
        const ALLOW_RENDER_TARGET = 0x1;
        /// The resource can be bound as a depth-stencil target.
        const ALLOW_DEPTH_STENCIL = 0x2;
        /// The resource can be bound for unordered (read/write) access.
        const ALLOW_UNORDERED_ACCESS = 0x4;
        /// The resource can never be read through a shader resource view.
        const DENY_SHADER_RESOURCE = 0x8;
        /// The resource can be shared across adapters.
        const ALLOW_CROSS_ADAPTER = 0x10;
        /// The resource can be accessed by multiple queues simultaneously.
        const ALLOW_SIMULTANEOUS_ACCESS = 0x20;
        /// The resource is only used as a video decode reference.
        const VIDEO_DECODE_REFERENCE_ONLY = 0x40;
    }
}

/// The shape of a GPU resource: dimension, extent, format and usage.
///
/// The meaning of the extent fields depends on [`ResourceDimension`]:
///
/// | dimension | `width` | `height` | `depth_or_array_size` |
/// |---|---|---|---|
/// | `Buffer` | size in bytes | unused | unused |
/// | `Texture1D` | pixels | 1 | array slices |
/// | `Texture2D` | pixels | pixels | array slices |
/// | `Texture3D` | pixels | pixels | depth in pixels |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDesc {
    /// The dimensionality of the resource.
    pub dimension: ResourceDimension,
    /// Placement alignment in bytes. Zero selects the API default.
    pub alignment: u64,
    /// Byte size for buffers, pixel width for textures.
    pub width: u64,
    /// Pixel height.
    pub height: u32,
    /// Depth for 3D textures, array slice count otherwise.
    pub depth_or_array_size: u16,
    /// Number of mip levels. Zero requests the full chain from the API.
    pub mip_levels: u16,
    /// Element format. May be typeless.
    pub format: Format,
    /// Multisampling parameters.
    pub sample_desc: SampleDesc,
    /// Texel arrangement in memory.
    pub layout: TextureLayout,
    /// Usage permissions.
    pub flags: ResourceFlags,
}
