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

//! Decoding of native Direct3D 12 values into the core model.
//!
//! The `windows` crate represents every D3D12 enum and flag set as an `i32`
//! newtype. The structures here hold those integers so the decoding rules
//! can be shared by the live-resource adapter and exercised on any platform.

use gpudesc_core::{
    CpuPageProperty, Format, HeapFlags, HeapProperties, HeapType, MemoryPool, ResourceDesc,
    ResourceDimension, ResourceFlags, SampleDesc, TextureLayout,
};

use super::error::D3d12Error;

/// A `D3D12_RESOURCE_DESC` with its enums as raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawResourceDesc {
    /// `D3D12_RESOURCE_DIMENSION`.
    pub dimension: i32,
    /// Placement alignment.
    pub alignment: u64,
    /// Width in bytes or pixels.
    pub width: u64,
    /// Height in pixels.
    pub height: u32,
    /// Depth or array size.
    pub depth_or_array_size: u16,
    /// Mip level count.
    pub mip_levels: u16,
    /// `DXGI_FORMAT`.
    pub format: i32,
    /// `DXGI_SAMPLE_DESC::Count`.
    pub sample_count: u32,
    /// `DXGI_SAMPLE_DESC::Quality`.
    pub sample_quality: u32,
    /// `D3D12_TEXTURE_LAYOUT`.
    pub layout: i32,
    /// `D3D12_RESOURCE_FLAGS`.
    pub flags: i32,
}

/// A `D3D12_HEAP_PROPERTIES` with its enums as raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawHeapProperties {
    /// `D3D12_HEAP_TYPE`.
    pub heap_type: i32,
    /// `D3D12_CPU_PAGE_PROPERTY`.
    pub cpu_page_property: i32,
    /// `D3D12_MEMORY_POOL`.
    pub memory_pool_preference: i32,
    /// Creation node mask.
    pub creation_node_mask: u32,
    /// Visible node mask.
    pub visible_node_mask: u32,
}

fn unsigned(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}

fn decode<T>(
    kind: &'static str,
    raw: i32,
    from_raw: fn(u32) -> Option<T>,
) -> Result<T, D3d12Error> {
    unsigned(raw)
        .and_then(from_raw)
        .ok_or_else(|| D3d12Error::unknown(kind, raw))
}

/// Decodes a native resource description.
///
/// # Errors
/// * `D3d12Error::UnknownValue` - If the dimension, format or layout has no
///   counterpart in the core model (e.g. a video format).
pub fn resource_desc_from_raw(raw: &RawResourceDesc) -> Result<ResourceDesc, D3d12Error> {
    Ok(ResourceDesc {
        dimension: decode("resource dimension", raw.dimension, ResourceDimension::from_raw)?,
        format: decode("format", raw.format, Format::from_raw)?,
        layout: decode("texture layout", raw.layout, TextureLayout::from_raw)?,
        ..resource_desc_from_raw_lossy(raw)
    })
}

/// Decodes a native resource description, replacing unknown enum values with
/// their zero variant. Flag bits are always kept.
pub fn resource_desc_from_raw_lossy(raw: &RawResourceDesc) -> ResourceDesc {
    ResourceDesc {
        dimension: unsigned(raw.dimension)
            .and_then(ResourceDimension::from_raw)
            .unwrap_or_default(),
        alignment: raw.alignment,
        width: raw.width,
        height: raw.height,
        depth_or_array_size: raw.depth_or_array_size,
        mip_levels: raw.mip_levels,
        format: unsigned(raw.format)
            .and_then(Format::from_raw)
            .unwrap_or_default(),
        sample_desc: SampleDesc {
            count: raw.sample_count,
            quality: raw.sample_quality,
        },
        layout: unsigned(raw.layout)
            .and_then(TextureLayout::from_raw)
            .unwrap_or_default(),
        flags: ResourceFlags::from_bits_retain(raw.flags as u32),
    }
}

/// Decodes native heap properties and heap flags.
///
/// # Errors
/// * `D3d12Error::UnknownValue` - If the heap type, page property or memory
///   pool has no counterpart in the core model.
pub fn heap_properties_from_raw(
    raw: &RawHeapProperties,
    heap_flags: i32,
) -> Result<(HeapProperties, HeapFlags), D3d12Error> {
    let properties = HeapProperties {
        heap_type: decode("heap type", raw.heap_type, HeapType::from_raw)?,
        cpu_page_property: decode(
            "CPU page property",
            raw.cpu_page_property,
            CpuPageProperty::from_raw,
        )?,
        memory_pool_preference: decode(
            "memory pool",
            raw.memory_pool_preference,
            MemoryPool::from_raw,
        )?,
        creation_node_mask: raw.creation_node_mask,
        visible_node_mask: raw.visible_node_mask,
    };

    Ok((properties, HeapFlags::from_bits_retain(heap_flags as u32)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_target_desc() -> RawResourceDesc {
        RawResourceDesc {
            dimension: 3,
            alignment: 0,
            width: 1920,
            height: 1080,
            depth_or_array_size: 1,
            mip_levels: 1,
            format: 28,
            sample_count: 1,
            sample_quality: 0,
            layout: 0,
            flags: 0x1 | 0x4,
        }
    }

    #[test]
    fn decodes_texture_description() {
        let desc = resource_desc_from_raw(&render_target_desc()).unwrap();
        assert_eq!(desc.dimension, ResourceDimension::Texture2D);
        assert_eq!(desc.format, Format::R8G8B8A8Unorm);
        assert_eq!((desc.width, desc.height), (1920, 1080));
        assert_eq!(desc.sample_desc, SampleDesc::SINGLE);
        assert_eq!(
            desc.flags,
            ResourceFlags::ALLOW_RENDER_TARGET | ResourceFlags::ALLOW_UNORDERED_ACCESS
        );
    }

    #[test]
    fn video_format_is_rejected() {
        let raw = RawResourceDesc {
            format: 103, // DXGI_FORMAT_NV12
            ..render_target_desc()
        };
        let err = resource_desc_from_raw(&raw).unwrap_err();
        assert!(matches!(
            err,
            D3d12Error::UnknownValue {
                kind: "format",
                raw: 103
            }
        ));

        let lossy = resource_desc_from_raw_lossy(&raw);
        assert_eq!(lossy.format, Format::Unknown);
        assert_eq!(lossy.dimension, ResourceDimension::Texture2D);
    }

    #[test]
    fn negative_values_are_unknown() {
        let raw = RawResourceDesc {
            dimension: -1,
            ..render_target_desc()
        };
        assert!(resource_desc_from_raw(&raw).is_err());
    }

    #[test]
    fn decodes_heap_properties() {
        let raw = RawHeapProperties {
            heap_type: 1,
            cpu_page_property: 0,
            memory_pool_preference: 0,
            creation_node_mask: 1,
            visible_node_mask: 1,
        };
        let (properties, flags) = heap_properties_from_raw(&raw, 0x44).unwrap();
        assert_eq!(properties.heap_type, HeapType::Default);
        assert_eq!(properties.creation_node_mask, 1);
        assert_eq!(flags, HeapFlags::DENY_BUFFERS | HeapFlags::DENY_RT_DS_TEXTURES);
    }

    #[test]
    fn unknown_heap_type_is_rejected() {
        let raw = RawHeapProperties {
            heap_type: 5, // D3D12_HEAP_TYPE_GPU_UPLOAD
            ..Default::default()
        };
        assert!(matches!(
            heap_properties_from_raw(&raw, 0),
            Err(D3d12Error::UnknownValue {
                kind: "heap type",
                ..
            })
        ));
    }
}
