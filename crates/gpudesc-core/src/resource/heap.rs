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

//! Placement hints: which heap a resource is intended to live in.

use crate::gpudesc_bitflags;

/// The kind of heap a resource is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum HeapType {
    /// Not chosen yet. Buffers start in this state and the caller is
    /// expected to pick a heap before creating the resource.
    #[default]
    Unset = 0,
    /// Device-local memory, no CPU access.
    Default = 1,
    /// CPU-writable memory for uploads.
    Upload = 2,
    /// CPU-readable memory for readbacks.
    Readback = 3,
    /// Explicit page property and memory pool.
    Custom = 4,
}

impl HeapType {
    /// Returns the native `D3D12_HEAP_TYPE` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `D3D12_HEAP_TYPE` value back, if known.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unset),
            1 => Some(Self::Default),
            2 => Some(Self::Upload),
            3 => Some(Self::Readback),
            4 => Some(Self::Custom),
            _ => None,
        }
    }
}

/// CPU page property of a custom heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum CpuPageProperty {
    /// Implied by the heap type.
    #[default]
    Unknown = 0,
    /// No CPU access.
    NotAvailable = 1,
    /// Write-combined CPU access.
    WriteCombine = 2,
    /// Write-back (cached) CPU access.
    WriteBack = 3,
}

impl CpuPageProperty {
    /// Returns the native `D3D12_CPU_PAGE_PROPERTY` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `D3D12_CPU_PAGE_PROPERTY` value back, if known.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::NotAvailable),
            2 => Some(Self::WriteCombine),
            3 => Some(Self::WriteBack),
            _ => None,
        }
    }
}

/// Memory pool preference of a custom heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum MemoryPool {
    /// Implied by the heap type.
    #[default]
    Unknown = 0,
    /// System memory.
    L0 = 1,
    /// Video memory (discrete adapters only).
    L1 = 2,
}

impl MemoryPool {
    /// Returns the native `D3D12_MEMORY_POOL` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `D3D12_MEMORY_POOL` value back, if known.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::L0),
            2 => Some(Self::L1),
            _ => None,
        }
    }
}

/// Where and how a resource's heap is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapProperties {
    /// The heap kind.
    pub heap_type: HeapType,
    /// CPU page property, only meaningful for [`HeapType::Custom`].
    pub cpu_page_property: CpuPageProperty,
    /// Memory pool, only meaningful for [`HeapType::Custom`].
    pub memory_pool_preference: MemoryPool,
    /// Node the heap is created on (multi-adapter); zero means node 0.
    pub creation_node_mask: u32,
    /// Nodes the heap is visible from; zero means node 0.
    pub visible_node_mask: u32,
}

gpudesc_bitflags! {
    /// Options of the heap a resource lives in.
    pub struct HeapFlags: u32 {
        /// No options.
        const NONE = 0;
        /// The heap can be shared across processes.
        const SHARED = 0x1;
        /// The heap cannot hold buffers.
        const DENY_BUFFERS = 0x4;
        /// The heap can hold swapchain surfaces.
        const ALLOW_DISPLAY = 0x8;
        /// The heap can be shared across adapters.
        const SHARED_CROSS_ADAPTER = 0x20;
        /// The heap cannot hold render-target or depth-stencil textures.
        const DENY_RT_DS_TEXTURES = 0x40;
        /// The heap cannot hold textures other than render targets or depth-stencils.
        const DENY_NON_RT_DS_TEXTURES = 0x80;
        /// The heap holds protected content.
        const HARDWARE_PROTECTED = 0x100;
        /// The heap supports write watching.
        const ALLOW_WRITE_WATCH = 0x200;
        /// The heap supports cross-adapter shader atomics.
        const ALLOW_SHADER_ATOMICS = 0x400;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heap_is_unset() {
        let heap = HeapProperties::default();
        assert_eq!(heap.heap_type, HeapType::Unset);
        assert_eq!(heap.cpu_page_property, CpuPageProperty::Unknown);
        assert_eq!(heap.memory_pool_preference, MemoryPool::Unknown);
        assert_eq!((heap.creation_node_mask, heap.visible_node_mask), (0, 0));
    }

    #[test]
    fn heap_type_raw_values() {
        assert_eq!(HeapType::Default.to_raw(), 1);
        assert_eq!(HeapType::Custom.to_raw(), 4);
        assert_eq!(HeapType::from_raw(3), Some(HeapType::Readback));
        assert_eq!(HeapType::from_raw(9), None);
        assert_eq!(CpuPageProperty::from_raw(3), Some(CpuPageProperty::WriteBack));
        assert_eq!(MemoryPool::from_raw(2), Some(MemoryPool::L1));
    }

    #[test]
    fn heap_flags_debug() {
        let flags = HeapFlags::DENY_BUFFERS | HeapFlags::ALLOW_DISPLAY;
        assert_eq!(flags.bits(), 0xC);
        assert_eq!(
            format!("{flags:?}"),
            "HeapFlags { DENY_BUFFERS | ALLOW_DISPLAY }"
        );
    }
}
