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

//! Reading back live `ID3D12Resource` handles.

use gpudesc_core::{HeapFlags, HeapProperties, NativeResource, QueryError, ResourceDesc};
use windows::Win32::Graphics::Direct3D12::{
    ID3D12Resource, D3D12_HEAP_FLAGS, D3D12_HEAP_PROPERTIES,
};

use super::error::D3d12Error;
use super::raw::{
    heap_properties_from_raw, resource_desc_from_raw, resource_desc_from_raw_lossy,
    RawHeapProperties, RawResourceDesc,
};

/// A borrowed `ID3D12Resource` that a
/// [`ResourceBuilder`](gpudesc_core::ResourceBuilder) can read back.
#[derive(Debug, Clone, Copy)]
pub struct ExistingResource<'a> {
    resource: &'a ID3D12Resource,
}

impl<'a> ExistingResource<'a> {
    /// Wraps a live resource.
    pub fn new(resource: &'a ID3D12Resource) -> Self {
        Self { resource }
    }

    fn query_heap(&self) -> Result<(HeapProperties, HeapFlags), D3d12Error> {
        let mut properties = D3D12_HEAP_PROPERTIES::default();
        let mut flags = D3D12_HEAP_FLAGS::default();

        // SAFETY: both out-pointers refer to live locals for the duration of the call.
        unsafe {
            self.resource
                .GetHeapProperties(Some(&mut properties as *mut _), Some(&mut flags as *mut _))?;
        }

        let raw = RawHeapProperties {
            heap_type: properties.Type.0,
            cpu_page_property: properties.CPUPageProperty.0,
            memory_pool_preference: properties.MemoryPoolPreference.0,
            creation_node_mask: properties.CreationNodeMask,
            visible_node_mask: properties.VisibleNodeMask,
        };
        heap_properties_from_raw(&raw, flags.0)
    }
}

impl NativeResource for ExistingResource<'_> {
    fn desc(&self) -> ResourceDesc {
        // SAFETY: GetDesc only reads the resource's immutable description.
        let native = unsafe { self.resource.GetDesc() };
        let raw = RawResourceDesc::from(&native);

        resource_desc_from_raw(&raw).unwrap_or_else(|e| {
            log::warn!("Resource description partially decoded: {e}");
            resource_desc_from_raw_lossy(&raw)
        })
    }

    fn heap_properties(&self) -> Result<(HeapProperties, HeapFlags), QueryError> {
        self.query_heap().map_err(QueryError::from)
    }
}
