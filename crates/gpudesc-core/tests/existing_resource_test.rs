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

use gpudesc_core::{
    BuilderSettings, CpuPageProperty, DsvDimension, Format, HeapFlags, HeapProperties, HeapType,
    MemoryPool, NativeResource, QueryError, RangeClamp, ResourceBuilder, ResourceDesc,
    ResourceDimension, ResourceFlags, RtvDimension, SampleDesc, SrvDimension, TextureLayout,
    ViewRange,
};
use std::cell::Cell;

/// A live resource double that counts the queries made against it.
struct MockResource {
    desc: ResourceDesc,
    heap: Result<(HeapProperties, HeapFlags), QueryError>,
    desc_queries: Cell<u32>,
    heap_queries: Cell<u32>,
}

impl MockResource {
    fn new(desc: ResourceDesc, heap: Result<(HeapProperties, HeapFlags), QueryError>) -> Self {
        Self {
            desc,
            heap,
            desc_queries: Cell::new(0),
            heap_queries: Cell::new(0),
        }
    }
}

impl NativeResource for MockResource {
    fn desc(&self) -> ResourceDesc {
        self.desc_queries.set(self.desc_queries.get() + 1);
        self.desc
    }

    fn heap_properties(&self) -> Result<(HeapProperties, HeapFlags), QueryError> {
        self.heap_queries.set(self.heap_queries.get() + 1);
        self.heap.clone()
    }
}

fn msaa_depth_array() -> ResourceDesc {
    ResourceDesc {
        dimension: ResourceDimension::Texture2D,
        alignment: 65536,
        width: 1920,
        height: 1080,
        depth_or_array_size: 4,
        mip_levels: 1,
        format: Format::R32Typeless,
        sample_desc: SampleDesc {
            count: 4,
            quality: 0,
        },
        layout: TextureLayout::Unknown,
        flags: ResourceFlags::ALLOW_DEPTH_STENCIL,
    }
}

fn custom_heap() -> (HeapProperties, HeapFlags) {
    (
        HeapProperties {
            heap_type: HeapType::Custom,
            cpu_page_property: CpuPageProperty::NotAvailable,
            memory_pool_preference: MemoryPool::L1,
            creation_node_mask: 1,
            visible_node_mask: 1,
        },
        HeapFlags::DENY_BUFFERS | HeapFlags::DENY_NON_RT_DS_TEXTURES,
    )
}

#[test]
fn none_leaves_builder_untouched() {
    let mut builder = ResourceBuilder::new();
    builder.texture_2d(64, 64, Format::R8G8B8A8Unorm, 3, 2);
    let before = builder.clone();

    builder.from_existing_resource(None);

    assert_eq!(builder.desc(), before.desc());
    assert_eq!(builder.heap_properties(), before.heap_properties());
    assert_eq!(builder.heap_flags(), before.heap_flags());
    assert_eq!(builder.view_dimensions(), before.view_dimensions());
}

#[test]
fn copies_description_heap_and_derives_views() {
    let resource = MockResource::new(msaa_depth_array(), Ok(custom_heap()));
    let mut builder = ResourceBuilder::new();

    builder.from_existing_resource(Some(&resource));

    assert_eq!(resource.desc_queries.get(), 1);
    assert_eq!(resource.heap_queries.get(), 1);
    assert_eq!(*builder.desc(), msaa_depth_array());
    assert_eq!(*builder.heap_properties(), custom_heap().0);
    assert_eq!(builder.heap_flags(), custom_heap().1);

    let views = builder.view_dimensions();
    assert_eq!(views.rtv, RtvDimension::Texture2DMs);
    assert_eq!(views.dsv_array, DsvDimension::Texture2DMsArray);
    assert_eq!(views.srv_array, SrvDimension::Texture2DMsArray);

    let dsv = builder.as_depth_stencil_view_array(&ViewRange::new(Format::D32Float));
    assert_eq!(dsv.format, Format::D32Float);
    assert_eq!(dsv.array_size, 4);
}

#[test]
fn failed_heap_query_keeps_stale_views() {
    let resource = MockResource::new(msaa_depth_array(), Err(QueryError::NoHeapProperties));
    let mut builder = ResourceBuilder::new();
    builder.buffer(256).set_heap_type(HeapType::Upload);
    let stale_views = *builder.view_dimensions();

    builder.from_existing_resource(Some(&resource));

    // The description is replaced...
    assert_eq!(*builder.desc(), msaa_depth_array());
    // ...but heap state and derived views still describe the buffer.
    assert_eq!(builder.heap_properties().heap_type, HeapType::Upload);
    assert_eq!(builder.heap_flags(), HeapFlags::NONE);
    assert_eq!(*builder.view_dimensions(), stale_views);
    assert_eq!(builder.view_dimensions().srv, SrvDimension::Buffer);
}

#[test]
fn existing_resource_does_not_reset_settings() {
    let resource = MockResource::new(msaa_depth_array(), Ok(custom_heap()));
    let mut builder = ResourceBuilder::with_settings(BuilderSettings {
        range_clamp: RangeClamp::Saturating,
        ..Default::default()
    });

    builder.from_existing_resource(Some(&resource));

    let rtv = builder.as_color_target_view_array(&ViewRange::default().slices(9, 16));
    assert_eq!(rtv.array_size, 0);
}
