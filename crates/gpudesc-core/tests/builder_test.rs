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
    BufferSrvFlags, BufferViewRange, DsvDimension, Format, HeapType, ResourceBuilder,
    ResourceDimension, ResourceFlags, RtvDimension, SrvDimension, ViewRange, MAX_MIP_LEVELS,
};

#[test]
fn buffer_then_projection() {
    let mut builder = ResourceBuilder::new();
    builder.buffer(1 << 20);

    let desc = builder.as_color_target(false);
    assert_eq!(desc.dimension, ResourceDimension::Buffer);
    assert_eq!(desc.width, 1 << 20);
    assert_eq!(builder.view_dimensions().srv, SrvDimension::Buffer);
    assert_eq!(builder.view_dimensions().dsv, DsvDimension::Unsupported);
}

#[test]
fn swapchain_sized_color_target() {
    let mut builder = ResourceBuilder::new();
    builder.texture_2d(256, 256, Format::B8G8R8A8Unorm, 1, 1);

    let rtv = builder.as_color_target_view(Format::Unknown, 0);
    assert_eq!(rtv.view_dimension, RtvDimension::Texture2D);
    assert_eq!(rtv.format, Format::B8G8R8A8Unorm);
    assert_eq!(rtv.mip_slice, 0);
}

#[test]
fn typeless_array_render_target() {
    let mut builder = ResourceBuilder::new();
    builder.texture_2d(256, 256, Format::R16G16Typeless, 4, 1);

    let rtv = builder.as_color_target_view_array(&ViewRange::new(Format::R16G16Float).slices(1, 3));
    assert_eq!(rtv.format, Format::R16G16Float);
    assert_eq!(rtv.array_size, 2);
}

#[test]
fn one_dimensional_textures_have_no_depth_views() {
    let mut builder = ResourceBuilder::new();
    builder.texture_1d(1024, Format::R32Typeless, 4, 1);

    assert_eq!(
        builder.as_depth_stencil_view(Format::D32Float, 0).view_dimension,
        DsvDimension::Unsupported
    );
    assert_eq!(
        builder
            .as_depth_stencil_view_array(&ViewRange::new(Format::D32Float))
            .view_dimension,
        DsvDimension::Unsupported
    );
}

#[test]
fn volume_texture_views() {
    let mut builder = ResourceBuilder::new();
    builder.texture_3d(32, 32, 32, Format::R11G11B10Float, 6);

    let srv = builder.as_shader_resource_view(Format::Unknown, 0, MAX_MIP_LEVELS, 0.0);
    assert_eq!(srv.view_dimension, SrvDimension::Texture3D);
    assert_eq!(srv.texture_range().unwrap().mip_levels, 6);

    let rtv = builder.as_color_target_view(Format::Unknown, 1);
    assert_eq!(rtv.view_dimension, RtvDimension::Texture3D);
    assert_eq!(rtv.mip_slice, 1);
}

#[test]
fn constructor_calls_do_not_leak_state() {
    let mut reused = ResourceBuilder::new();
    reused
        .texture_2d(4096, 4096, Format::R24G8Typeless, 16, 12)
        .set_heap_type(HeapType::Custom)
        .set_format(Format::D24UnormS8Uint);
    reused.texture_1d(8, Format::R8Unorm, 1, 1);

    let mut fresh = ResourceBuilder::new();
    fresh.texture_1d(8, Format::R8Unorm, 1, 1);

    assert_eq!(reused.desc(), fresh.desc());
    assert_eq!(reused.heap_properties(), fresh.heap_properties());
    assert_eq!(reused.view_dimensions(), fresh.view_dimensions());
}

#[test]
fn raw_classification_of_buffer_views() {
    let mut builder = ResourceBuilder::new();
    builder.buffer(400);

    let raw = builder.as_buffer_resource_view(&BufferViewRange {
        first_element: 0,
        num_elements: 100,
        byte_stride: 0,
        format: Format::Unknown,
    });
    assert_eq!(raw.buffer_range().unwrap().flags, BufferSrvFlags::RAW);

    let structured = builder.as_buffer_resource_view(&BufferViewRange {
        first_element: 0,
        num_elements: 100,
        byte_stride: 16,
        format: Format::Unknown,
    });
    assert_eq!(structured.buffer_range().unwrap().flags, BufferSrvFlags::NONE);
}

#[test]
fn depth_target_for_shadow_map() {
    let mut builder = ResourceBuilder::new();
    builder.texture_2d(2048, 2048, Format::R32Typeless, 1, 1);

    let desc = builder.as_depth_target(true);
    assert_eq!(desc.flags, ResourceFlags::ALLOW_DEPTH_STENCIL);

    let dsv = builder.as_depth_stencil_view(Format::D32Float, 0);
    assert_eq!(dsv.format, Format::D32Float);
    assert_eq!(dsv.view_dimension, DsvDimension::Texture2D);

    let srv = builder.as_shader_resource_view(Format::R32Float, 0, 1, 0.0);
    assert_eq!(srv.format, Format::R32Float);
    assert_eq!(srv.view_dimension, SrvDimension::Texture2D);
    assert_eq!(srv.texture_range().unwrap().mip_levels, 1);
}
