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

//! The resource descriptor builder.
//!
//! [`ResourceBuilder`] holds one resource shape at a time. A shape constructor
//! ([`buffer`](ResourceBuilder::buffer), [`texture_2d`](ResourceBuilder::texture_2d), ...)
//! resets the builder and describes a new resource; the `as_*` projections
//! then produce the resource description and view descriptors to hand to
//! the graphics API, without modifying the builder.
//!
//! ```
//! use gpudesc_core::{Format, RtvDimension, ResourceBuilder, ViewRange};
//!
//! let mut builder = ResourceBuilder::new();
//! builder.texture_2d(1280, 720, Format::R8G8B8A8Typeless, 4, 1);
//!
//! let desc = builder.as_color_target(false);
//! let rtv = builder.as_color_target_view_array(
//!     &ViewRange::new(Format::R8G8B8A8UnormSrgb).slices(1, 3),
//! );
//! assert_eq!(desc.depth_or_array_size, 4);
//! assert_eq!(rtv.view_dimension, RtvDimension::Texture2DArray);
//! assert_eq!(rtv.array_size, 2);
//! ```

use crate::native::NativeResource;
use crate::resource::{
    BufferSrvFlags, BufferSrvRange, BufferViewRange, DepthStencilViewDesc, DsvFlags, Format,
    HeapFlags, HeapProperties, HeapType, RenderTargetViewDesc, ResourceDesc, ResourceDimension,
    ResourceFlags, SampleDesc, ShaderResourceViewDesc, SrvDimension, SrvRange, TextureSrvRange,
    ViewDimensions, ViewRange, DEFAULT_SHADER_4_COMPONENT_MAPPING,
};
use crate::settings::BuilderSettings;

/// Builds resource descriptions and the view descriptors that match them.
///
/// The builder is a plain value: cheap to copy, independent of any device,
/// and safe to use from any thread that owns it.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    desc: ResourceDesc,
    heap_properties: HeapProperties,
    heap_flags: HeapFlags,
    views: ViewDimensions,
    settings: BuilderSettings,
}

impl ResourceBuilder {
    /// Creates a builder in the all-zero state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder in the all-zero state with the given settings.
    pub fn with_settings(settings: BuilderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The current resource description.
    pub fn desc(&self) -> &ResourceDesc {
        &self.desc
    }

    /// The current heap properties.
    pub fn heap_properties(&self) -> &HeapProperties {
        &self.heap_properties
    }

    /// The current heap flags.
    pub fn heap_flags(&self) -> HeapFlags {
        self.heap_flags
    }

    /// The view dimensions derived by the last successful shape definition.
    pub fn view_dimensions(&self) -> &ViewDimensions {
        &self.views
    }

    /// The settings this builder applies.
    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    // --- Shape constructors ---

    /// Reads the description and heap placement of a live resource.
    ///
    /// `None` leaves the builder untouched. Otherwise the description is
    /// copied first; if the heap query then fails, the heap state and the
    /// view dimensions keep the values they had before this call.
    pub fn from_existing_resource(&mut self, resource: Option<&dyn NativeResource>) -> &mut Self {
        let Some(resource) = resource else {
            log::debug!("No native resource given, builder left unchanged.");
            return self;
        };

        self.desc = resource.desc();

        match resource.heap_properties() {
            Ok((properties, flags)) => {
                self.heap_properties = properties;
                self.heap_flags = flags;
                self.build_view_dimensions();
            }
            Err(e) => {
                log::warn!(
                    "Heap properties of existing {:?} resource unavailable, view dimensions not updated: {}",
                    self.desc.dimension,
                    e
                );
            }
        }

        self
    }

    /// Describes a buffer of `byte_width` bytes.
    ///
    /// All other geometry is zero and the heap type is left
    /// [`HeapType::Unset`]; choose one with [`set_heap_type`](Self::set_heap_type).
    pub fn buffer(&mut self, byte_width: u64) -> &mut Self {
        self.reset();

        self.desc.width = byte_width;
        self.desc.dimension = ResourceDimension::Buffer;

        self.build_view_dimensions();
        log::trace!("Configured buffer of {byte_width} bytes.");

        self
    }

    /// Describes a 1D texture with `array_size` slices of `mip_levels` mips.
    pub fn texture_1d(
        &mut self,
        width: u64,
        format: Format,
        array_size: u16,
        mip_levels: u16,
    ) -> &mut Self {
        self.reset_texture(ResourceDimension::Texture1D, format);

        self.desc.width = width;
        self.desc.height = 1;
        self.desc.depth_or_array_size = array_size;
        self.desc.mip_levels = mip_levels;

        self.build_view_dimensions();
        log::trace!("Configured {format:?} 1D texture {width} x{array_size}, {mip_levels} mips.");

        self
    }

    /// Describes a 2D texture with `array_size` slices of `mip_levels` mips.
    pub fn texture_2d(
        &mut self,
        width: u64,
        height: u32,
        format: Format,
        array_size: u16,
        mip_levels: u16,
    ) -> &mut Self {
        self.reset_texture(ResourceDimension::Texture2D, format);

        self.desc.width = width;
        self.desc.height = height;
        self.desc.depth_or_array_size = array_size;
        self.desc.mip_levels = mip_levels;

        self.build_view_dimensions();
        log::trace!(
            "Configured {format:?} 2D texture {width}x{height} x{array_size}, {mip_levels} mips."
        );

        self
    }

    /// Describes a 3D texture of `depth` slices with `mip_levels` mips.
    ///
    /// Volume textures have no separate array dimension: `depth` is stored in
    /// `depth_or_array_size`.
    pub fn texture_3d(
        &mut self,
        width: u64,
        height: u32,
        depth: u16,
        format: Format,
        mip_levels: u16,
    ) -> &mut Self {
        self.reset_texture(ResourceDimension::Texture3D, format);

        self.desc.width = width;
        self.desc.height = height;
        self.desc.depth_or_array_size = depth;
        self.desc.mip_levels = mip_levels;

        self.build_view_dimensions();
        log::trace!(
            "Configured {format:?} 3D texture {width}x{height}x{depth}, {mip_levels} mips."
        );

        self
    }

    // --- Mutators ---

    /// Replaces the resource format. View dimensions do not depend on the
    /// format and are left as they are.
    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.desc.format = format;
        self
    }

    /// Replaces the heap type.
    pub fn set_heap_type(&mut self, heap_type: HeapType) -> &mut Self {
        self.heap_properties.heap_type = heap_type;
        self
    }

    // --- Resource projections ---

    /// Returns the description with render target usage (and unordered
    /// access if `allow_uav`). Existing flags are replaced.
    ///
    /// Whether the dimension can be a render target is not checked.
    pub fn as_color_target(&self, allow_uav: bool) -> ResourceDesc {
        let mut desc = self.desc;
        desc.flags = ResourceFlags::ALLOW_RENDER_TARGET;

        if allow_uav {
            desc.flags |= ResourceFlags::ALLOW_UNORDERED_ACCESS;
        }

        desc
    }

    /// Returns the description with depth-stencil usage. When `allow_srv` is
    /// false the resource is additionally denied shader resource access.
    pub fn as_depth_target(&self, allow_srv: bool) -> ResourceDesc {
        let mut desc = self.desc;
        desc.flags = ResourceFlags::ALLOW_DEPTH_STENCIL;

        if !allow_srv {
            desc.flags |= ResourceFlags::DENY_SHADER_RESOURCE;
        }

        desc
    }

    // --- View projections ---

    /// Returns a single-slice render target view of mip `base_mip`.
    ///
    /// `view_format` is only used when the resource format is typeless.
    pub fn as_color_target_view(&self, view_format: Format, base_mip: u32) -> RenderTargetViewDesc {
        RenderTargetViewDesc {
            format: self.view_format(view_format),
            view_dimension: self.views.rtv,
            mip_slice: base_mip,
            ..Default::default()
        }
    }

    /// Returns a multi-slice render target view.
    ///
    /// The slice count is `min(depth_or_array_size, range.array_size) - range.base_array`
    /// under the configured [`RangeClamp`](crate::RangeClamp).
    pub fn as_color_target_view_array(&self, range: &ViewRange) -> RenderTargetViewDesc {
        RenderTargetViewDesc {
            format: self.view_format(range.format),
            view_dimension: self.views.rtv_array,
            mip_slice: u32::from(range.base_mip),
            first_array_slice: u32::from(range.base_array),
            array_size: self.array_count(range),
            plane_slice: 0,
        }
    }

    /// Returns a single-slice depth-stencil view of mip `base_mip`.
    ///
    /// `view_format` is only used when the resource format is typeless.
    pub fn as_depth_stencil_view(&self, view_format: Format, base_mip: u16) -> DepthStencilViewDesc {
        DepthStencilViewDesc {
            format: self.view_format(view_format),
            view_dimension: self.views.dsv,
            mip_slice: u32::from(base_mip),
            ..Default::default()
        }
    }

    /// Returns a multi-slice depth-stencil view, with the same slice count
    /// rule as [`as_color_target_view_array`](Self::as_color_target_view_array).
    pub fn as_depth_stencil_view_array(&self, range: &ViewRange) -> DepthStencilViewDesc {
        DepthStencilViewDesc {
            format: self.view_format(range.format),
            view_dimension: self.views.dsv_array,
            flags: DsvFlags::NONE,
            mip_slice: u32::from(range.base_mip),
            first_array_slice: u32::from(range.base_array),
            array_size: self.array_count(range),
        }
    }

    /// Returns a single-slice shader resource view.
    ///
    /// The mip count is `min(mip_levels, resource mip levels) - base_mip`
    /// under the configured [`RangeClamp`](crate::RangeClamp).
    pub fn as_shader_resource_view(
        &self,
        view_format: Format,
        base_mip: u16,
        mip_levels: u16,
        min_lod: f32,
    ) -> ShaderResourceViewDesc {
        let range = ViewRange {
            format: view_format,
            base_mip,
            mip_levels,
            min_lod,
            ..Default::default()
        };

        ShaderResourceViewDesc {
            format: self.view_format(view_format),
            view_dimension: self.views.srv,
            shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
            range: SrvRange::Texture(TextureSrvRange {
                most_detailed_mip: u32::from(base_mip),
                mip_levels: self.mip_count(&range),
                resource_min_lod_clamp: min_lod,
                ..Default::default()
            }),
        }
    }

    /// Returns a multi-slice shader resource view. Mip and slice counts are
    /// clamped independently.
    pub fn as_shader_resource_view_array(&self, range: &ViewRange) -> ShaderResourceViewDesc {
        ShaderResourceViewDesc {
            format: self.view_format(range.format),
            view_dimension: self.views.srv_array,
            shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
            range: SrvRange::Texture(TextureSrvRange {
                most_detailed_mip: u32::from(range.base_mip),
                mip_levels: self.mip_count(range),
                first_array_slice: u32::from(range.base_array),
                array_size: self.array_count(range),
                plane_slice: 0,
                resource_min_lod_clamp: range.min_lod,
            }),
        }
    }

    /// Returns a buffer shader resource view.
    ///
    /// The view is raw when it has neither a stride nor a format. The format
    /// is taken from `range` as is, and `num_elements` is not checked against
    /// the buffer width.
    pub fn as_buffer_resource_view(&self, range: &BufferViewRange) -> ShaderResourceViewDesc {
        // TODO: clamp num_elements to width / stride (4 bytes for raw views).
        let flags = if range.is_raw() {
            BufferSrvFlags::RAW
        } else {
            BufferSrvFlags::NONE
        };

        ShaderResourceViewDesc {
            format: range.format,
            view_dimension: SrvDimension::Buffer,
            shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
            range: SrvRange::Buffer(BufferSrvRange {
                first_element: u64::from(range.first_element),
                num_elements: range.num_elements,
                structure_byte_stride: range.byte_stride,
                flags,
            }),
        }
    }

    // --- Internals ---

    fn reset(&mut self) {
        self.desc = ResourceDesc::default();
        self.heap_properties = HeapProperties::default();
        self.heap_flags = HeapFlags::NONE;
        self.views = ViewDimensions::default();
    }

    fn reset_texture(&mut self, dimension: ResourceDimension, format: Format) {
        self.reset();
        self.set_heap_type(self.settings.texture_heap_type);

        self.desc.dimension = dimension;
        self.desc.alignment = 0;
        self.desc.format = format;
        self.desc.sample_desc = SampleDesc::SINGLE;
    }

    fn build_view_dimensions(&mut self) {
        self.views = ViewDimensions::derive(
            self.desc.dimension,
            self.desc.sample_desc.count,
            self.desc.depth_or_array_size,
        );
    }

    /// Typeless resources take the caller's format; all others keep their own.
    fn view_format(&self, requested: Format) -> Format {
        if self.desc.format.is_typeless() {
            requested
        } else {
            self.desc.format
        }
    }

    fn array_count(&self, range: &ViewRange) -> u32 {
        self.settings
            .range_clamp
            .count(self.desc.depth_or_array_size, range.array_size, range.base_array)
    }

    fn mip_count(&self, range: &ViewRange) -> u32 {
        self.settings
            .range_clamp
            .count(self.desc.mip_levels, range.mip_levels, range.base_mip)
    }
}
