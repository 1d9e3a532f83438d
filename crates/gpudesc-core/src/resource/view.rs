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

//! View descriptors and the rules that decide which view dimension a resource supports.
//!
//! A view tells the API how to interpret a resource for one binding point:
//! render target (RTV), depth-stencil (DSV) or shader resource (SRV). The
//! legal view dimension depends only on the resource dimension, its sample
//! count and whether it has more than one array slice, so it is derived once
//! per shape into [`ViewDimensions`].

use crate::gpudesc_bitflags;
use crate::resource::{Format, ResourceDimension};

/// Array slice limit of a 2D texture; the default upper bound of array views.
pub const MAX_ARRAY_SLICES: u16 = 2048;

/// Mip level limit; the default upper bound of shader resource views.
pub const MAX_MIP_LEVELS: u16 = 15;

/// The identity component mapping (R, G, B, A read from channels 0..3).
pub const DEFAULT_SHADER_4_COMPONENT_MAPPING: u32 = 0x1688;

/// The dimension of a render target view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum RtvDimension {
    /// The resource cannot be viewed as a render target.
    #[default]
    Unsupported = 0,
    /// A buffer viewed as a render target.
    Buffer = 1,
    /// A single 1D texture slice.
    Texture1D = 2,
    /// A range of 1D texture slices.
    Texture1DArray = 3,
    /// A single 2D texture slice.
    Texture2D = 4,
    /// A range of 2D texture slices.
    Texture2DArray = 5,
    /// A multisampled 2D texture.
    Texture2DMs = 6,
    /// A range of multisampled 2D texture slices.
    Texture2DMsArray = 7,
    /// A range of depth slices of a 3D texture.
    Texture3D = 8,
}

/// The dimension of a depth-stencil view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum DsvDimension {
    /// The resource cannot be viewed as a depth-stencil target.
    #[default]
    Unsupported = 0,
    /// A single 1D texture slice.
    Texture1D = 1,
    /// A range of 1D texture slices.
    Texture1DArray = 2,
    /// A single 2D texture slice.
    Texture2D = 3,
    /// A range of 2D texture slices.
    Texture2DArray = 4,
    /// A multisampled 2D texture.
    Texture2DMs = 5,
    /// A range of multisampled 2D texture slices.
    Texture2DMsArray = 6,
}

/// The dimension of a shader resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum SrvDimension {
    /// The resource cannot be read through a shader resource view.
    #[default]
    Unsupported = 0,
    /// A typed, structured or raw buffer.
    Buffer = 1,
    /// A 1D texture.
    Texture1D = 2,
    /// A 1D texture array.
    Texture1DArray = 3,
    /// A 2D texture.
    Texture2D = 4,
    /// A 2D texture array.
    Texture2DArray = 5,
    /// A multisampled 2D texture.
    Texture2DMs = 6,
    /// A multisampled 2D texture array.
    Texture2DMsArray = 7,
    /// A 3D texture.
    Texture3D = 8,
    /// A cube texture.
    TextureCube = 9,
    /// A cube texture array.
    TextureCubeArray = 10,
    /// A raytracing acceleration structure.
    RaytracingAccelerationStructure = 11,
}

macro_rules! impl_raw_view_dimension {
    ($name:ident { $($raw:literal => $variant:ident),* $(,)? }) => {
        impl $name {
            /// Returns the native view dimension value.
            pub const fn to_raw(self) -> u32 {
                self as u32
            }

            /// Maps a native view dimension value back, if known.
            pub const fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $($raw => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

impl_raw_view_dimension!(RtvDimension {
    0 => Unsupported,
    1 => Buffer,
    2 => Texture1D,
    3 => Texture1DArray,
    4 => Texture2D,
    5 => Texture2DArray,
    6 => Texture2DMs,
    7 => Texture2DMsArray,
    8 => Texture3D,
});

impl_raw_view_dimension!(DsvDimension {
    0 => Unsupported,
    1 => Texture1D,
    2 => Texture1DArray,
    3 => Texture2D,
    4 => Texture2DArray,
    5 => Texture2DMs,
    6 => Texture2DMsArray,
});

impl_raw_view_dimension!(SrvDimension {
    0 => Unsupported,
    1 => Buffer,
    2 => Texture1D,
    3 => Texture1DArray,
    4 => Texture2D,
    5 => Texture2DArray,
    6 => Texture2DMs,
    7 => Texture2DMsArray,
    8 => Texture3D,
    9 => TextureCube,
    10 => TextureCubeArray,
    11 => RaytracingAccelerationStructure,
});

/// The view dimensions a resource shape supports, for single-slice and
/// multi-slice views of each kind.
///
/// The `*_array` fields are only populated for 2D textures; every other
/// dimension leaves them [`Unsupported`](RtvDimension::Unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewDimensions {
    /// Render target view dimension for single-slice views.
    pub rtv: RtvDimension,
    /// Render target view dimension for multi-slice views.
    pub rtv_array: RtvDimension,
    /// Depth-stencil view dimension for single-slice views.
    pub dsv: DsvDimension,
    /// Depth-stencil view dimension for multi-slice views.
    pub dsv_array: DsvDimension,
    /// Shader resource view dimension for single-slice views.
    pub srv: SrvDimension,
    /// Shader resource view dimension for multi-slice views.
    pub srv_array: SrvDimension,
}

impl ViewDimensions {
    /// Derives the supported view dimensions of a resource shape.
    ///
    /// Depth-stencil views are only exposed for 2D textures. For 2D textures
    /// the multisampled variants are chosen when `sample_count > 1`, and the
    /// array fields switch to the array variants when
    /// `depth_or_array_size != 1`.
    pub const fn derive(
        dimension: ResourceDimension,
        sample_count: u32,
        depth_or_array_size: u16,
    ) -> Self {
        let mut views = Self {
            rtv: RtvDimension::Unsupported,
            rtv_array: RtvDimension::Unsupported,
            dsv: DsvDimension::Unsupported,
            dsv_array: DsvDimension::Unsupported,
            srv: SrvDimension::Unsupported,
            srv_array: SrvDimension::Unsupported,
        };

        match dimension {
            ResourceDimension::Unknown => {}
            ResourceDimension::Buffer => {
                views.rtv = RtvDimension::Buffer;
                views.srv = SrvDimension::Buffer;
            }
            ResourceDimension::Texture1D => {
                views.rtv = RtvDimension::Texture1D;
                views.srv = SrvDimension::Texture1D;
            }
            ResourceDimension::Texture3D => {
                views.rtv = RtvDimension::Texture3D;
                views.srv = SrvDimension::Texture3D;
            }
            ResourceDimension::Texture2D => {
                let single = depth_or_array_size == 1;
                if sample_count > 1 {
                    views.rtv = RtvDimension::Texture2DMs;
                    views.dsv = DsvDimension::Texture2DMs;
                    views.srv = SrvDimension::Texture2DMs;
                    if single {
                        views.rtv_array = RtvDimension::Texture2DMs;
                        views.dsv_array = DsvDimension::Texture2DMs;
                        views.srv_array = SrvDimension::Texture2DMs;
                    } else {
                        views.rtv_array = RtvDimension::Texture2DMsArray;
                        views.dsv_array = DsvDimension::Texture2DMsArray;
                        views.srv_array = SrvDimension::Texture2DMsArray;
                    }
                } else {
                    views.rtv = RtvDimension::Texture2D;
                    views.dsv = DsvDimension::Texture2D;
                    views.srv = SrvDimension::Texture2D;
                    if single {
                        views.rtv_array = RtvDimension::Texture2D;
                        views.dsv_array = DsvDimension::Texture2D;
                        views.srv_array = SrvDimension::Texture2D;
                    } else {
                        views.rtv_array = RtvDimension::Texture2DArray;
                        views.dsv_array = DsvDimension::Texture2DArray;
                        views.srv_array = SrvDimension::Texture2DArray;
                    }
                }
            }
        }

        views
    }
}

gpudesc_bitflags! {
    /// Read-only options of a depth-stencil view.
    pub struct DsvFlags: u32 {
        /// Depth and stencil are writable.
        const NONE = 0;
        /// The depth plane is read-only.
        const READ_ONLY_DEPTH = 0x1;
        /// The stencil plane is read-only.
        const READ_ONLY_STENCIL = 0x2;
    }
}

gpudesc_bitflags! {
    /// Options of a buffer shader resource view.
    pub struct BufferSrvFlags: u32 {
        /// Typed or structured access.
        const NONE = 0;
        /// Untyped access in 4-byte units.
        const RAW = 0x1;
    }
}

/// Describes a render target view.
///
/// The sub-resource fields are interpreted according to `view_dimension`:
/// for 3D views `first_array_slice`/`array_size` address depth slices, for
/// single-slice views only `mip_slice` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderTargetViewDesc {
    /// Format the resource is interpreted with.
    pub format: Format,
    /// How the resource is addressed.
    pub view_dimension: RtvDimension,
    /// Mip level rendered to.
    pub mip_slice: u32,
    /// First array (or depth) slice.
    pub first_array_slice: u32,
    /// Number of array (or depth) slices.
    pub array_size: u32,
    /// Plane of a planar format.
    pub plane_slice: u32,
}

/// Describes a depth-stencil view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthStencilViewDesc {
    /// Format the resource is interpreted with.
    pub format: Format,
    /// How the resource is addressed.
    pub view_dimension: DsvDimension,
    /// Read-only planes.
    pub flags: DsvFlags,
    /// Mip level rendered to.
    pub mip_slice: u32,
    /// First array slice.
    pub first_array_slice: u32,
    /// Number of array slices.
    pub array_size: u32,
}

/// The texture sub-resource range of a shader resource view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureSrvRange {
    /// Most detailed mip level accessible.
    pub most_detailed_mip: u32,
    /// Number of mip levels accessible.
    pub mip_levels: u32,
    /// First array slice.
    pub first_array_slice: u32,
    /// Number of array slices.
    pub array_size: u32,
    /// Plane of a planar format.
    pub plane_slice: u32,
    /// Lowest mip level that can be sampled, as a fractional LOD.
    pub resource_min_lod_clamp: f32,
}

/// The element range of a buffer shader resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferSrvRange {
    /// Index of the first element.
    pub first_element: u64,
    /// Number of elements.
    pub num_elements: u32,
    /// Element stride of a structured buffer; zero for typed and raw views.
    pub structure_byte_stride: u32,
    /// Raw or typed access.
    pub flags: BufferSrvFlags,
}

/// What part of the resource a shader resource view covers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SrvRange {
    /// Mips and slices of a texture.
    Texture(TextureSrvRange),
    /// Elements of a buffer.
    Buffer(BufferSrvRange),
}

/// Describes a shader resource view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderResourceViewDesc {
    /// Format the resource is interpreted with.
    pub format: Format,
    /// How the resource is addressed.
    pub view_dimension: SrvDimension,
    /// Channel swizzle; see [`DEFAULT_SHADER_4_COMPONENT_MAPPING`].
    pub shader_4_component_mapping: u32,
    /// The covered sub-resources or elements.
    pub range: SrvRange,
}

impl ShaderResourceViewDesc {
    /// Returns the texture range, if this is a texture view.
    pub fn texture_range(&self) -> Option<&TextureSrvRange> {
        match &self.range {
            SrvRange::Texture(range) => Some(range),
            SrvRange::Buffer(_) => None,
        }
    }

    /// Returns the buffer range, if this is a buffer view.
    pub fn buffer_range(&self) -> Option<&BufferSrvRange> {
        match &self.range {
            SrvRange::Buffer(range) => Some(range),
            SrvRange::Texture(_) => None,
        }
    }
}

/// Parameters of a multi-slice texture view.
///
/// Each view operation reads the fields it needs: render target and
/// depth-stencil arrays ignore `mip_levels` and `min_lod`, and single-slice
/// shader resource views ignore the array fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewRange {
    /// View format, used only when the resource format is typeless.
    pub format: Format,
    /// First mip level.
    pub base_mip: u16,
    /// Requested mip level count, clamped to the resource.
    pub mip_levels: u16,
    /// First array slice.
    pub base_array: u16,
    /// Requested array slice upper bound, clamped to the resource.
    pub array_size: u16,
    /// Minimum LOD clamp of shader resource views.
    pub min_lod: f32,
}

impl Default for ViewRange {
    fn default() -> Self {
        Self {
            format: Format::Unknown,
            base_mip: 0,
            mip_levels: MAX_MIP_LEVELS,
            base_array: 0,
            array_size: MAX_ARRAY_SLICES,
            min_lod: 0.0,
        }
    }
}

impl ViewRange {
    /// A range covering every mip and slice, viewed with `format`.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Sets the first mip level and the requested mip count.
    #[must_use]
    pub fn mips(mut self, base_mip: u16, mip_levels: u16) -> Self {
        self.base_mip = base_mip;
        self.mip_levels = mip_levels;
        self
    }

    /// Sets the first array slice and the requested slice bound.
    #[must_use]
    pub fn slices(mut self, base_array: u16, array_size: u16) -> Self {
        self.base_array = base_array;
        self.array_size = array_size;
        self
    }

    /// Sets the minimum LOD clamp.
    #[must_use]
    pub fn min_lod(mut self, min_lod: f32) -> Self {
        self.min_lod = min_lod;
        self
    }
}

/// Parameters of a buffer shader resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferViewRange {
    /// Index of the first element.
    pub first_element: u32,
    /// Number of elements. Not clamped to the buffer size.
    pub num_elements: u32,
    /// Structured buffer stride; zero for typed and raw views.
    pub byte_stride: u32,
    /// Element format of a typed view; `Unknown` for structured and raw views.
    pub format: Format,
}

impl Default for BufferViewRange {
    fn default() -> Self {
        Self {
            first_element: 0,
            num_elements: u32::MAX,
            byte_stride: 0,
            format: Format::Unknown,
        }
    }
}

impl BufferViewRange {
    /// A raw view of `num_elements` 4-byte words starting at `first_element`.
    pub fn raw(first_element: u32, num_elements: u32) -> Self {
        Self {
            first_element,
            num_elements,
            ..Default::default()
        }
    }

    /// A structured view of `num_elements` elements of `byte_stride` bytes.
    pub fn structured(first_element: u32, num_elements: u32, byte_stride: u32) -> Self {
        Self {
            first_element,
            num_elements,
            byte_stride,
            format: Format::Unknown,
        }
    }

    /// A typed view of `num_elements` elements of `format`.
    pub fn typed(first_element: u32, num_elements: u32, format: Format) -> Self {
        Self {
            first_element,
            num_elements,
            byte_stride: 0,
            format,
        }
    }

    /// Returns `true` if the view is raw: no stride and no element format.
    pub fn is_raw(&self) -> bool {
        self.byte_stride == 0 && self.format == Format::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMENSIONS: [ResourceDimension; 5] = [
        ResourceDimension::Unknown,
        ResourceDimension::Buffer,
        ResourceDimension::Texture1D,
        ResourceDimension::Texture2D,
        ResourceDimension::Texture3D,
    ];

    fn expected(dimension: ResourceDimension, samples: u32, slices: u16) -> ViewDimensions {
        use DsvDimension as D;
        use RtvDimension as R;
        use SrvDimension as S;

        let none = ViewDimensions::default();
        match dimension {
            ResourceDimension::Unknown => none,
            ResourceDimension::Buffer => ViewDimensions {
                rtv: R::Buffer,
                srv: S::Buffer,
                ..none
            },
            ResourceDimension::Texture1D => ViewDimensions {
                rtv: R::Texture1D,
                srv: S::Texture1D,
                ..none
            },
            ResourceDimension::Texture3D => ViewDimensions {
                rtv: R::Texture3D,
                srv: S::Texture3D,
                ..none
            },
            ResourceDimension::Texture2D => match (samples > 1, slices != 1) {
                (true, false) => ViewDimensions {
                    rtv: R::Texture2DMs,
                    rtv_array: R::Texture2DMs,
                    dsv: D::Texture2DMs,
                    dsv_array: D::Texture2DMs,
                    srv: S::Texture2DMs,
                    srv_array: S::Texture2DMs,
                },
                (true, true) => ViewDimensions {
                    rtv: R::Texture2DMs,
                    rtv_array: R::Texture2DMsArray,
                    dsv: D::Texture2DMs,
                    dsv_array: D::Texture2DMsArray,
                    srv: S::Texture2DMs,
                    srv_array: S::Texture2DMsArray,
                },
                (false, false) => ViewDimensions {
                    rtv: R::Texture2D,
                    rtv_array: R::Texture2D,
                    dsv: D::Texture2D,
                    dsv_array: D::Texture2D,
                    srv: S::Texture2D,
                    srv_array: S::Texture2D,
                },
                (false, true) => ViewDimensions {
                    rtv: R::Texture2D,
                    rtv_array: R::Texture2DArray,
                    dsv: D::Texture2D,
                    dsv_array: D::Texture2DArray,
                    srv: S::Texture2D,
                    srv_array: S::Texture2DArray,
                },
            },
        }
    }

    #[test]
    fn derivation_table_holds_for_every_combination() {
        let mut cases = 0;
        for dimension in DIMENSIONS {
            for samples in [1, 4] {
                for slices in [1, 6] {
                    assert_eq!(
                        ViewDimensions::derive(dimension, samples, slices),
                        expected(dimension, samples, slices),
                        "{dimension:?} samples={samples} slices={slices}"
                    );
                    cases += 1;
                }
            }
        }
        assert_eq!(cases, 20);
    }

    #[test]
    fn zero_samples_is_single_but_zero_slices_is_array() {
        let views = ViewDimensions::derive(ResourceDimension::Texture2D, 0, 0);
        assert_eq!(views.rtv, RtvDimension::Texture2D);
        // Zero slices is not "exactly one", so the array variant is chosen.
        assert_eq!(views.rtv_array, RtvDimension::Texture2DArray);
    }

    #[test]
    fn volume_depth_never_selects_array_views() {
        let views = ViewDimensions::derive(ResourceDimension::Texture3D, 4, 32);
        assert_eq!(views.rtv, RtvDimension::Texture3D);
        assert_eq!(views.srv, SrvDimension::Texture3D);
        assert_eq!(views.rtv_array, RtvDimension::Unsupported);
        assert_eq!(views.srv_array, SrvDimension::Unsupported);
    }

    #[test]
    fn depth_stencil_only_for_2d_textures() {
        for dimension in [
            ResourceDimension::Buffer,
            ResourceDimension::Texture1D,
            ResourceDimension::Texture3D,
        ] {
            let views = ViewDimensions::derive(dimension, 1, 1);
            assert_eq!(views.dsv, DsvDimension::Unsupported);
            assert_eq!(views.dsv_array, DsvDimension::Unsupported);
        }
    }

    #[test]
    fn view_dimension_raw_values() {
        assert_eq!(RtvDimension::Texture3D.to_raw(), 8);
        assert_eq!(DsvDimension::Texture2DMsArray.to_raw(), 6);
        assert_eq!(SrvDimension::TextureCubeArray.to_raw(), 10);
        assert_eq!(SrvDimension::from_raw(11), Some(SrvDimension::RaytracingAccelerationStructure));
        assert_eq!(DsvDimension::from_raw(7), None);
        assert_eq!(RtvDimension::from_raw(0), Some(RtvDimension::Unsupported));
    }

    #[test]
    fn view_range_defaults_cover_everything() {
        let range = ViewRange::default();
        assert_eq!(range.format, Format::Unknown);
        assert_eq!(range.mip_levels, MAX_MIP_LEVELS);
        assert_eq!(range.array_size, MAX_ARRAY_SLICES);

        let range = ViewRange::new(Format::R16Float).mips(1, 2).slices(3, 4).min_lod(0.5);
        assert_eq!(range.format, Format::R16Float);
        assert_eq!((range.base_mip, range.mip_levels), (1, 2));
        assert_eq!((range.base_array, range.array_size), (3, 4));
        assert_eq!(range.min_lod, 0.5);
    }

    #[test]
    fn buffer_view_range_classification() {
        let default = BufferViewRange::default();
        assert_eq!(default.num_elements, u32::MAX);
        assert!(default.is_raw());
        assert!(BufferViewRange::raw(0, 100).is_raw());
        assert!(!BufferViewRange::structured(0, 100, 16).is_raw());
        assert!(!BufferViewRange::typed(0, 100, Format::R32Float).is_raw());
    }

    #[test]
    fn srv_range_accessors() {
        let view = ShaderResourceViewDesc {
            format: Format::Unknown,
            view_dimension: SrvDimension::Buffer,
            shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
            range: SrvRange::Buffer(BufferSrvRange::default()),
        };
        assert!(view.buffer_range().is_some());
        assert!(view.texture_range().is_none());
    }
}
