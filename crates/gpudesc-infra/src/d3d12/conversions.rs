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

//! Conversions from core descriptors into `windows` crate D3D12 structures.

use gpudesc_core::{
    DepthStencilViewDesc, DsvDimension, Format, HeapFlags, HeapProperties, RenderTargetViewDesc,
    ResourceDesc, ResourceFlags, RtvDimension, ShaderResourceViewDesc, SrvDimension, SrvRange,
};
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::{DXGI_FORMAT, DXGI_SAMPLE_DESC};

use super::raw::RawResourceDesc;

/// A local extension trait to convert core types into D3D12 types.
/// This avoids Rust's orphan rules while keeping an idiomatic `.into_d3d12()` syntax.
pub trait IntoD3d12<T> {
    /// Consumes self and converts it into a D3D12-compatible type.
    fn into_d3d12(self) -> T;
}

// --- Enums and flags ---

impl IntoD3d12<DXGI_FORMAT> for Format {
    fn into_d3d12(self) -> DXGI_FORMAT {
        DXGI_FORMAT(self.to_raw() as i32)
    }
}

impl IntoD3d12<D3D12_RTV_DIMENSION> for RtvDimension {
    fn into_d3d12(self) -> D3D12_RTV_DIMENSION {
        D3D12_RTV_DIMENSION(self.to_raw() as i32)
    }
}

impl IntoD3d12<D3D12_DSV_DIMENSION> for DsvDimension {
    fn into_d3d12(self) -> D3D12_DSV_DIMENSION {
        D3D12_DSV_DIMENSION(self.to_raw() as i32)
    }
}

impl IntoD3d12<D3D12_SRV_DIMENSION> for SrvDimension {
    fn into_d3d12(self) -> D3D12_SRV_DIMENSION {
        D3D12_SRV_DIMENSION(self.to_raw() as i32)
    }
}

impl IntoD3d12<D3D12_RESOURCE_FLAGS> for ResourceFlags {
    fn into_d3d12(self) -> D3D12_RESOURCE_FLAGS {
        D3D12_RESOURCE_FLAGS(self.bits() as i32)
    }
}

impl IntoD3d12<D3D12_HEAP_FLAGS> for HeapFlags {
    fn into_d3d12(self) -> D3D12_HEAP_FLAGS {
        D3D12_HEAP_FLAGS(self.bits() as i32)
    }
}

// --- Resource and heap ---

impl IntoD3d12<D3D12_RESOURCE_DESC> for ResourceDesc {
    fn into_d3d12(self) -> D3D12_RESOURCE_DESC {
        D3D12_RESOURCE_DESC {
            Dimension: D3D12_RESOURCE_DIMENSION(self.dimension.to_raw() as i32),
            Alignment: self.alignment,
            Width: self.width,
            Height: self.height,
            DepthOrArraySize: self.depth_or_array_size,
            MipLevels: self.mip_levels,
            Format: self.format.into_d3d12(),
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: self.sample_desc.count,
                Quality: self.sample_desc.quality,
            },
            Layout: D3D12_TEXTURE_LAYOUT(self.layout.to_raw() as i32),
            Flags: self.flags.into_d3d12(),
        }
    }
}

impl IntoD3d12<D3D12_HEAP_PROPERTIES> for HeapProperties {
    fn into_d3d12(self) -> D3D12_HEAP_PROPERTIES {
        D3D12_HEAP_PROPERTIES {
            Type: D3D12_HEAP_TYPE(self.heap_type.to_raw() as i32),
            CPUPageProperty: D3D12_CPU_PAGE_PROPERTY(self.cpu_page_property.to_raw() as i32),
            MemoryPoolPreference: D3D12_MEMORY_POOL(self.memory_pool_preference.to_raw() as i32),
            CreationNodeMask: self.creation_node_mask,
            VisibleNodeMask: self.visible_node_mask,
        }
    }
}

impl From<&D3D12_RESOURCE_DESC> for RawResourceDesc {
    fn from(desc: &D3D12_RESOURCE_DESC) -> Self {
        RawResourceDesc {
            dimension: desc.Dimension.0,
            alignment: desc.Alignment,
            width: desc.Width,
            height: desc.Height,
            depth_or_array_size: desc.DepthOrArraySize,
            mip_levels: desc.MipLevels,
            format: desc.Format.0,
            sample_count: desc.SampleDesc.Count,
            sample_quality: desc.SampleDesc.Quality,
            layout: desc.Layout.0,
            flags: desc.Flags.0,
        }
    }
}

// --- Views ---

/// Fills the union member selected by `view_dimension`, so a multisampled
/// array view writes `Texture2DMSArray` and a volume view writes `Texture3D`.
/// Helpers that always write the `Texture2DArray` member produce different
/// bytes for those dimensions.
impl IntoD3d12<D3D12_RENDER_TARGET_VIEW_DESC> for RenderTargetViewDesc {
    fn into_d3d12(self) -> D3D12_RENDER_TARGET_VIEW_DESC {
        let anonymous = match self.view_dimension {
            RtvDimension::Unsupported | RtvDimension::Texture2D => {
                D3D12_RENDER_TARGET_VIEW_DESC_0 {
                    Texture2D: D3D12_TEX2D_RTV {
                        MipSlice: self.mip_slice,
                        PlaneSlice: self.plane_slice,
                    },
                }
            }
            RtvDimension::Buffer => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Buffer: D3D12_BUFFER_RTV {
                    FirstElement: u64::from(self.first_array_slice),
                    NumElements: self.array_size,
                },
            },
            RtvDimension::Texture1D => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture1D: D3D12_TEX1D_RTV {
                    MipSlice: self.mip_slice,
                },
            },
            RtvDimension::Texture1DArray => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture1DArray: D3D12_TEX1D_ARRAY_RTV {
                    MipSlice: self.mip_slice,
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                },
            },
            RtvDimension::Texture2DArray => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture2DArray: D3D12_TEX2D_ARRAY_RTV {
                    MipSlice: self.mip_slice,
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                    PlaneSlice: self.plane_slice,
                },
            },
            RtvDimension::Texture2DMs => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture2DMS: D3D12_TEX2DMS_RTV {
                    UnusedField_NothingToDefine: 0,
                },
            },
            RtvDimension::Texture2DMsArray => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture2DMSArray: D3D12_TEX2DMS_ARRAY_RTV {
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                },
            },
            RtvDimension::Texture3D => D3D12_RENDER_TARGET_VIEW_DESC_0 {
                Texture3D: D3D12_TEX3D_RTV {
                    MipSlice: self.mip_slice,
                    FirstWSlice: self.first_array_slice,
                    WSize: self.array_size,
                },
            },
        };

        D3D12_RENDER_TARGET_VIEW_DESC {
            Format: self.format.into_d3d12(),
            ViewDimension: self.view_dimension.into_d3d12(),
            Anonymous: anonymous,
        }
    }
}

/// Fills the union member selected by `view_dimension`, as the render target
/// conversion does.
impl IntoD3d12<D3D12_DEPTH_STENCIL_VIEW_DESC> for DepthStencilViewDesc {
    fn into_d3d12(self) -> D3D12_DEPTH_STENCIL_VIEW_DESC {
        let anonymous = match self.view_dimension {
            DsvDimension::Unsupported | DsvDimension::Texture2D => {
                D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                    Texture2D: D3D12_TEX2D_DSV {
                        MipSlice: self.mip_slice,
                    },
                }
            }
            DsvDimension::Texture1D => D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                Texture1D: D3D12_TEX1D_DSV {
                    MipSlice: self.mip_slice,
                },
            },
            DsvDimension::Texture1DArray => D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                Texture1DArray: D3D12_TEX1D_ARRAY_DSV {
                    MipSlice: self.mip_slice,
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                },
            },
            DsvDimension::Texture2DArray => D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                Texture2DArray: D3D12_TEX2D_ARRAY_DSV {
                    MipSlice: self.mip_slice,
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                },
            },
            DsvDimension::Texture2DMs => D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                Texture2DMS: D3D12_TEX2DMS_DSV {
                    UnusedField_NothingToDefine: 0,
                },
            },
            DsvDimension::Texture2DMsArray => D3D12_DEPTH_STENCIL_VIEW_DESC_0 {
                Texture2DMSArray: D3D12_TEX2DMS_ARRAY_DSV {
                    FirstArraySlice: self.first_array_slice,
                    ArraySize: self.array_size,
                },
            },
        };

        D3D12_DEPTH_STENCIL_VIEW_DESC {
            Format: self.format.into_d3d12(),
            ViewDimension: self.view_dimension.into_d3d12(),
            Flags: D3D12_DSV_FLAGS(self.flags.bits() as i32),
            Anonymous: anonymous,
        }
    }
}

/// Buffer ranges fill the `Buffer` member. Texture ranges fill the member
/// selected by `view_dimension` rather than always `Texture2DArray`.
impl IntoD3d12<D3D12_SHADER_RESOURCE_VIEW_DESC> for ShaderResourceViewDesc {
    fn into_d3d12(self) -> D3D12_SHADER_RESOURCE_VIEW_DESC {
        let anonymous = match self.range {
            SrvRange::Buffer(buffer) => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                Buffer: D3D12_BUFFER_SRV {
                    FirstElement: buffer.first_element,
                    NumElements: buffer.num_elements,
                    StructureByteStride: buffer.structure_byte_stride,
                    Flags: D3D12_BUFFER_SRV_FLAGS(buffer.flags.bits() as i32),
                },
            },
            SrvRange::Texture(texture) => match self.view_dimension {
                SrvDimension::Texture1D => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture1D: D3D12_TEX1D_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                SrvDimension::Texture1DArray => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture1DArray: D3D12_TEX1D_ARRAY_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        FirstArraySlice: texture.first_array_slice,
                        ArraySize: texture.array_size,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                SrvDimension::Texture2DArray => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture2DArray: D3D12_TEX2D_ARRAY_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        FirstArraySlice: texture.first_array_slice,
                        ArraySize: texture.array_size,
                        PlaneSlice: texture.plane_slice,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                SrvDimension::Texture2DMs => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture2DMS: D3D12_TEX2DMS_SRV {
                        UnusedField_NothingToDefine: 0,
                    },
                },
                SrvDimension::Texture2DMsArray => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture2DMSArray: D3D12_TEX2DMS_ARRAY_SRV {
                        FirstArraySlice: texture.first_array_slice,
                        ArraySize: texture.array_size,
                    },
                },
                SrvDimension::Texture3D => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture3D: D3D12_TEX3D_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                SrvDimension::TextureCube => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    TextureCube: D3D12_TEXCUBE_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                SrvDimension::TextureCubeArray => D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    TextureCubeArray: D3D12_TEXCUBE_ARRAY_SRV {
                        MostDetailedMip: texture.most_detailed_mip,
                        MipLevels: texture.mip_levels,
                        First2DArrayFace: texture.first_array_slice,
                        NumCubes: texture.array_size,
                        ResourceMinLODClamp: texture.resource_min_lod_clamp,
                    },
                },
                // Buffer, acceleration structure and unsupported views built
                // from a texture range share the 2D layout, as the native union does.
                SrvDimension::Unsupported
                | SrvDimension::Buffer
                | SrvDimension::Texture2D
                | SrvDimension::RaytracingAccelerationStructure => {
                    D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                        Texture2D: D3D12_TEX2D_SRV {
                            MostDetailedMip: texture.most_detailed_mip,
                            MipLevels: texture.mip_levels,
                            PlaneSlice: texture.plane_slice,
                            ResourceMinLODClamp: texture.resource_min_lod_clamp,
                        },
                    }
                }
            },
        };

        D3D12_SHADER_RESOURCE_VIEW_DESC {
            Format: self.format.into_d3d12(),
            ViewDimension: self.view_dimension.into_d3d12(),
            Shader4ComponentMapping: self.shader_4_component_mapping,
            Anonymous: anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::d3d12::raw::resource_desc_from_raw;
    use gpudesc_core::{BufferViewRange, ResourceBuilder, ViewRange};
    use windows::Win32::Graphics::Dxgi::Common::{
        DXGI_FORMAT_R8G8B8A8_TYPELESS, DXGI_FORMAT_R8G8B8A8_UNORM,
    };

    #[test]
    fn format_values_match_dxgi() {
        assert_eq!(Format::R8G8B8A8Typeless.into_d3d12(), DXGI_FORMAT_R8G8B8A8_TYPELESS);
        assert_eq!(Format::R8G8B8A8Unorm.into_d3d12(), DXGI_FORMAT_R8G8B8A8_UNORM);
    }

    #[test]
    fn resource_desc_round_trips_through_raw() {
        let mut builder = ResourceBuilder::new();
        builder.texture_2d(640, 480, Format::R8G8B8A8Typeless, 2, 3);
        let desc = builder.as_color_target(true);

        let native = desc.into_d3d12();
        assert_eq!(native.Dimension, D3D12_RESOURCE_DIMENSION_TEXTURE2D);
        assert_eq!(
            native.Flags,
            D3D12_RESOURCE_FLAG_ALLOW_RENDER_TARGET | D3D12_RESOURCE_FLAG_ALLOW_UNORDERED_ACCESS
        );

        let decoded = resource_desc_from_raw(&RawResourceDesc::from(&native));
        assert_eq!(decoded.unwrap(), desc);
    }

    #[test]
    fn array_rtv_fills_array_member() {
        let mut builder = ResourceBuilder::new();
        builder.texture_2d(64, 64, Format::R8G8B8A8Typeless, 4, 1);
        let rtv = builder
            .as_color_target_view_array(&ViewRange::new(Format::R8G8B8A8Unorm).slices(1, 3))
            .into_d3d12();

        assert_eq!(rtv.ViewDimension, D3D12_RTV_DIMENSION_TEXTURE2DARRAY);
        // SAFETY: the view dimension selects the Texture2DArray member.
        let array = unsafe { rtv.Anonymous.Texture2DArray };
        assert_eq!(array.FirstArraySlice, 1);
        assert_eq!(array.ArraySize, 2);
    }

    #[test]
    fn multisampled_array_dsv_fills_ms_array_member() {
        let mut builder = ResourceBuilder::new();
        builder.texture_2d(256, 256, Format::R32Typeless, 6, 1);
        let mut desc = *builder.desc();
        desc.sample_desc.count = 4;

        let views = gpudesc_core::ViewDimensions::derive(
            desc.dimension,
            desc.sample_desc.count,
            desc.depth_or_array_size,
        );
        let dsv = DepthStencilViewDesc {
            format: Format::D32Float,
            view_dimension: views.dsv_array,
            mip_slice: 2,
            first_array_slice: 3,
            array_size: 3,
            ..Default::default()
        }
        .into_d3d12();

        assert_eq!(dsv.ViewDimension, D3D12_DSV_DIMENSION_TEXTURE2DMSARRAY);
        // SAFETY: the view dimension selects the Texture2DMSArray member.
        let array = unsafe { dsv.Anonymous.Texture2DMSArray };
        assert_eq!(array.FirstArraySlice, 3);
        assert_eq!(array.ArraySize, 3);
    }

    #[test]
    fn raw_buffer_srv() {
        let mut builder = ResourceBuilder::new();
        builder.buffer(400);
        let srv = builder
            .as_buffer_resource_view(&BufferViewRange::raw(0, 100))
            .into_d3d12();

        assert_eq!(srv.ViewDimension, D3D12_SRV_DIMENSION_BUFFER);
        assert_eq!(srv.Shader4ComponentMapping, D3D12_DEFAULT_SHADER_4_COMPONENT_MAPPING);
        // SAFETY: the view dimension selects the Buffer member.
        let buffer = unsafe { srv.Anonymous.Buffer };
        assert_eq!(buffer.Flags, D3D12_BUFFER_SRV_FLAG_RAW);
        assert_eq!(buffer.NumElements, 100);
    }
}
