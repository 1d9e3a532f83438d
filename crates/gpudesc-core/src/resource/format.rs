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

//! The pixel and element formats of the resource model.
//!
//! [`Format`] mirrors the block of `DXGI_FORMAT` values used by buffers and
//! textures (`UNKNOWN` through `BC7_UNORM_SRGB`). Discriminants are the native
//! numeric values, so conversion to and from the API is a cast.

/// The memory format of a resource's elements.
///
/// Typeless formats fix the bit layout of an element but defer its
/// interpretation (float, integer, normalized) to the views created on the
/// resource. See [`Format::is_typeless`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Format {
    /// No format. Also the untyped sentinel for buffer views.
    #[default]
    Unknown = 0,
    /// `DXGI_FORMAT_R32G32B32A32_TYPELESS`.
    R32G32B32A32Typeless = 1,
    /// `DXGI_FORMAT_R32G32B32A32_FLOAT`.
    R32G32B32A32Float = 2,
    /// `DXGI_FORMAT_R32G32B32A32_UINT`.
    R32G32B32A32Uint = 3,
    /// `DXGI_FORMAT_R32G32B32A32_SINT`.
    R32G32B32A32Sint = 4,
    /// `DXGI_FORMAT_R32G32B32_TYPELESS`.
    R32G32B32Typeless = 5,
    /// `DXGI_FORMAT_R32G32B32_FLOAT`.
    R32G32B32Float = 6,
    /// `DXGI_FORMAT_R32G32B32_UINT`.
    R32G32B32Uint = 7,
    /// `DXGI_FORMAT_R32G32B32_SINT`.
    R32G32B32Sint = 8,
    /// `DXGI_FORMAT_R16G16B16A16_TYPELESS`.
    R16G16B16A16Typeless = 9,
    /// `DXGI_FORMAT_R16G16B16A16_FLOAT`.
    R16G16B16A16Float = 10,
    /// `DXGI_FORMAT_R16G16B16A16_UNORM`.
    R16G16B16A16Unorm = 11,
    /// `DXGI_FORMAT_R16G16B16A16_UINT`.
    R16G16B16A16Uint = 12,
    /// `DXGI_FORMAT_R16G16B16A16_SNORM`.
    R16G16B16A16Snorm = 13,
    /// `DXGI_FORMAT_R16G16B16A16_SINT`.
    R16G16B16A16Sint = 14,
    /// `DXGI_FORMAT_R32G32_TYPELESS`.
    R32G32Typeless = 15,
    /// `DXGI_FORMAT_R32G32_FLOAT`.
    R32G32Float = 16,
    /// `DXGI_FORMAT_R32G32_UINT`.
    R32G32Uint = 17,
    /// `DXGI_FORMAT_R32G32_SINT`.
    R32G32Sint = 18,
    /// `DXGI_FORMAT_R32G8X24_TYPELESS`.
    R32G8X24Typeless = 19,
    /// `DXGI_FORMAT_D32_FLOAT_S8X24_UINT`.
    D32FloatS8X24Uint = 20,
    /// `DXGI_FORMAT_R32_FLOAT_X8X24_TYPELESS`.
    R32FloatX8X24Typeless = 21,
    /// `DXGI_FORMAT_X32_TYPELESS_G8X24_UINT`.
    X32TypelessG8X24Uint = 22,
    /// `DXGI_FORMAT_R10G10B10A2_TYPELESS`.
    R10G10B10A2Typeless = 23,
    /// `DXGI_FORMAT_R10G10B10A2_UNORM`.
    R10G10B10A2Unorm = 24,
    /// `DXGI_FORMAT_R10G10B10A2_UINT`.
    R10G10B10A2Uint = 25,
    /// `DXGI_FORMAT_R11G11B10_FLOAT`.
    R11G11B10Float = 26,
    /// `DXGI_FORMAT_R8G8B8A8_TYPELESS`.
    R8G8B8A8Typeless = 27,
    /// `DXGI_FORMAT_R8G8B8A8_UNORM`.
    R8G8B8A8Unorm = 28,
    /// `DXGI_FORMAT_R8G8B8A8_UNORM_SRGB`.
    R8G8B8A8UnormSrgb = 29,
    /// `DXGI_FORMAT_R8G8B8A8_UINT`.
    R8G8B8A8Uint = 30,
    /// `DXGI_FORMAT_R8G8B8A8_SNORM`.
    R8G8B8A8Snorm = 31,
    /// `DXGI_FORMAT_R8G8B8A8_SINT`.
    R8G8B8A8Sint = 32,
    /// `DXGI_FORMAT_R16G16_TYPELESS`.
    R16G16Typeless = 33,
    /// `DXGI_FORMAT_R16G16_FLOAT`.
    R16G16Float = 34,
    /// `DXGI_FORMAT_R16G16_UNORM`.
    R16G16Unorm = 35,
    /// `DXGI_FORMAT_R16G16_UINT`.
    R16G16Uint = 36,
    /// `DXGI_FORMAT_R16G16_SNORM`.
    R16G16Snorm = 37,
    /// `DXGI_FORMAT_R16G16_SINT`.
    R16G16Sint = 38,
    /// `DXGI_FORMAT_R32_TYPELESS`.
    R32Typeless = 39,
    /// `DXGI_FORMAT_D32_FLOAT`.
    D32Float = 40,
    /// `DXGI_FORMAT_R32_FLOAT`.
    R32Float = 41,
    /// `DXGI_FORMAT_R32_UINT`.
    R32Uint = 42,
    /// `DXGI_FORMAT_R32_SINT`.
    R32Sint = 43,
    /// `DXGI_FORMAT_R24G8_TYPELESS`.
    R24G8Typeless = 44,
    /// `DXGI_FORMAT_D24_UNORM_S8_UINT`.
    D24UnormS8Uint = 45,
    /// `DXGI_FORMAT_R24_UNORM_X8_TYPELESS`.
    R24UnormX8Typeless = 46,
    /// `DXGI_FORMAT_X24_TYPELESS_G8_UINT`.
    X24TypelessG8Uint = 47,
    /// `DXGI_FORMAT_R8G8_TYPELESS`.
    R8G8Typeless = 48,
    /// `DXGI_FORMAT_R8G8_UNORM`.
    R8G8Unorm = 49,
    /// `DXGI_FORMAT_R8G8_UINT`.
    R8G8Uint = 50,
    /// `DXGI_FORMAT_R8G8_SNORM`.
    R8G8Snorm = 51,
    /// `DXGI_FORMAT_R8G8_SINT`.
    R8G8Sint = 52,
    /// `DXGI_FORMAT_R16_TYPELESS`.
    R16Typeless = 53,
    /// `DXGI_FORMAT_R16_FLOAT`.
    R16Float = 54,
    /// `DXGI_FORMAT_D16_UNORM`.
    D16Unorm = 55,
    /// `DXGI_FORMAT_R16_UNORM`.
    R16Unorm = 56,
    /// `DXGI_FORMAT_R16_UINT`.
    R16Uint = 57,
    /// `DXGI_FORMAT_R16_SNORM`.
    R16Snorm = 58,
    /// `DXGI_FORMAT_R16_SINT`.
    R16Sint = 59,
    /// `DXGI_FORMAT_R8_TYPELESS`.
    R8Typeless = 60,
    /// `DXGI_FORMAT_R8_UNORM`.
    R8Unorm = 61,
    /// `DXGI_FORMAT_R8_UINT`.
    R8Uint = 62,
    /// `DXGI_FORMAT_R8_SNORM`.
    R8Snorm = 63,
    /// `DXGI_FORMAT_R8_SINT`.
    R8Sint = 64,
    /// `DXGI_FORMAT_A8_UNORM`.
    A8Unorm = 65,
    /// `DXGI_FORMAT_R1_UNORM`.
    R1Unorm = 66,
    /// `DXGI_FORMAT_R9G9B9E5_SHAREDEXP`.
    R9G9B9E5SharedExp = 67,
    /// `DXGI_FORMAT_R8G8_B8G8_UNORM`.
    R8G8B8G8Unorm = 68,
    /// `DXGI_FORMAT_G8R8_G8B8_UNORM`.
    G8R8G8B8Unorm = 69,
    /// `DXGI_FORMAT_BC1_TYPELESS`.
    Bc1Typeless = 70,
    /// `DXGI_FORMAT_BC1_UNORM`.
    Bc1Unorm = 71,
    /// `DXGI_FORMAT_BC1_UNORM_SRGB`.
    Bc1UnormSrgb = 72,
    /// `DXGI_FORMAT_BC2_TYPELESS`.
    Bc2Typeless = 73,
    /// `DXGI_FORMAT_BC2_UNORM`.
    Bc2Unorm = 74,
    /// `DXGI_FORMAT_BC2_UNORM_SRGB`.
    Bc2UnormSrgb = 75,
    /// `DXGI_FORMAT_BC3_TYPELESS`.
    Bc3Typeless = 76,
    /// `DXGI_FORMAT_BC3_UNORM`.
    Bc3Unorm = 77,
    /// `DXGI_FORMAT_BC3_UNORM_SRGB`.
    Bc3UnormSrgb = 78,
    /// `DXGI_FORMAT_BC4_TYPELESS`.
    Bc4Typeless = 79,
    /// `DXGI_FORMAT_BC4_UNORM`.
    Bc4Unorm = 80,
    /// `DXGI_FORMAT_BC4_SNORM`.
    Bc4Snorm = 81,
    /// `DXGI_FORMAT_BC5_TYPELESS`.
    Bc5Typeless = 82,
    /// `DXGI_FORMAT_BC5_UNORM`.
    Bc5Unorm = 83,
    /// `DXGI_FORMAT_BC5_SNORM`.
    Bc5Snorm = 84,
    /// `DXGI_FORMAT_B5G6R5_UNORM`.
    B5G6R5Unorm = 85,
    /// `DXGI_FORMAT_B5G5R5A1_UNORM`.
    B5G5R5A1Unorm = 86,
    /// `DXGI_FORMAT_B8G8R8A8_UNORM`.
    B8G8R8A8Unorm = 87,
    /// `DXGI_FORMAT_B8G8R8X8_UNORM`.
    B8G8R8X8Unorm = 88,
    /// `DXGI_FORMAT_R10G10B10_XR_BIAS_A2_UNORM`.
    R10G10B10XrBiasA2Unorm = 89,
    /// `DXGI_FORMAT_B8G8R8A8_TYPELESS`.
    B8G8R8A8Typeless = 90,
    /// `DXGI_FORMAT_B8G8R8A8_UNORM_SRGB`.
    B8G8R8A8UnormSrgb = 91,
    /// `DXGI_FORMAT_B8G8R8X8_TYPELESS`.
    B8G8R8X8Typeless = 92,
    /// `DXGI_FORMAT_B8G8R8X8_UNORM_SRGB`.
    B8G8R8X8UnormSrgb = 93,
    /// `DXGI_FORMAT_BC6H_TYPELESS`.
    Bc6hTypeless = 94,
    /// `DXGI_FORMAT_BC6H_UF16`.
    Bc6hUf16 = 95,
    /// `DXGI_FORMAT_BC6H_SF16`.
    Bc6hSf16 = 96,
    /// `DXGI_FORMAT_BC7_TYPELESS`.
    Bc7Typeless = 97,
    /// `DXGI_FORMAT_BC7_UNORM`.
    Bc7Unorm = 98,
    /// `DXGI_FORMAT_BC7_UNORM_SRGB`.
    Bc7UnormSrgb = 99,
}

impl Format {
    /// Returns `true` if the format is one of the typeless variants.
    ///
    /// The depth/stencil planar aliases `R32_FLOAT_X8X24_TYPELESS` and
    /// `R24_UNORM_X8_TYPELESS` count as typeless; their stencil counterparts
    /// `X32_TYPELESS_G8X24_UINT` and `X24_TYPELESS_G8_UINT` do not.
    pub const fn is_typeless(self) -> bool {
        matches!(
            self,
            Format::R32G32B32A32Typeless
            | Format::R32G32B32Typeless
            | Format::R16G16B16A16Typeless
            | Format::R32G32Typeless
            | Format::R32G8X24Typeless
            | Format::R32FloatX8X24Typeless
            | Format::R10G10B10A2Typeless
            | Format::R8G8B8A8Typeless
            | Format::R16G16Typeless
            | Format::R32Typeless
            | Format::R24G8Typeless
            | Format::R24UnormX8Typeless
            | Format::R8G8Typeless
            | Format::R16Typeless
            | Format::R8Typeless
            | Format::Bc1Typeless
            | Format::Bc2Typeless
            | Format::Bc3Typeless
            | Format::Bc4Typeless
            | Format::Bc5Typeless
            | Format::B8G8R8A8Typeless
            | Format::B8G8R8X8Typeless
            | Format::Bc6hTypeless
            | Format::Bc7Typeless
        )
    }

    /// Returns the native `DXGI_FORMAT` value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Maps a native `DXGI_FORMAT` value back to a [`Format`].
    ///
    /// Returns `None` for values outside the buffer/texture block (video and
    /// palettized formats are not part of this model).
    pub const fn from_raw(raw: u32) -> Option<Self> {
        let format = match raw {
            0 => Format::Unknown,
            1 => Format::R32G32B32A32Typeless,
            2 => Format::R32G32B32A32Float,
            3 => Format::R32G32B32A32Uint,
            4 => Format::R32G32B32A32Sint,
            5 => Format::R32G32B32Typeless,
            6 => Format::R32G32B32Float,
            7 => Format::R32G32B32Uint,
            8 => Format::R32G32B32Sint,
            9 => Format::R16G16B16A16Typeless,
            10 => Format::R16G16B16A16Float,
            11 => Format::R16G16B16A16Unorm,
            12 => Format::R16G16B16A16Uint,
            13 => Format::R16G16B16A16Snorm,
            14 => Format::R16G16B16A16Sint,
            15 => Format::R32G32Typeless,
            16 => Format::R32G32Float,
            17 => Format::R32G32Uint,
            18 => Format::R32G32Sint,
            19 => Format::R32G8X24Typeless,
            20 => Format::D32FloatS8X24Uint,
            21 => Format::R32FloatX8X24Typeless,
            22 => Format::X32TypelessG8X24Uint,
            23 => Format::R10G10B10A2Typeless,
            24 => Format::R10G10B10A2Unorm,
            25 => Format::R10G10B10A2Uint,
            26 => Format::R11G11B10Float,
            27 => Format::R8G8B8A8Typeless,
            28 => Format::R8G8B8A8Unorm,
            29 => Format::R8G8B8A8UnormSrgb,
            30 => Format::R8G8B8A8Uint,
            31 => Format::R8G8B8A8Snorm,
            32 => Format::R8G8B8A8Sint,
            33 => Format::R16G16Typeless,
            34 => Format::R16G16Float,
            35 => Format::R16G16Unorm,
            36 => Format::R16G16Uint,
            37 => Format::R16G16Snorm,
            38 => Format::R16G16Sint,
            39 => Format::R32Typeless,
            40 => Format::D32Float,
            41 => Format::R32Float,
            42 => Format::R32Uint,
            43 => Format::R32Sint,
            44 => Format::R24G8Typeless,
            45 => Format::D24UnormS8Uint,
            46 => Format::R24UnormX8Typeless,
            47 => Format::X24TypelessG8Uint,
            48 => Format::R8G8Typeless,
            49 => Format::R8G8Unorm,
            50 => Format::R8G8Uint,
            51 => Format::R8G8Snorm,
            52 => Format::R8G8Sint,
            53 => Format::R16Typeless,
            54 => Format::R16Float,
            55 => Format::D16Unorm,
            56 => Format::R16Unorm,
            57 => Format::R16Uint,
            58 => Format::R16Snorm,
            59 => Format::R16Sint,
            60 => Format::R8Typeless,
            61 => Format::R8Unorm,
            62 => Format::R8Uint,
            63 => Format::R8Snorm,
            64 => Format::R8Sint,
            65 => Format::A8Unorm,
            66 => Format::R1Unorm,
            67 => Format::R9G9B9E5SharedExp,
            68 => Format::R8G8B8G8Unorm,
            69 => Format::G8R8G8B8Unorm,
            70 => Format::Bc1Typeless,
            71 => Format::Bc1Unorm,
            72 => Format::Bc1UnormSrgb,
            73 => Format::Bc2Typeless,
            74 => Format::Bc2Unorm,
            75 => Format::Bc2UnormSrgb,
            76 => Format::Bc3Typeless,
            77 => Format::Bc3Unorm,
            78 => Format::Bc3UnormSrgb,
            79 => Format::Bc4Typeless,
            80 => Format::Bc4Unorm,
            81 => Format::Bc4Snorm,
            82 => Format::Bc5Typeless,
            83 => Format::Bc5Unorm,
            84 => Format::Bc5Snorm,
            85 => Format::B5G6R5Unorm,
            86 => Format::B5G5R5A1Unorm,
            87 => Format::B8G8R8A8Unorm,
            88 => Format::B8G8R8X8Unorm,
            89 => Format::R10G10B10XrBiasA2Unorm,
            90 => Format::B8G8R8A8Typeless,
            91 => Format::B8G8R8A8UnormSrgb,
            92 => Format::B8G8R8X8Typeless,
            93 => Format::B8G8R8X8UnormSrgb,
            94 => Format::Bc6hTypeless,
            95 => Format::Bc6hUf16,
            96 => Format::Bc6hSf16,
            97 => Format::Bc7Typeless,
            98 => Format::Bc7Unorm,
            99 => Format::Bc7UnormSrgb,
            _ => return None,
        };
        Some(format)
    }
}
