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

//! Settings that tune how the builder fills in descriptors.

use crate::resource::HeapType;

/// How view range counts are computed when the requested base index lies
/// beyond the available mips or slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeClamp {
    /// `min(available, requested) - base` wraps around in 32 bits, matching
    /// native unsigned subtraction. A base past the end yields a huge count.
    #[default]
    Wrapping,
    /// The subtraction saturates at zero instead of wrapping.
    Saturating,
}

impl RangeClamp {
    /// Computes `min(available, requested) - base` under this policy.
    pub fn count(self, available: u16, requested: u16, base: u16) -> u32 {
        let upper = u32::from(available.min(requested));
        match self {
            RangeClamp::Wrapping => upper.wrapping_sub(u32::from(base)),
            RangeClamp::Saturating => upper.saturating_sub(u32::from(base)),
        }
    }
}

/// A collection of settings applied by a [`ResourceBuilder`](crate::ResourceBuilder).
///
/// Settings survive shape constructors; only the shape state is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderSettings {
    /// Heap type assigned by the texture constructors. Buffers are left unset.
    pub texture_heap_type: HeapType,
    /// Arithmetic used for mip and array counts of views.
    pub range_clamp: RangeClamp,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            texture_heap_type: HeapType::Default,
            range_clamp: RangeClamp::Wrapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_reproduces_native_underflow() {
        assert_eq!(RangeClamp::Wrapping.count(4, 3, 1), 2);
        assert_eq!(RangeClamp::Wrapping.count(4, 2048, 4), 0);
        assert_eq!(RangeClamp::Wrapping.count(4, 2048, 5), u32::MAX);
        assert_eq!(RangeClamp::Wrapping.count(1, 1, 3), u32::MAX - 1);
    }

    #[test]
    fn saturating_stops_at_zero() {
        assert_eq!(RangeClamp::Saturating.count(4, 3, 1), 2);
        assert_eq!(RangeClamp::Saturating.count(4, 2048, 5), 0);
    }

    #[test]
    fn defaults_keep_native_behavior() {
        let settings = BuilderSettings::default();
        assert_eq!(settings.texture_heap_type, HeapType::Default);
        assert_eq!(settings.range_clamp, RangeClamp::Wrapping);
    }
}
