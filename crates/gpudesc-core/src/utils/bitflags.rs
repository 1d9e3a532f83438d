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

//! A macro to define typed bitflag sets backed by an integer.
#[macro_export]
#[doc(hidden)]
macro_rules! gpudesc_bitflags {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag_name:ident = $flag_value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name {
            pub(crate) bits: $ty,
        }

        impl $name {
            /// An empty set of flags.
            pub const EMPTY: Self = Self { bits: 0 };

            /// Creates a flag set from raw bits.
            /// Bits not corresponding to any defined flag are retained so that
            /// values read back from the native API survive unchanged.
            pub const fn from_bits_retain(bits: $ty) -> Self {
                Self { bits }
            }

            /// Returns the raw value of the flag set.
            pub const fn bits(&self) -> $ty {
                self.bits
            }

            /// Returns `true` if no bit is set.
            pub const fn is_empty(&self) -> bool {
                self.bits == 0
            }

            /// Returns `true` if all flags in `other` are contained within `self`.
            pub const fn contains(&self, other: Self) -> bool {
                (self.bits & other.bits) == other.bits
            }

            $(
                $(#[$flag_attr])*
                pub const $flag_name: Self = Self { bits: $flag_value };
            )*
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self { bits: self.bits | other.bits }
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self { bits: self.bits & other.bits }
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.bits |= other.bits;
            }
        }

        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                self.bits &= other.bits;
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut bits = self.bits;
                let mut first_flag = true;

                write!(f, "{} {{ ", stringify!($name))?;

                $(
                    // Zero-valued constants (e.g. NONE) never print as a named flag.
                    if ($flag_value != 0) && (bits & $flag_value) == $flag_value {
                        if !first_flag {
                            write!(f, " | ")?;
                        }
                        write!(f, "{}", stringify!($flag_name))?;
                        bits &= !$flag_value;
                        first_flag = false;
                    }
                )*

                if bits != 0 {
                    if !first_flag {
                        write!(f, " | ")?;
                    }
                    write!(f, "UNKNOWN({:#x})", bits)?;
                    first_flag = false;
                }

                if self.bits == 0 && first_flag {
                    write!(f, "EMPTY")?;
                }

                write!(f, " }}")
            }
        }
    };
}

#[cfg(test)]
mod tests {
    gpudesc_bitflags! {
        /// Flags used to exercise the macro.
        pub struct AccessFlags: u32 {
            const NONE = 0;
            const READ = 0x1;
            const WRITE = 0x2;
            const EXECUTE = 0x8;
            const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
        }
    }

    #[test]
    fn empty_flags_debug_as_empty() {
        let flags = AccessFlags::EMPTY;
        assert!(flags.is_empty());
        assert_eq!(AccessFlags::default(), AccessFlags::NONE);
        assert_eq!(format!("{:?}", flags), "AccessFlags { EMPTY }");
    }

    #[test]
    fn combined_flags() {
        let flags = AccessFlags::READ | AccessFlags::EXECUTE;
        assert_eq!(flags.bits(), 0x9);
        assert!(flags.contains(AccessFlags::READ));
        assert!(!flags.contains(AccessFlags::READ_WRITE));
        assert_eq!(format!("{:?}", flags), "AccessFlags { READ | EXECUTE }");
    }

    #[test]
    fn composite_constant_prints_first_matching_names() {
        assert_eq!(
            format!("{:?}", AccessFlags::READ_WRITE),
            "AccessFlags { READ | WRITE }"
        );
    }

    #[test]
    fn assign_operators() {
        let mut flags = AccessFlags::EMPTY;
        flags |= AccessFlags::WRITE;
        flags |= AccessFlags::READ;
        assert_eq!(flags, AccessFlags::READ_WRITE);

        flags &= AccessFlags::READ;
        assert_eq!(flags, AccessFlags::READ);
        assert_eq!(flags & AccessFlags::WRITE, AccessFlags::EMPTY);
    }

    #[test]
    fn unknown_bits_are_retained() {
        let flags = AccessFlags::from_bits_retain(0x1 | 0x40);
        assert_eq!(flags.bits(), 0x41);
        assert_eq!(format!("{:?}", flags), "AccessFlags { READ | UNKNOWN(0x40) }");
    }
}
