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

//! Backend-agnostic data model of the resource builder.
//!
//! - **[`format`]**: element formats and the typeless test.
//! - **[`desc`]**: the resource description (dimension, extent, usage flags).
//! - **[`heap`]**: heap placement properties.
//! - **[`view`]**: view dimensions, view descriptors and view parameters.
//!
//! Every enum carries the numeric value of its native counterpart through
//! `to_raw`/`from_raw`, which is what backend adapters convert through.

pub mod desc;
pub mod format;
pub mod heap;
pub mod view;

pub use self::desc::*;
pub use self::format::*;
pub use self::heap::*;
pub use self::view::*;
