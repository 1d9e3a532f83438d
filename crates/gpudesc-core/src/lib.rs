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

//! # gpudesc Core
//!
//! Builds GPU resource descriptions (buffers and 1D/2D/3D textures) and
//! derives the render target, depth-stencil and shader resource view
//! descriptors that match them.
//!
//! The crate is pure data: it never talks to a device. Backend adapters
//! (see `gpudesc-infra`) convert the descriptors into native structures and
//! implement [`NativeResource`] so existing resources can be read back.

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod native;
pub mod resource;
pub mod settings;
pub mod utils;

pub use builder::ResourceBuilder;
pub use error::QueryError;
pub use native::NativeResource;
pub use resource::*;
pub use settings::{BuilderSettings, RangeClamp};
