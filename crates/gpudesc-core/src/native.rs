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

//! The seam between the builder and live resources of a graphics API.

use crate::error::QueryError;
use crate::resource::{HeapFlags, HeapProperties, ResourceDesc};

/// A live GPU resource whose description can be read back.
///
/// Implemented by backend adapters (e.g. for `ID3D12Resource`) and by test
/// doubles. Both methods are read-only queries; the builder calls each at
/// most once per [`ResourceBuilder::from_existing_resource`](crate::ResourceBuilder::from_existing_resource).
pub trait NativeResource {
    /// Returns the resource's description.
    fn desc(&self) -> ResourceDesc;

    /// Returns the properties and flags of the heap the resource lives in.
    ///
    /// # Errors
    /// * `QueryError` - If the backend cannot report heap properties.
    fn heap_properties(&self) -> Result<(HeapProperties, HeapFlags), QueryError>;
}
