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

//! Errors reported by native resource queries.

use std::fmt;

/// An error raised while reading the properties of a live native resource.
///
/// The builder never surfaces these to its caller; they exist so that
/// [`NativeResource`](crate::NativeResource) implementations can describe
/// why a query failed, which the builder logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The resource has no heap properties, e.g. a reserved (tiled) resource.
    NoHeapProperties,
    /// The native API reported a value this model has no variant for.
    UnknownValue {
        /// The kind of value, e.g. `"heap type"`.
        kind: &'static str,
        /// The raw native value.
        raw: i64,
    },
    /// A backend-specific failure, such as a failed API call.
    Backend(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoHeapProperties => {
                write!(f, "The resource has no heap properties.")
            }
            QueryError::UnknownValue { kind, raw } => {
                write!(f, "Unknown native {kind} value: {raw}")
            }
            QueryError::Backend(msg) => {
                write!(f, "Native resource query failed: {msg}")
            }
        }
    }
}

impl std::error::Error for QueryError {}
