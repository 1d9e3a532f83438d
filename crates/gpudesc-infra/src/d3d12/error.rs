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

//! Errors of the Direct3D 12 adapter.

use gpudesc_core::QueryError;
use thiserror::Error;

/// An error raised while reading Direct3D 12 data.
#[derive(Error, Debug)]
pub enum D3d12Error {
    /// A native enum value has no counterpart in the core model.
    #[error("Unknown native {kind} value: {raw}")]
    UnknownValue {
        /// The kind of value, e.g. `"format"`.
        kind: &'static str,
        /// The raw native value.
        raw: i64,
    },

    /// A Direct3D 12 call returned a failure code.
    #[cfg(windows)]
    #[error("Direct3D 12 call failed: {0}")]
    Api(#[from] windows::core::Error),
}

impl D3d12Error {
    pub(crate) fn unknown(kind: &'static str, raw: i32) -> Self {
        D3d12Error::UnknownValue {
            kind,
            raw: i64::from(raw),
        }
    }
}

impl From<D3d12Error> for QueryError {
    fn from(err: D3d12Error) -> Self {
        match err {
            D3d12Error::UnknownValue { kind, raw } => QueryError::UnknownValue { kind, raw },
            #[cfg(windows)]
            D3d12Error::Api(e) => QueryError::Backend(e.to_string()),
        }
    }
}
