// Copyright 2021 Datafuse Labs
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

use std::io;

/// Errors returned by [`BoundedSequence`](crate::BoundedSequence) operations.
#[derive(thiserror::Error, Debug)]
pub enum BoundedError {
    /// The sequence is already closed and can not be advanced.
    #[error("IllegalState: {0}")]
    IllegalState(&'static str),

    /// The operation is never supported on a bounded sequence.
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),

    /// Error raised by the underlying source, passed through as is.
    #[error(transparent)]
    Source(#[from] io::Error),
}

impl BoundedError {
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, BoundedError::IllegalState(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, BoundedError::Unsupported(_))
    }
}

impl From<BoundedError> for io::Error {
    fn from(e: BoundedError) -> Self {
        match e {
            BoundedError::Source(io_err) => io_err,
            BoundedError::Unsupported(_) => io::Error::new(io::ErrorKind::Unsupported, e),
            BoundedError::IllegalState(_) => io::Error::other(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        let e = BoundedError::IllegalState("cannot advance a closed sequence");
        assert_eq!(e.to_string(), "IllegalState: cannot advance a closed sequence");

        let e = BoundedError::Unsupported("remove");
        assert_eq!(e.to_string(), "Unsupported: remove");
    }

    #[test]
    fn test_source_error_is_transparent() {
        let e: BoundedError = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated").into();

        assert_eq!(e.to_string(), "truncated");
        assert!(!e.is_illegal_state());
        assert!(!e.is_unsupported());

        let back: io::Error = e.into();
        assert_eq!(back.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(back.to_string(), "truncated");
    }

    #[test]
    fn test_into_io_error_kind() {
        let e: io::Error = BoundedError::Unsupported("remove").into();
        assert_eq!(e.kind(), io::ErrorKind::Unsupported);
        assert!(e.get_ref().is_some());

        let e: io::Error = BoundedError::IllegalState("closed").into();
        assert_eq!(e.kind(), io::ErrorKind::Other);
        assert_eq!(e.to_string(), "IllegalState: closed");
    }
}
