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

//! # Bounded Records
//!
//! Truncate a closable record source after a fixed number of records, and
//! release the source as soon as no more records will be produced.
//!
//! ## Core Components
//!
//! - [`RecordSource`]: A closable, pull-based producer of records
//! - [`BoundedSequence`]: A [`RecordSource`] decorator that yields at most `limit` records
//! - [`ReadBound`]: Serializable limit configuration
//! - [`sources`]: Ready-made sources over iterators and line-oriented readers
//!
//! ## Usage Example
//!
//! ```rust
//! use bounded_records::sources::IterSource;
//! use bounded_records::BoundedSequence;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut seq = BoundedSequence::open(IterSource::new(["r1", "r2", "r3", "r4"]), 2);
//!
//! let mut got = vec![];
//! while seq.has_more()? {
//!     got.push(seq.next_record()?);
//! }
//!
//! assert_eq!(got, vec!["r1", "r2"]);
//! // The source was closed by the last `has_more()`.
//! assert!(!seq.is_open());
//! # Ok(())
//! # }
//! ```

pub mod bounded;
pub mod errors;
pub mod read_bound;
pub mod record_source;
pub mod sequence_stat;
pub mod sources;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::bounded::BoundedSequence;
pub use crate::errors::BoundedError;
pub use crate::read_bound::ReadBound;
pub use crate::record_source::RecordSource;
pub use crate::sequence_stat::SequenceStat;
