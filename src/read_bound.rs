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

use crate::BoundedSequence;
use crate::RecordSource;

/// How many records a pipeline stage may read from its source.
///
/// Deserializes from e.g. `{"max_records": 1000}`; a missing field means
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReadBound {
    #[serde(default = "ReadBound::unbounded_max")]
    pub max_records: u64,
}

impl Default for ReadBound {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ReadBound {
    pub fn new(max_records: u64) -> Self {
        Self { max_records }
    }

    pub fn unbounded() -> Self {
        Self::new(Self::unbounded_max())
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_records == u64::MAX
    }

    /// Bound `source` by this limit.
    pub fn apply<S>(&self, source: S) -> BoundedSequence<S>
    where S: RecordSource {
        BoundedSequence::open(source, self.max_records)
    }

    fn unbounded_max() -> u64 {
        u64::MAX
    }
}

impl From<u64> for ReadBound {
    fn from(max_records: u64) -> Self {
        Self::new(max_records)
    }
}
