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

/// A closable, pull-based producer of records.
///
/// Callers follow a check-then-act protocol: ask [`has_next`](Self::has_next)
/// before each [`next_record`](Self::next_record). What `next_record` does when
/// no record is available is up to the implementation.
pub trait RecordSource {
    type Record;

    /// Returns `true` if another record can be retrieved.
    ///
    /// Does not consume a record.
    fn has_next(&mut self) -> Result<bool, io::Error>;

    /// Retrieve the next record.
    fn next_record(&mut self) -> Result<Self::Record, io::Error>;

    /// Release the resources held by this source.
    fn close(&mut self) -> Result<(), io::Error>;
}

impl<S> RecordSource for &mut S
where S: RecordSource + ?Sized
{
    type Record = S::Record;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        (**self).has_next()
    }

    fn next_record(&mut self) -> Result<Self::Record, io::Error> {
        (**self).next_record()
    }

    fn close(&mut self) -> Result<(), io::Error> {
        (**self).close()
    }
}

impl<S> RecordSource for Box<S>
where S: RecordSource + ?Sized
{
    type Record = S::Record;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        (**self).has_next()
    }

    fn next_record(&mut self) -> Result<Self::Record, io::Error> {
        (**self).next_record()
    }

    fn close(&mut self) -> Result<(), io::Error> {
        (**self).close()
    }
}
