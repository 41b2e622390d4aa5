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

//! Test-only record sources that count the calls made on them.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::RecordSource;

/// Call counters shared between a [`SpySource`] and the test that built it.
#[derive(Debug, Default)]
pub(crate) struct Calls {
    pub(crate) has_next: Cell<usize>,
    pub(crate) next_record: Cell<usize>,
    pub(crate) close: Cell<usize>,
}

impl Calls {
    pub(crate) fn has_next(&self) -> usize {
        self.has_next.get()
    }

    pub(crate) fn next_record(&self) -> usize {
        self.next_record.get()
    }

    pub(crate) fn close(&self) -> usize {
        self.close.get()
    }

    pub(crate) fn total(&self) -> usize {
        self.has_next() + self.next_record() + self.close()
    }

    fn incr(c: &Cell<usize>) {
        c.set(c.get() + 1);
    }
}

/// A source over an in-memory list of records.
///
/// Unlike a well-behaved resource it does not guard against double close, so a
/// close count above 1 shows up in [`Calls::close`].
pub(crate) struct SpySource<T> {
    records: VecDeque<T>,
    calls: Rc<Calls>,
    fail_close: bool,
    fail_next: bool,
}

impl<T> SpySource<T> {
    pub(crate) fn new(records: impl IntoIterator<Item = T>) -> (Self, Rc<Calls>) {
        let calls = Rc::new(Calls::default());
        let spy = Self {
            records: records.into_iter().collect(),
            calls: calls.clone(),
            fail_close: false,
            fail_next: false,
        };
        (spy, calls)
    }

    /// Make `close()` return an error.
    pub(crate) fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Make `next_record()` return an error.
    pub(crate) fn fail_next(mut self) -> Self {
        self.fail_next = true;
        self
    }
}

impl<T> RecordSource for SpySource<T> {
    type Record = T;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        Calls::incr(&self.calls.has_next);
        Ok(!self.records.is_empty())
    }

    fn next_record(&mut self) -> Result<T, io::Error> {
        Calls::incr(&self.calls.next_record);

        if self.fail_next {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "corrupted record"));
        }

        self.records
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more records"))
    }

    fn close(&mut self) -> Result<(), io::Error> {
        Calls::incr(&self.calls.close);

        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "close failed"));
        }
        Ok(())
    }
}
