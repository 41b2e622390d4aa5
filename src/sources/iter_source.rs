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
use std::iter::Peekable;

use crate::RecordSource;

/// Adapts an [`Iterator`] into a [`RecordSource`].
///
/// After `close()` the source reports no more records and `next_record()`
/// fails with [`io::ErrorKind::NotConnected`].
pub struct IterSource<I>
where I: Iterator
{
    inner: Peekable<I>,
    closed: bool,
}

impl<I> IterSource<I>
where I: Iterator
{
    pub fn new(it: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: it.into_iter().peekable(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<I> RecordSource for IterSource<I>
where I: Iterator
{
    type Record = I::Item;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        if self.closed {
            return Ok(false);
        }
        Ok(self.inner.peek().is_some())
    }

    fn next_record(&mut self) -> Result<Self::Record, io::Error> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "IterSource is closed",
            ));
        }

        self.inner
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "IterSource is exhausted"))
    }

    fn close(&mut self) -> Result<(), io::Error> {
        self.closed = true;
        Ok(())
    }
}
