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
use std::iter::FusedIterator;

use log::debug;
use log::warn;

use crate::BoundedError;
use crate::RecordSource;
use crate::SequenceStat;

/// A [`RecordSource`] decorator that yields at most `limit` records.
///
/// The sequence owns its source and closes it as soon as it is known that no
/// more records will be produced: the source is exhausted, the limit is
/// reached, or [`close()`](Self::close) is called. The source is closed at
/// most once.
///
/// States:
/// - `Open(emitted, limit, source)`: `source` is `Some`.
/// - `Closed`: `source` is `None`. Terminal.
pub struct BoundedSequence<S>
where S: RecordSource
{
    limit: u64,
    emitted: u64,
    source: Option<S>,
}

impl<S> BoundedSequence<S>
where S: RecordSource
{
    /// Create a bounded sequence over an optional source.
    ///
    /// With `None` the sequence starts closed and behaves as an exhausted one.
    pub fn new(source: Option<S>, limit: u64) -> Self {
        Self {
            limit,
            emitted: 0,
            source,
        }
    }

    /// Create an open bounded sequence over `source`.
    pub fn open(source: S, limit: u64) -> Self {
        Self::new(Some(source), limit)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of records handed out by [`next_record()`](Self::next_record) so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    /// The most records this sequence may still yield.
    pub fn remaining(&self) -> u64 {
        if self.is_open() {
            self.limit.saturating_sub(self.emitted)
        } else {
            0
        }
    }

    pub fn stat(&self) -> SequenceStat {
        SequenceStat {
            limit: self.limit,
            emitted: self.emitted,
            open: self.is_open(),
        }
    }

    /// Returns `true` if the sequence is open, below its limit and the source has more records.
    ///
    /// Postcondition: if the sequence was open and this returns `false`, the
    /// source has been closed. Callers that only loop on `has_more()` never
    /// need to call [`close()`](Self::close).
    ///
    /// The limit is checked before the source is asked, so a source is never
    /// peeked past the bound.
    pub fn has_more(&mut self) -> Result<bool, io::Error> {
        let Some(source) = self.source.as_mut() else {
            return Ok(false);
        };

        if self.emitted < self.limit && source.has_next()? {
            return Ok(true);
        }

        debug!(
            "BoundedSequence: no more records, closing source: emitted={} limit={}",
            self.emitted, self.limit
        );
        self.close()?;
        Ok(false)
    }

    /// Retrieve the next record from the source.
    ///
    /// The limit is not checked here: call [`has_more()`](Self::has_more)
    /// first. Past the limit or past exhaustion, the result is whatever the
    /// source returns.
    pub fn next_record(&mut self) -> Result<S::Record, BoundedError> {
        let Some(source) = self.source.as_mut() else {
            return Err(BoundedError::IllegalState(
                "cannot advance a closed sequence",
            ));
        };

        self.emitted += 1;
        let record = source.next_record()?;
        Ok(record)
    }

    /// Always fails: records can not be removed through a bounded sequence.
    pub fn remove(&mut self) -> Result<(), BoundedError> {
        Err(BoundedError::Unsupported(
            "cannot remove a record through a bounded sequence",
        ))
    }

    /// Close the sequence and its source.
    ///
    /// The sequence is marked closed before the source's `close()` is called,
    /// thus calling it again, even after a failed close, is a no-op.
    pub fn close(&mut self) -> Result<(), io::Error> {
        let Some(mut source) = self.source.take() else {
            return Ok(());
        };

        debug!(
            "BoundedSequence: close source: emitted={} limit={}",
            self.emitted, self.limit
        );
        source.close()
    }

    /// A single-pass iterator view of this sequence.
    ///
    /// The view is the sequence itself; iterating again continues where the
    /// last iteration stopped.
    pub fn iter(&mut self) -> &mut Self {
        self
    }
}

impl<S> Iterator for BoundedSequence<S>
where S: RecordSource
{
    type Item = Result<S::Record, BoundedError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_more() {
            Ok(true) => Some(self.next_record()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = usize::try_from(self.remaining()).ok();
        (0, upper)
    }
}

// `next()` returns `None` only once the sequence is closed, and closed is terminal.
impl<S> FusedIterator for BoundedSequence<S> where S: RecordSource {}

impl<S> RecordSource for BoundedSequence<S>
where S: RecordSource
{
    type Record = S::Record;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        self.has_more()
    }

    fn next_record(&mut self) -> Result<Self::Record, io::Error> {
        let record = BoundedSequence::next_record(self)?;
        Ok(record)
    }

    fn close(&mut self) -> Result<(), io::Error> {
        BoundedSequence::close(self)
    }
}

impl<S> Drop for BoundedSequence<S>
where S: RecordSource
{
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("BoundedSequence: failed to close source on drop: {}", e);
        }
    }
}
