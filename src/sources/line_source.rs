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

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::RecordSource;

/// Reads one record per line from a [`BufRead`].
///
/// The trailing `\n` (and `\r\n`) is stripped. One line is read ahead so that
/// `has_next()` can answer without consuming a record. `close()` drops the
/// reader.
pub struct LineSource<R>
where R: BufRead
{
    reader: Option<R>,
    peeked: Option<String>,
}

impl LineSource<BufReader<File>> {
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let path = path.as_ref();
        let f = File::open(path)?;
        debug!("LineSource: opened {}", path.display());
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<R> LineSource<R>
where R: BufRead
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            peeked: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Fill `peeked` with the next line, if there is one.
    fn fill(&mut self) -> Result<(), io::Error> {
        if self.peeked.is_some() {
            return Ok(());
        }

        let Some(reader) = self.reader.as_mut() else {
            return Ok(());
        };

        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.peeked = Some(line);
        Ok(())
    }
}

impl<R> RecordSource for LineSource<R>
where R: BufRead
{
    type Record = String;

    fn has_next(&mut self) -> Result<bool, io::Error> {
        self.fill()?;
        Ok(self.peeked.is_some())
    }

    fn next_record(&mut self) -> Result<String, io::Error> {
        if self.is_closed() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "LineSource is closed",
            ));
        }

        self.fill()?;
        self.peeked
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "LineSource is exhausted"))
    }

    fn close(&mut self) -> Result<(), io::Error> {
        self.reader = None;
        self.peeked = None;
        Ok(())
    }
}
