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

use std::fmt;

/// A point-in-time snapshot of a [`BoundedSequence`](crate::BoundedSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SequenceStat {
    pub limit: u64,
    pub emitted: u64,
    pub open: bool,
}

impl SequenceStat {
    /// Returns `true` if every record allowed by the limit has been emitted.
    pub fn is_limit_reached(&self) -> bool {
        self.emitted >= self.limit
    }
}

impl fmt::Display for SequenceStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.open { "open" } else { "closed" };
        write!(f, "{}/{}({})", self.emitted, self.limit, state)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        let stat = SequenceStat {
            limit: 3,
            emitted: 1,
            open: true,
        };
        assert_eq!(stat.to_string(), "1/3(open)");

        let stat = SequenceStat {
            limit: 3,
            emitted: 3,
            open: false,
        };
        assert_eq!(stat.to_string(), "3/3(closed)");
    }

    #[test]
    fn test_is_limit_reached() {
        let mut stat = SequenceStat {
            limit: 2,
            emitted: 1,
            open: true,
        };
        assert!(!stat.is_limit_reached());

        stat.emitted = 2;
        assert!(stat.is_limit_reached());

        stat.limit = 0;
        stat.emitted = 0;
        assert!(stat.is_limit_reached());
    }

    #[test]
    fn test_serde() -> anyhow::Result<()> {
        let stat = SequenceStat {
            limit: 3,
            emitted: 3,
            open: false,
        };

        let s = serde_json::to_string(&stat)?;
        assert_eq!(s, r#"{"limit":3,"emitted":3,"open":false}"#);

        let got: SequenceStat = serde_json::from_str(&s)?;
        assert_eq!(got, stat);
        Ok(())
    }
}
