//! Analysis request sequencing.
//!
//! Every analysis run is tagged when issued. Completions are applied only when
//! they carry the newest tag, so a slow response to an older request can never
//! overwrite data from a newer one.

use crate::domain::market_data::ChartDataMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSequencer {
    latest: u64,
    in_flight: bool,
}

impl AnalysisSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request; it supersedes everything issued before
    pub fn issue(&mut self) -> RequestSeq {
        self.latest += 1;
        self.in_flight = true;
        RequestSeq(self.latest)
    }

    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest
    }

    /// Settle a completion. Returns `false` for a stale one, which must be dropped.
    pub fn complete(&mut self, seq: RequestSeq) -> bool {
        if !self.is_latest(seq) || !self.in_flight {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn latest(&self) -> Option<RequestSeq> {
        (self.latest > 0).then_some(RequestSeq(self.latest))
    }
}

/// Where a completed analysis got its data from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    /// Synthetic fallback; carries no error because it is not a failure state
    Synthetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub data: ChartDataMap,
    pub source: DataSource,
    /// Why the remote path was not used, for the degraded-mode toast
    pub fallback_reason: Option<String>,
}
