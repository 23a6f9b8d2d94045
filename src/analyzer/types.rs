//! Type definitions specific to the analyzer module.

use std::fmt;
use std::ops::AddAssign;

/// An `observed/expected` packet counter pair.
///
/// The left-hand number is the count that actually happened, the right-hand
/// number the count the test scenario called for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PacketRatio {
    pub observed: u64,
    pub expected: u64,
}

impl AddAssign for PacketRatio {
    fn add_assign(&mut self, other: Self) {
        self.observed += other.observed;
        self.expected += other.expected;
    }
}

impl fmt::Display for PacketRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.observed, self.expected)
    }
}

/// The two counter pairs extracted from a single report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    pub sends: PacketRatio,
    pub receives: PacketRatio,
}

/// Running totals over all parsed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub sends: PacketRatio,
    pub receives: PacketRatio,
    /// Number of records folded into the totals.
    pub records: u64,
}

impl ReportTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the totals.
    pub fn record(&mut self, record: &LogRecord) {
        self.sends += record.sends;
        self.receives += record.receives;
        self.records += 1;
    }
}
