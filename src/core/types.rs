// report value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two required file kinds. A line number is complete only when both
/// kinds have at least one matching file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Upvf,
    Upvc,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Upvf => "upvf",
            FileKind::Upvc => "upvc",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/*

Complete:     upvf present ∧ upvc present
MissingUpvf:  upvc present ∧ upvf absent
MissingUpvc:  upvf present ∧ upvc absent
MissingBoth:  neither kind present

*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Complete,
    MissingUpvf,
    MissingUpvc,
    MissingBoth,
}

impl MatchStatus {
    //derived purely from the two presence booleans, nothing else
    pub fn from_presence(has_upvf: bool, has_upvc: bool) -> Self {
        match (has_upvf, has_upvc) {
            (true, true) => MatchStatus::Complete,
            (false, false) => MatchStatus::MissingBoth,
            (false, true) => MatchStatus::MissingUpvf,
            (true, false) => MatchStatus::MissingUpvc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Complete => "complete",
            MatchStatus::MissingUpvf => "missing-upvf",
            MatchStatus::MissingUpvc => "missing-upvc",
            MatchStatus::MissingBoth => "missing-both",
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, MatchStatus::Complete)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(MatchStatus::Complete),
            "missing-upvf" => Ok(MatchStatus::MissingUpvf),
            "missing-upvc" => Ok(MatchStatus::MissingUpvc),
            "missing-both" => Ok(MatchStatus::MissingBoth),
            other => Err(format!(
                "unknown status '{other}' (expected complete, missing-upvf, missing-upvc or missing-both)"
            )),
        }
    }
}

/// A retained line number together with its derived grouping prefix.
/// Construction and the prefix rule live in `core::prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub raw: String,
    pub prefix: String,
}

/// One row of the report: a retained line number plus everything the
/// matcher learned about its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub identifier: String,
    pub prefix: String,
    pub has_upvf: bool,
    pub has_upvc: bool,
    pub status: MatchStatus,
    pub upvf_files: Vec<String>,
    pub upvc_files: Vec<String>,
}

/// A classified file whose base name matches no retained line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanFile {
    pub filename: String,
    pub base_name: String,
    pub kind: FileKind,
}

/// Aggregate counters over one analysis run. Derived during record
/// assembly, never independently mutable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Retained line numbers after prefix dedup.
    pub total_identifiers: usize,
    /// Records with both file kinds present.
    pub complete_matches: usize,
    /// Records missing their upvf file(s) only.
    pub missing_upvf: usize,
    /// Records missing their upvc file(s) only.
    pub missing_upvc: usize,
    /// Records with no file of either kind.
    pub missing_both: usize,
    /// Classified files matching no retained line number.
    pub orphan_files: usize,
    /// Line numbers dropped by prefix dedup.
    pub duplicate_identifiers: usize,
    /// Blank lines skipped in the line-number list.
    pub blank_lines: usize,
    /// Filenames carrying neither required suffix.
    pub malformed_filenames: usize,
}

impl AnalysisStats {
    /// Complete records as a percentage of retained line numbers
    /// (0 when nothing was retained).
    pub fn completion_rate(&self) -> f64 {
        if self.total_identifiers == 0 {
            return 0.0;
        }
        self.complete_matches as f64 / self.total_identifiers as f64 * 100.0
    }
}

/// Everything one `analyze` call produces: records in line-number input
/// order, orphans in filename input order, and the counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub records: Vec<MatchRecord>,
    pub orphans: Vec<OrphanFile>,
    pub stats: AnalysisStats,
}
