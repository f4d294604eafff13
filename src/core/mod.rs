// the matcher: a pure pipeline from two raw text blocks to a classified report

pub mod analyze;
pub mod classify;
pub mod error;
pub mod prefix;
pub mod types;

pub use analyze::analyze;
pub use classify::classify_filename;
pub use error::{AnalyzeError, InputSide};
pub use prefix::extract_prefix;
pub use types::{
    AnalysisReport, AnalysisStats, FileKind, Identifier, MatchRecord, MatchStatus, OrphanFile,
};
