// full analysis entry point

use tracing::debug;

use crate::core::error::{AnalyzeError, InputSide};
use crate::core::types::{
    AnalysisReport, AnalysisStats, Identifier, MatchRecord, MatchStatus, OrphanFile,
};

/// Working state of one analysis run. Counters and buckets accumulate while
/// the two input blocks stream through; `into_report` freezes them into the
/// report value types. Nothing survives between runs.
#[derive(Debug, Default)]
pub(crate) struct Matcher {
    pub(crate) identifiers: Vec<Identifier>,
    //parallel to identifiers: files routed to each retained line number
    pub(crate) upvf_buckets: Vec<Vec<String>>,
    pub(crate) upvc_buckets: Vec<Vec<String>>,
    pub(crate) orphans: Vec<OrphanFile>,
    pub(crate) duplicate_identifiers: usize,
    pub(crate) blank_lines: usize,
    pub(crate) malformed_filenames: usize,
}

/// Run a full analysis from scratch:
/// - collects and dedups line numbers from `identifiers_text`
/// - routes every filename in `filenames_text` to a line number, the orphan
///   list, or the malformed counter
/// - derives one record per retained line number plus aggregate stats
///
/// Pure function of the two blocks; calling it twice on identical input
/// yields identical reports. The only hard failure is an input that is
/// empty after trimming — malformed and orphaned entries are tallied
/// outcomes, never errors.
pub fn analyze(
    identifiers_text: &str,
    filenames_text: &str,
) -> Result<AnalysisReport, AnalyzeError> {
    if identifiers_text.trim().is_empty() {
        return Err(AnalyzeError::MissingInput {
            which: InputSide::Identifiers,
        });
    }
    if filenames_text.trim().is_empty() {
        return Err(AnalyzeError::MissingInput {
            which: InputSide::Filenames,
        });
    }

    let mut matcher = Matcher::default();
    matcher.collect_identifiers(identifiers_text);

    //blank filename lines are discarded uncounted; only the line-number
    //list keeps a blank counter
    for line in filenames_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        matcher.route_filename(line);
    }

    Ok(matcher.into_report())
}

impl Matcher {
    //freeze working state into the report:
    // both kinds present -> Complete
    // neither            -> MissingBoth
    // one absent         -> the absent kind is named
    pub(crate) fn into_report(self) -> AnalysisReport {
        let Matcher {
            identifiers,
            upvf_buckets,
            upvc_buckets,
            orphans,
            duplicate_identifiers,
            blank_lines,
            malformed_filenames,
        } = self;

        let mut stats = AnalysisStats {
            total_identifiers: identifiers.len(),
            orphan_files: orphans.len(),
            duplicate_identifiers,
            blank_lines,
            malformed_filenames,
            ..Default::default()
        };

        let records: Vec<MatchRecord> = identifiers
            .into_iter()
            .zip(upvf_buckets.into_iter().zip(upvc_buckets))
            .map(|(id, (upvf_files, upvc_files))| {
                let has_upvf = !upvf_files.is_empty();
                let has_upvc = !upvc_files.is_empty();
                let status = MatchStatus::from_presence(has_upvf, has_upvc);

                match status {
                    MatchStatus::Complete => stats.complete_matches += 1,
                    MatchStatus::MissingUpvf => stats.missing_upvf += 1,
                    MatchStatus::MissingUpvc => stats.missing_upvc += 1,
                    MatchStatus::MissingBoth => stats.missing_both += 1,
                }

                let Identifier { raw, prefix } = id;
                MatchRecord {
                    identifier: raw,
                    prefix,
                    has_upvf,
                    has_upvc,
                    status,
                    upvf_files,
                    upvc_files,
                }
            })
            .collect();

        debug!(
            total = stats.total_identifiers,
            complete = stats.complete_matches,
            orphans = stats.orphan_files,
            duplicates = stats.duplicate_identifiers,
            malformed = stats.malformed_filenames,
            "analysis finished"
        );

        AnalysisReport {
            records,
            orphans,
            stats,
        }
    }
}
