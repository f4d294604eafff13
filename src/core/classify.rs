// filename classification + routing
//which kind is this file, and which retained line number takes it?
/*

upvf/upvc:  case-insensitive suffix match, mutually exclusive
base name:  filename minus the matched suffix
match:      base name starts with a retained prefix stem
orphan:     classified file with no matching retained line number
malformed:  neither suffix (counted, never routed)

*/

use tracing::trace;

use crate::core::analyze::Matcher;
use crate::core::types::{FileKind, OrphanFile};

/// Split a filename into (base name, kind) by case-insensitive suffix.
/// Returns None when the name carries neither required suffix.
pub fn classify_filename(name: &str) -> Option<(&str, FileKind)> {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".upvf") {
        Some((&name[..name.len() - 5], FileKind::Upvf))
    } else if lower.ends_with(".upvc") {
        Some((&name[..name.len() - 5], FileKind::Upvc))
    } else {
        None
    }
}

impl Matcher {
    //route one trimmed, non-empty filename line:
    // - classify by suffix; neither kind -> malformed counter
    // - scan retained line numbers in canonical order, the first stem that
    //   string-prefixes the base name takes the file
    // - no taker -> orphan
    //
    //When several retained stems string-prefix the same base name the first
    //one in canonical order wins. Linear-scan-first-match is the contract,
    //not a longest-match policy;
    //overlapping_prefixes_first_retained_identifier_wins pins it.
    pub(crate) fn route_filename(&mut self, name: &str) {
        let Some((base, kind)) = classify_filename(name) else {
            self.malformed_filenames += 1;
            return;
        };

        let slot = self
            .identifiers
            .iter()
            .position(|id| base.starts_with(id.stem()));

        match slot {
            Some(i) => {
                let bucket = match kind {
                    FileKind::Upvf => &mut self.upvf_buckets[i],
                    FileKind::Upvc => &mut self.upvc_buckets[i],
                };
                bucket.push(name.to_string());
            }
            None => {
                trace!(file = name, "no matching line number, recording orphan");
                self.orphans.push(OrphanFile {
                    filename: name.to_string(),
                    base_name: base.to_string(),
                    kind,
                });
            }
        }
    }
}
