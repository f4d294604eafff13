// prefix extraction + prefix based dedup

use crate::core::analyze::Matcher;
use crate::core::types::Identifier;

/// Derive the grouping prefix of a line number: the substring up to and
/// including the SECOND `-`; with fewer than two hyphens, the whole token
/// plus a trailing `-`.
///
/// "001-001-001" -> "001-001-"
/// "a-b"         -> "a-b-"   (one hyphen only)
/// "abc"         -> "abc-"
pub fn extract_prefix(identifier: &str) -> String {
    let mut hyphens = 0;
    for (i, c) in identifier.char_indices() {
        if c == '-' {
            hyphens += 1;
            if hyphens == 2 {
                return identifier[..=i].to_string();
            }
        }
    }
    format!("{identifier}-")
}

impl Identifier {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let prefix = extract_prefix(&raw);
        Identifier { raw, prefix }
    }

    /// The prefix minus its trailing `-`, the form actually compared
    /// against file base names.
    pub fn stem(&self) -> &str {
        self.prefix.strip_suffix('-').unwrap_or(&self.prefix)
    }
}

impl Matcher {
    //collect line numbers from the raw block:
    //1. Lines are trimmed; blank lines move the blank counter and are dropped.
    //2. Every survivor gets its derived prefix.
    //3. First occurrence per prefix wins; later holders of the same prefix
    //   count as duplicates and are dropped.
    //4. Retained order is input order and becomes the canonical scan order
    //   for filename routing.
    pub(crate) fn collect_identifiers(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                self.blank_lines += 1;
                continue;
            }

            let id = Identifier::new(line);
            if self.identifiers.iter().any(|kept| kept.prefix == id.prefix) {
                self.duplicate_identifiers += 1;
                continue;
            }

            self.identifiers.push(id);
            self.upvf_buckets.push(Vec::new());
            self.upvc_buckets.push(Vec::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_cut_after_the_second_hyphen() {
        assert_eq!(extract_prefix("001-001-001"), "001-001-");
        assert_eq!(extract_prefix("a-b-c"), "a-b-");
        //hyphens beyond the second never extend the prefix
        assert_eq!(extract_prefix("1-2-3-4"), "1-2-");
    }

    #[test]
    fn short_tokens_keep_the_whole_token_plus_hyphen() {
        //fewer than two hyphens -> whole string with a trailing hyphen
        assert_eq!(extract_prefix("abc"), "abc-");
        assert_eq!(extract_prefix("a-b"), "a-b-");
    }

    #[test]
    fn stem_drops_the_trailing_hyphen() {
        let id = Identifier::new("001-001-001");
        assert_eq!(id.prefix, "001-001-");
        assert_eq!(id.stem(), "001-001");
    }

    #[test]
    fn dedup_keeps_the_first_holder_of_a_prefix() {
        let mut m = Matcher::default();
        m.collect_identifiers("x-y-1\nx-y-2\nx-z-1");

        assert_eq!(m.identifiers.len(), 2);
        assert_eq!(m.identifiers[0].raw, "x-y-1");
        assert_eq!(m.identifiers[1].raw, "x-z-1");
        assert_eq!(m.duplicate_identifiers, 1);
    }

    #[test]
    fn blank_lines_are_counted_and_dropped() {
        let mut m = Matcher::default();
        m.collect_identifiers("001-001-001\n\n   \n002-001-001");

        assert_eq!(m.identifiers.len(), 2);
        assert_eq!(m.blank_lines, 2);
        assert_eq!(m.duplicate_identifiers, 0);
    }
}
