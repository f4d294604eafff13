//! Results table exporter.
//!
//! Serializes match records (after any caller-side status filtering) back
//! to a delimited table: one row per record, per-kind filename lists
//! semicolon-joined.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::core::types::MatchRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Column headers of the exported table.
const HEADER: [&str; 5] = ["Line Number", "Prefix", "Status", "UPVF Files", "UPVC Files"];

/// Write the table to any `Write` sink.
pub fn write_records<W: Write>(records: &[MatchRecord], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for record in records {
        let upvf = record.upvf_files.join(";");
        let upvc = record.upvc_files.join(";");
        writer.write_record([
            record.identifier.as_str(),
            record.prefix.as_str(),
            record.status.as_str(),
            upvf.as_str(),
            upvc.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the table to a file.
pub fn export_records(records: &[MatchRecord], path: &Path) -> Result<(), ExportError> {
    write_records(records, File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Identifier, MatchStatus};

    fn mk_record(identifier: &str, upvf: &[&str], upvc: &[&str]) -> MatchRecord {
        let Identifier { raw, prefix } = Identifier::new(identifier);
        let upvf_files: Vec<String> = upvf.iter().map(|s| s.to_string()).collect();
        let upvc_files: Vec<String> = upvc.iter().map(|s| s.to_string()).collect();
        let has_upvf = !upvf_files.is_empty();
        let has_upvc = !upvc_files.is_empty();

        MatchRecord {
            identifier: raw,
            prefix,
            has_upvf,
            has_upvc,
            status: MatchStatus::from_presence(has_upvf, has_upvc),
            upvf_files,
            upvc_files,
        }
    }

    #[test]
    fn records_serialize_to_the_expected_table() {
        let records = vec![
            mk_record(
                "001-001-001",
                &["001-001-001.upvf", "001-001-002.upvf"],
                &["001-001-001.upvc"],
            ),
            mk_record("002-001-001", &[], &[]),
        ];

        let mut out = Vec::new();
        write_records(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Line Number,Prefix,Status,UPVF Files,UPVC Files\n\
             001-001-001,001-001-,complete,001-001-001.upvf;001-001-002.upvf,001-001-001.upvc\n\
             002-001-001,002-001-,missing-both,,\n"
        );
    }

    #[test]
    fn export_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        export_records(
            &[mk_record("001-001-001", &["001-001-001.upvf"], &[])],
            &path,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Line Number,Prefix,Status,"));
        assert!(written.contains("missing-upvc"));
    }
}
