//! Timing-log ingestion: filename grammar, body grammar, and best-effort
//! directory scanning.
//!
//! The external program writes one log per run, named
//! `G1_<n1>_<k1>_<d1>_G2_<n2>_<k2>_<d2>_<stored|generated>.txt`, whose body
//! is one `label: seconds` line per timed function. The timing directory may
//! hold unrelated files; anything outside the grammar is skipped, never an
//! error.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::params::CodeParameters;

/// Where the run got its matrices from, per the filename tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixSource {
    Generated,
    Stored,
}

impl MatrixSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixSource::Generated => "generated",
            MatrixSource::Stored => "stored",
        }
    }
}

/// One parsed timing log: the code parameters recovered from the filename
/// plus the per-function elapsed seconds from the body.
#[derive(Clone, Debug)]
pub struct TimingEntry {
    pub g1: CodeParameters,
    pub g2: CodeParameters,
    pub source: MatrixSource,
    pub timings: HashMap<String, f64>,
}

/// All parsed logs of one analysis run, partitioned by matrix source.
/// Order within each half is directory-listing order; callers needing a
/// sorted view sort explicitly (see `series`).
#[derive(Clone, Debug, Default)]
pub struct TimingCorpus {
    pub generated: Vec<TimingEntry>,
    pub stored: Vec<TimingEntry>,
}

/// Parse a timing-log filename. Field order is fixed; all six numeric
/// fields are non-negative integers. Returns `None` for anything that does
/// not match the grammar exactly.
pub fn parse_filename(name: &str) -> Option<(CodeParameters, CodeParameters, MatrixSource)> {
    let stem = name.strip_suffix(".txt")?;
    let fields: Vec<&str> = stem.split('_').collect();
    if fields.len() != 9 || fields[0] != "G1" || fields[4] != "G2" {
        return None;
    }

    let num = |s: &str| s.parse::<u32>().ok();
    let g1 = CodeParameters::new(num(fields[1])?, num(fields[2])?, num(fields[3])?);
    let g2 = CodeParameters::new(num(fields[5])?, num(fields[6])?, num(fields[7])?);

    let source = match fields[8] {
        "generated" => MatrixSource::Generated,
        "stored" => MatrixSource::Stored,
        _ => return None,
    };

    Some((g1, g2, source))
}

/// Format the filename the external program would use for this run; the
/// exact inverse of `parse_filename`.
pub fn timing_filename(g1: CodeParameters, g2: CodeParameters, source: MatrixSource) -> String {
    format!(
        "G1_{}_{}_{}_G2_{}_{}_{}_{}.txt",
        g1.n,
        g1.k,
        g1.d,
        g2.n,
        g2.k,
        g2.d,
        source.as_str()
    )
}

/// Parse a log body into function-label -> seconds. Each useful line is
/// `label: seconds` with exactly one colon; blank or malformed lines are
/// skipped. A duplicate label overwrites the earlier one.
pub fn parse_body(content: &str) -> HashMap<String, f64> {
    let mut timings = HashMap::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != 2 {
            continue;
        }
        if let Ok(seconds) = fields[1].trim().parse::<f64>() {
            timings.insert(fields[0].trim().to_string(), seconds);
        }
    }
    timings
}

/// Scan `dir` (one level, no recursion) and build the corpus from every
/// file whose name matches the grammar. Non-matching entries contribute
/// nothing; an unreadable matching file is an error.
pub fn load_corpus(dir: &Path) -> io::Result<TimingCorpus> {
    let mut corpus = TimingCorpus::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some((g1, g2, source)) = parse_filename(name) else {
            continue;
        };

        let content = fs::read_to_string(entry.path())?;
        let timing_entry = TimingEntry {
            g1,
            g2,
            source,
            timings: parse_body(&content),
        };
        match source {
            MatrixSource::Generated => corpus.generated.push(timing_entry),
            MatrixSource::Stored => corpus.stored.push(timing_entry),
        }
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn filename_parses_all_fields() {
        let (g1, g2, source) = parse_filename("G1_40_15_6_G2_50_15_7_generated.txt").unwrap();
        assert_eq!(g1, CodeParameters::new(40, 15, 6));
        assert_eq!(g2, CodeParameters::new(50, 15, 7));
        assert_eq!(source, MatrixSource::Generated);
    }

    #[test]
    fn filename_round_trips_through_formatter() {
        let g1 = CodeParameters::new(25, 10, 5);
        let g2 = CodeParameters::new(50, 10, 6);
        for source in [MatrixSource::Generated, MatrixSource::Stored] {
            let name = timing_filename(g1, g2, source);
            assert_eq!(parse_filename(&name), Some((g1, g2, source)));
        }
    }

    #[test]
    fn filename_rejects_off_grammar_names() {
        for name in [
            "G1_40_15_6_G2_50_15_7_generated",      // missing suffix
            "G1_40_15_6_G2_50_15_7_cached.txt",     // unknown tag
            "G1_40_15_G2_50_15_7_generated.txt",    // missing field
            "G2_40_15_6_G1_50_15_7_generated.txt",  // markers swapped
            "G1_40_15_6_G2_50_15_7_7_generated.txt", // extra field
            "G1_4x_15_6_G2_50_15_7_stored.txt",     // non-numeric
            "notes.txt",
            "",
        ] {
            assert_eq!(parse_filename(name), None, "accepted {name:?}");
        }
    }

    #[test]
    fn body_parses_labeled_seconds() {
        let timings = parse_body("key_generation(): 0.0123\nverify_signature(): 0.0456\n");
        assert_eq!(timings.len(), 2);
        assert_eq!(timings["key_generation()"], 0.0123);
        assert_eq!(timings["verify_signature()"], 0.0456);
    }

    #[test]
    fn body_skips_malformed_lines_and_keeps_last_duplicate() {
        let content = "\n\
            main(): 1.5\n\
            not a timing line\n\
            too:many:colons\n\
            bad_value: xyz\n\
            main(): 2.5\n";
        let timings = parse_body(content);
        assert_eq!(timings.len(), 1);
        assert_eq!(timings["main()"], 2.5);
    }

    #[test]
    fn corpus_partitions_by_source_and_skips_noise() {
        let dir = tempdir().unwrap();

        let mut f = File::create(dir.path().join("G1_40_15_6_G2_50_15_7_generated.txt")).unwrap();
        writeln!(f, "main(): 0.5").unwrap();

        let mut f = File::create(dir.path().join("G1_40_15_6_G2_50_15_7_stored.txt")).unwrap();
        writeln!(f, "main(): 0.25").unwrap();

        File::create(dir.path().join("README.md")).unwrap();
        File::create(dir.path().join("G1_garbage.txt")).unwrap();

        let corpus = load_corpus(dir.path()).unwrap();
        assert_eq!(corpus.generated.len(), 1);
        assert_eq!(corpus.stored.len(), 1);
        assert_eq!(corpus.generated[0].timings["main()"], 0.5);
        assert_eq!(corpus.stored[0].timings["main()"], 0.25);
    }

    #[test]
    fn corpus_scan_does_not_recurse() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("old");
        std::fs::create_dir(&sub).unwrap();
        let mut f = File::create(sub.join("G1_40_15_6_G2_50_15_7_generated.txt")).unwrap();
        writeln!(f, "main(): 0.5").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();
        assert!(corpus.generated.is_empty());
        assert!(corpus.stored.is_empty());
    }
}
