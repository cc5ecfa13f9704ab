use crate::error::{SolverError, SolverResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// `(sequence, count)` records read from a corpus, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    pub records: Vec<(String, u64)>,
    pub skipped: usize,
}

/// Opens a `<SEQUENCE> <COUNT>` corpus file. A missing or unreadable file is
/// reported as `CorpusUnavailable`.
pub fn load_corpus<P: AsRef<Path>>(path: P, ngram_len: usize) -> SolverResult<RawCorpus> {
    let path = path.as_ref();
    info!("📚 Loading corpus from: {}", path.display());

    let file = File::open(path).map_err(|source| SolverError::CorpusUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    read_corpus(file, ngram_len).map_err(|e| match e {
        SolverError::Io(source) => SolverError::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses whitespace-separated records. Lines without exactly two tokens,
/// with an unparsable count, or whose sequence is not `ngram_len` ASCII
/// letters are skipped.
pub fn read_corpus<R: Read>(reader: R, ngram_len: usize) -> SolverResult<RawCorpus> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut corpus = RawCorpus::default();
    let mut lines_read = 0;

    for result in rdr.records() {
        lines_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) if e.is_io_error() => match e.into_kind() {
                csv::ErrorKind::Io(io) => return Err(SolverError::Io(io)),
                _ => {
                    corpus.skipped += 1;
                    continue;
                }
            },
            Err(e) => {
                debug!("   [Line {}] Unreadable record: {}", lines_read, e);
                corpus.skipped += 1;
                continue;
            }
        };

        // Runs of spaces produce empty fields; tabs stay inside one field.
        let tokens: Vec<&str> = rec.iter().flat_map(str::split_whitespace).collect();
        if tokens.len() != 2 {
            corpus.skipped += 1;
            continue;
        }

        let sequence = tokens[0].to_ascii_uppercase();
        if sequence.len() != ngram_len || !sequence.bytes().all(|b| b.is_ascii_uppercase()) {
            corpus.skipped += 1;
            continue;
        }

        let count: u64 = match tokens[1].parse() {
            Ok(v) => v,
            Err(_) => {
                corpus.skipped += 1;
                continue;
            }
        };

        corpus.records.push((sequence, count));
    }

    debug!(
        "   -> Scanned {} lines. Loaded {} records, skipped {}.",
        lines_read,
        corpus.records.len(),
        corpus.skipped
    );

    Ok(corpus)
}
