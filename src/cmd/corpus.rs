use aristocrat::consts::DEFAULT_NGRAM_LEN;
use aristocrat::corpus::{count_ngrams, format_counts};
use aristocrat::error::SolverResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Raw text to count
    pub source: PathBuf,

    /// Where to write `<SEQUENCE> <COUNT>` lines; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_NGRAM_LEN)]
    pub ngram_len: usize,
}

pub fn run(args: CorpusArgs) -> SolverResult<()> {
    info!("📖 Counting {}-grams in: {}", args.ngram_len, args.source.display());
    let content = fs::read_to_string(&args.source)?;
    let entries = count_ngrams(&content, args.ngram_len);
    let rendered = format_counts(&entries);

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("💾 Wrote {} sequences to {}", entries.len(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
