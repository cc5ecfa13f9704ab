use aristocrat::api::Solver;
use aristocrat::config::Config;
use aristocrat::consts::DEFAULT_CORPUS_PATH;
use aristocrat::error::SolverResult;
use aristocrat::scorer::FrequencyModel;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Breaks Aristocrat (monoalphabetic substitution) ciphers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// `<SEQUENCE> <COUNT>` n-gram corpus
    #[arg(global = true, short, long, default_value = DEFAULT_CORPUS_PATH)]
    corpus: String,

    /// JSON config file; flags given on the command line win
    #[arg(global = true, long)]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Solve(cmd::solve::SolveArgs),
    Score(cmd::score::ScoreArgs),
    Encrypt(cmd::encrypt::EncryptArgs),
    Corpus(cmd::corpus::CorpusArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn dispatch(cli: Cli, matches: &ArgMatches) -> SolverResult<()> {
    match cli.command {
        Commands::Solve(args) => {
            let sub_matches = matches.subcommand_matches("solve");
            let config = resolve_config(&cli.config_file, &args.config, sub_matches)?;
            let solver = Solver::from_corpus_file(&cli.corpus, config)?;
            cmd::solve::run(args, &solver)
        }
        Commands::Score(args) => {
            let mut model_params = match &cli.config_file {
                Some(path) => Config::load_from_file(path)?.model,
                None => args.model.clone(),
            };
            if let Some(sub) = matches.subcommand_matches("score") {
                model_params.merge_from_cli(&args.model, sub);
            }
            let model = FrequencyModel::load(&cli.corpus, &model_params)?;
            cmd::score::run(args, &model);
            Ok(())
        }
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Corpus(args) => cmd::corpus::run(args),
    }
}

/// File config (if any) as the base, explicit CLI flags merged on top.
fn resolve_config(
    config_file: &Option<String>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> SolverResult<Config> {
    let Some(path) = config_file else {
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(sub) = sub_matches {
        config.merge_from_cli(cli_config, sub);
    }
    config.validate()?;
    Ok(config)
}
