use crate::reports;
use aristocrat::error::SolverResult;
use aristocrat::key::SubstitutionKey;
use aristocrat::optimizer::mutation;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext to turn into a puzzle
    pub text: String,

    /// 26-letter decryption key; random when omitted
    #[arg(short, long)]
    pub key: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: EncryptArgs) -> SolverResult<()> {
    let key: SubstitutionKey = match &args.key {
        Some(k) => k.parse()?,
        None => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            mutation::random_key(&mut rng)
        }
    };

    println!("{}", key.encrypt(&args.text));
    reports::print_key_grid("DECRYPTION", &key);
    Ok(())
}
