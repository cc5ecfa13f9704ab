use aristocrat::scorer::FrequencyModel;
use aristocrat::text::letter_codes;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub model: aristocrat::config::ModelParams,

    /// Text to rate against the corpus
    pub text: String,
}

pub fn run(args: ScoreArgs, model: &FrequencyModel) {
    let letters = letter_codes(&args.text).len();
    let score = model.score(&args.text);
    let windows = (letters + 1).saturating_sub(model.ngram_len());

    println!("Letters: {}", letters);
    println!("Windows: {}", windows);
    println!("Score: {:.4}", score);
    if windows > 0 {
        println!("Per window: {:.4}", score / windows as f64);
    }
}
