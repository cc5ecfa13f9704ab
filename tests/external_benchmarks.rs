use aristocrat::api::Solver;
use aristocrat::config::Config;
use aristocrat::consts::DEFAULT_CORPUS_PATH;
use aristocrat::samples::KnownSample;
use std::path::Path;

fn has_real_data() -> bool {
    Path::new(DEFAULT_CORPUS_PATH).exists()
}

#[test]
fn test_samples_against_full_quadgram_corpus() {
    if !has_real_data() {
        println!("Skipping external benchmark: Real data not found");
        return;
    }

    let mut config = Config::default();
    config.search.parallel = true;
    let solver = Solver::from_corpus_file(DEFAULT_CORPUS_PATH, config).unwrap();

    println!("\n{:<20} | {:<10} | {:<10}", "Sample", "Score", "Truth");
    println!("{:-<46}", "-");

    for sample in [KnownSample::TaleOfTwoCities, KnownSample::MobyDick] {
        let solution = solver.solve(sample.ciphertext(), Some(1)).unwrap();
        let truth = solver.score(sample.plaintext().unwrap());
        println!("{:<20} | {:<10.2} | {:<10.2}", sample, solution.score, truth);

        assert!(
            solution.score >= truth - 0.01 * truth.abs(),
            "{} stopped short: {} vs {}",
            sample,
            solution.score,
            truth
        );
    }

    // The classic puzzle has no stored answer; it must at least read as
    // English words separated where the ciphertext separates them.
    let puzzle = KnownSample::Aristocrat.ciphertext();
    let solution = solver.solve(puzzle, Some(1)).unwrap();
    println!("{}\n{}", puzzle, solution.plaintext);
    assert!(solution.score > solver.score(puzzle));

    let other = solver.solve(puzzle, Some(2)).unwrap();
    let tolerance = 0.02 * solution.score.abs();
    assert!(
        (solution.score - other.score).abs() <= tolerance,
        "Seeds disagree on the classic puzzle: {} vs {}",
        solution.score,
        other.score
    );
}
