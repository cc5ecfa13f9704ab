use aristocrat::consts::ALPHABET;
use aristocrat::key::SubstitutionKey;
use aristocrat::optimizer::Solution;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// Machine-readable solve output for `--json`.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub ciphertext: &'a str,
    #[serde(flatten)]
    pub solution: &'a Solution,
}

/// Two-row grid: ciphertext alphabet over the plaintext letter it maps to.
pub fn print_key_grid(name: &str, key: &SubstitutionKey) {
    println!("\nKey: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cipher_row: Vec<Cell> = ALPHABET
        .iter()
        .map(|&b| {
            Cell::new(b as char)
                .add_attribute(Attribute::Dim)
                .set_alignment(CellAlignment::Center)
        })
        .collect();
    let plain_row: Vec<Cell> = key
        .as_bytes()
        .iter()
        .map(|&b| {
            Cell::new(b as char)
                .fg(Color::Green)
                .set_alignment(CellAlignment::Center)
        })
        .collect();

    table.add_row(cipher_row);
    table.add_row(plain_row);
    println!("{}", table);
}

pub fn print_solution(ciphertext: &str, solution: &Solution) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", solution.score)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Restarts").add_attribute(Attribute::Bold),
        Cell::new(solution.restarts_run),
    ]);
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new(solution.key.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Ciphertext").add_attribute(Attribute::Bold),
        Cell::new(ciphertext.trim()),
    ]);
    table.add_row(vec![
        Cell::new("Plaintext").add_attribute(Attribute::Bold),
        Cell::new(solution.plaintext.trim()).fg(Color::Green),
    ]);
    println!("\n{}", table);

    print_key_grid("BEST", &solution.key);
}
