use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use console::style;
use huffman_report::{
    build_code_table, build_tree, code_string, codes_by_length, count_frequencies, counts_line,
    render_tree, SizeReport,
};
use tracing::{debug, Level};

const DEFAULT_INPUT: &str =
    "aabbbccccddddeeeeeffffffggggggggggggggggggggggggggggggggggggggggggg";

/// Builds a Huffman code for a text and compares its encoded size to the original
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Text to encode
    #[arg(conflicts_with = "file")]
    input: Option<String>,

    /// Read the text to encode from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Do not draw the Huffman tree
    #[arg(long)]
    no_tree: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let input = match (&cli.input, &cli.file) {
        (_, Some(path)) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        (Some(text), None) => text.clone(),
        (None, None) => DEFAULT_INPUT.to_string(),
    };
    debug!(bytes = input.len(), "read input");
    let color = !cli.no_color;

    let frequencies = count_frequencies(&input).wrap_err("cannot count symbols")?;
    println!("Counts: {}", counts_line(&frequencies));
    println!();

    let root = build_tree(&frequencies).wrap_err("cannot build the Huffman tree")?;
    if !cli.no_tree {
        print!("{}", render_tree(&root, color));
        println!();
    }

    let table = build_code_table(&root);
    for (symbol, code) in codes_by_length(&table) {
        println!("{} {}", symbol, code_string(code));
    }

    let report = SizeReport::new(&input, &table)?;
    println!("{}", report);
    let saved = format!(
        "Saved {} bits, encoded to {:.1}% of the original",
        report.saved_bits(),
        report.ratio() * 100.0
    );
    if color {
        println!("{}", style(saved).green());
    } else {
        println!("{}", saved);
    }
    Ok(())
}
