//! CLI for marklite - Markdown to HTML converter

use clap::Parser;
use marklite::{ConvertOptions, Engine, MarkdownToHtml};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file path (reads stdin if not specified)
    input: Option<PathBuf>,

    /// Output HTML file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Conversion engine: "faithful" or "structured" (default: faithful)
    #[arg(long, default_value = "faithful")]
    engine: String,

    /// Entity-escape raw HTML in the source before converting
    #[arg(long)]
    escape_html: bool,
}

fn main() {
    let args = Args::parse();

    let engine = match args.engine.parse::<Engine>() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = ConvertOptions {
        engine,
        escape_html: args.escape_html,
    };
    let converter = MarkdownToHtml::new(options);

    let html = match args.input {
        Some(input) => match converter.convert_file(&input) {
            Ok(html) => html,
            Err(e) => {
                eprintln!("Error converting {:?}: {}", input, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut source = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut source) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            converter.convert(&source)
        }
    };

    if let Some(output) = args.output {
        if let Err(e) = std::fs::write(&output, &html) {
            eprintln!("Error writing output: {}", e);
            std::process::exit(1);
        }
        println!("Successfully converted to {:?}", output);
    } else {
        println!("{}", html);
    }
}
