use std::fs;
use std::path::PathBuf;

use clap::Parser;
use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Convert a Markdown file to an HTML fragment")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with the configured extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Print the document title instead of converting
    #[arg(long)]
    title: bool,

    /// Write the fragment to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.filter.as_str()),
    )
    .init();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    if cli.title {
        match mdsite::extract_title(&markdown) {
            Ok(title) => println!("{}", title),
            Err(e) => {
                eprintln!("Error: {}: {}", cli.input.display(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    let html = match mdsite::markdown_to_html(&markdown) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    if cli.stdout {
        println!("{}", html);
        return;
    }

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(&config.output.extension));

    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    log::info!("wrote {}", output.display());
    println!("Created {}", output.display());
}
