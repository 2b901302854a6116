//! Statement Formatter CLI
//!
//! Usage:
//!   statement-formatter [OPTIONS] <TEMPLATE> [ARGS]...
//!
//! Options:
//!   -p, --placeholder <TOKEN>  Placeholder token (default "?")
//!   -c, --config <FILE>        Formatter config file (TOML format)
//!       --charset <NAME>       Charset for byte arguments
//!       --count                Print the placeholder count instead
//!   -n, --null <INDEX>         Treat the argument at INDEX as null
//!   -h, --help                 Print help
//!
//! Pass `-` as the template to read it from stdin.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use statement_formatter::{Formatter, FormatterConfig, Value};

#[derive(Parser)]
#[command(name = "statement-formatter")]
#[command(about = "Substitute positional placeholders in a template")]
struct Cli {
    /// Template text, or `-` to read it from stdin
    template: String,

    /// Values substituted in order
    args: Vec<String>,

    /// Placeholder token
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Formatter config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Charset for byte arguments
    #[arg(long)]
    charset: Option<String>,

    /// Print the number of placeholders instead of formatting
    #[arg(long)]
    count: bool,

    /// Zero-based argument positions to pass as null
    #[arg(short, long = "null", value_name = "INDEX")]
    nulls: Vec<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match FormatterConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FormatterConfig::default(),
    };

    if let Some(placeholder) = &cli.placeholder {
        config = config.with_placeholder(placeholder.as_str());
    }

    if let Some(name) = &cli.charset {
        config = match config.with_charset_name(name) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
    }

    let template = if cli.template == "-" {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        cli.template.clone()
    };

    debug!("formatting with {:?}", config);
    let formatter = Formatter::new(config);

    if cli.count {
        println!("{}", formatter.count(&template));
        return;
    }

    let args: Vec<Value> = cli
        .args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            if cli.nulls.contains(&i) {
                Value::Null
            } else {
                Value::from(arg)
            }
        })
        .collect();

    println!("{}", formatter.format(Some(template.as_str()), &args));
}
