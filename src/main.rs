use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use v2share::utils::base64::{base64_decode, base64_encode};
use v2share::{config_to_links, links_to_config, ConvertError, ParseOptions};

/// Convert between V2Ray JSON configs and shareable proxy links
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Input file; stdin when omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a JSON config document into share links
    Export,
    /// Convert share links into a JSON config document
    Import {
        /// Also accept ss:// links, which the importer skips by default
        #[arg(long)]
        accept_shadowsocks: bool,
    },
    /// Base64-encode the input text
    Encode,
    /// Base64-decode the input text
    Decode,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Parse command line arguments
    let args = Args::parse();

    let input = read_input(args.input.as_deref())?;

    let result = match args.command {
        Command::Export => config_to_links(&input)?,
        Command::Import { accept_shadowsocks } => {
            let options = ParseOptions { accept_shadowsocks };
            links_to_config(&input, &options)?
        }
        Command::Encode => base64_encode(input.trim_end_matches('\n')),
        Command::Decode => {
            // Pasted Base64 often carries stray whitespace and line breaks
            let compact: String = input.split_whitespace().collect();
            base64_decode(&compact).map_err(ConvertError::from)?
        }
    };

    write_output(args.output.as_deref(), &result)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
