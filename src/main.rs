use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use gst_lcs::{lcs, LcsFinder};
use log::info;

/// Prints the longest substring common to all input strings.
///
/// Input is a count K followed by K whitespace-separated strings.
#[derive(Parser, Debug)]
#[command(name = "gst-lcs", version)]
struct Cli {
    /// Read input from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Cap the suffix tree's node arena
    #[arg(long, value_name = "N")]
    node_limit: Option<usize>,

    /// Print the suffix tree to stderr
    #[arg(long)]
    dump_tree: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let words = parse_words(&text)?;
    info!("read {} strings", words.len());

    let mut finder = LcsFinder::new();
    if let Some(limit) = cli.node_limit {
        finder = finder.with_node_limit(limit);
    }

    let result = if cli.dump_tree && words.len() > 1 {
        let tree = finder.build_tree(&words)?;
        eprint!("{}", tree.render());
        lcs::locate(&tree)
    } else {
        finder.find(&words)?
    };

    let mut out = io::stdout().lock();
    out.write_all(&result)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Splits `count word1 word2 ...` into its words. Extra tokens are ignored.
fn parse_words(text: &[u8]) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut tokens = text
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    let count = tokens.next().context("missing string count")?;
    let count: usize = std::str::from_utf8(count)
        .ok()
        .and_then(|s| s.parse().ok())
        .with_context(|| format!("invalid string count {:?}", String::from_utf8_lossy(count)))?;
    if count == 0 {
        bail!("string count must be at least 1");
    }

    let words: Vec<Vec<u8>> = tokens.take(count).map(<[u8]>::to_vec).collect();
    if words.len() < count {
        bail!("expected {} strings, found {}", count, words.len());
    }
    Ok(words)
}
