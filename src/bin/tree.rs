//! Abstract tree builder
//!
//! Expands the default (or a JSON-provided) betting abstraction and reports its size.

use clap::Parser;
use headsup::tree::Abstraction;
use headsup::tree::Builder;
use headsup::*;

#[derive(Parser)]
#[command(author, version, about = "Build an abstract heads-up game tree", long_about = None)]
struct Args {
    /// JSON betting abstraction; missing fields take their defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    #[arg(long, default_value_t = MAX_NODES)]
    max_nodes: usize,
    /// print the census as JSON instead of logging it
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let abstraction = match args.config {
        Some(ref path) => serde_json::from_str::<Abstraction>(&std::fs::read_to_string(path)?)?,
        None => Abstraction::default(),
    };
    log::info!("{:?}", abstraction);
    let tree = Builder::new(abstraction).build(args.max_nodes)?;
    let census = tree.census();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&census)?);
    } else {
        log::info!("root {}", tree.node(tree.root()));
        log::info!("acyclic {}", tree.is_acyclic());
        log::info!("{}", census);
        log::info!("terminals {}", census.terminal());
    }
    Ok(())
}
