use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};
use log::{debug, warn};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use tagged_merkle::{
    compute_root_hex, Keccak256, OddNodePolicy, Result, Sha256, Sha3_256,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Hash the unpaired node with a copy of itself
    SelfPair,
    /// Carry the unpaired node up unchanged
    PassThrough,
}

impl From<Policy> for OddNodePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::SelfPair => OddNodePolicy::SelfPair,
            Policy::PassThrough => OddNodePolicy::PassThrough,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashFunction {
    Sha256,
    #[value(name = "sha3-256")]
    Sha3_256,
    Keccak256,
}

#[derive(Parser)]
#[command(version, about = "Compute a tagged-hash Merkle root over the given leaves")]
struct Args {
    /// Leaves, each hashed as UTF-8 bytes (read one per line from stdin when omitted)
    leaves: Vec<String>,

    #[arg(short, long, default_value = "Bitcoin_Transaction")]
    /// Domain separation tag
    tag: String,

    #[arg(short, long, value_enum, default_value_t = Policy::SelfPair)]
    /// Handling of the unpaired node on odd levels
    policy: Policy,

    #[arg(long = "hash", value_enum, default_value_t = HashFunction::Sha256)]
    /// Underlying hash primitive
    hash: HashFunction,

    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Increase verbosity (-vvv supported)
    verbose: u8,
}

fn read_leaves() -> Result<Vec<String>> {
    let mut leaves = vec![];
    for line in io::stdin().lock().lines() {
        leaves.push(line?);
    }
    Ok(leaves)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(
        log_level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        warn!(target: "merkle_root", "Logger already initialized");
    }

    let leaves = if args.leaves.is_empty() { read_leaves()? } else { args.leaves };
    debug!(target: "merkle_root", "Read {} leaves, hash={:?}", leaves.len(), args.hash);

    let policy = args.policy.into();
    let root = match args.hash {
        HashFunction::Sha256 => compute_root_hex::<Sha256, _, _>(&args.tag, &leaves, policy)?,
        HashFunction::Sha3_256 => compute_root_hex::<Sha3_256, _, _>(&args.tag, &leaves, policy)?,
        HashFunction::Keccak256 => {
            compute_root_hex::<Keccak256, _, _>(&args.tag, &leaves, policy)?
        }
    };

    println!("Merkle Root: {}", root);

    Ok(())
}
