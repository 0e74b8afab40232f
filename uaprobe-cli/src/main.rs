//! entrypoint for uaprobe-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

pub mod cmd;
use self::cmd::{classify, config};

pub mod trace;

#[cfg(target_family = "unix")]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[cfg(target_os = "windows")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "uaprobe")]
#[command(bin_name = "uaprobe")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    /// raise the log level (-v for debug, -vv for trace)
    ///
    /// `RUST_LOG` takes precedence when set.
    verbose: u8,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Classify(classify::CliCommandClassify),
    Config(config::CliCommandConfig),
}

fn main() {
    let cli = Cli::parse();

    let directive = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    #[allow(clippy::exit)]
    if let Err(err) = trace::init_tracing(directive).and_then(|()| match cli.cmds {
        CliCommands::Classify(cfg) => classify::run(cfg),
        CliCommands::Config(cfg) => config::run(cfg),
    }) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
