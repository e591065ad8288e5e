use std::io::Write;

use chess_0x88::engines::engine_iterative::EngineConfig;
use chess_0x88::uci::uci_top::run_stdio_loop;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth used when `go` gives none
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=64))]
    depth: u8,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    // stdout carries the protocol; logs go to stderr only.
    let log_level = if args.debug { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting UCI loop (default depth {})", args.depth);

    let config = EngineConfig {
        default_depth: args.depth,
    };
    if let Err(e) = run_stdio_loop(config) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
