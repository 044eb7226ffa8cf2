//! Echo Chat - minimal desktop chat window
//!
//! Opens a single window; exits when it is closed.

use std::path::PathBuf;

use clap::Parser;
use echo_chat::config::DEFAULT_TITLE;
use echo_chat::runner::{init_logging, run_gui, AppConfig};

/// Echo Chat - a chat window that answers with an echo
#[derive(Parser, Debug)]
#[command(name = "echo-chat")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose logging (equivalent to RUST_LOG=trace)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Image shown next to your messages
    #[arg(long, value_name = "PATH")]
    user_avatar: Option<PathBuf>,

    /// Image shown next to assistant replies
    #[arg(long, value_name = "PATH")]
    assistant_avatar: Option<PathBuf>,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            title: args.title,
            user_avatar: args.user_avatar,
            assistant_avatar: args.assistant_avatar,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Args::parse());
    init_logging(&config);
    run_gui(config)
}
