use std::path::PathBuf;

use clap::Parser;

/// Glint: replay input events and UI commands against an in-memory host.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON script of steps to replay.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with a touch screen.
    #[arg(long)]
    pub touch: bool,

    /// Start without a keyboard.
    #[arg(long)]
    pub no_keyboard: bool,

    /// Start without a mouse.
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with this gamepad slot connected. Repeatable.
    #[arg(long = "gamepad", value_name = "N")]
    pub gamepads: Vec<u8>,
}

pub fn parse() -> Args {
    Args::parse()
}
