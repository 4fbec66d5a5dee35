//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::models::ProfileStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub profile_path: PathBuf,
    pub disable_mouse: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Zen TUI - Being Peace, a guided breathing app for the terminal");
    eprintln!();
    eprintln!("Usage: zen-tui [profile-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [profile-file]  Path to the profile JSON file");
    eprintln!("                  Defaults to <config dir>/zen-tui/profile.json");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-mouse    Disable mouse capture (arrow keys still swipe)");
    eprintln!("  -h, --help    Show this help message");
    eprintln!("  -V, --version Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Left/Right        Swipe between screens");
    eprintln!("  Tab / Up / Down   Move between login fields, spin the age wheel");
    eprintln!("  Enter             Continue (on the login screen)");
    eprintln!("  q, Ctrl+C         Quit (Ctrl+C anywhere, q outside login)");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut profile_path: Option<PathBuf> = None;
    let mut disable_mouse = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("zen-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--no-mouse" {
            disable_mouse = true;
            i += 1;
        } else if !arg.starts_with('-') {
            profile_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        profile_path: profile_path.unwrap_or_else(ProfileStore::default_path),
        disable_mouse,
    })
}
