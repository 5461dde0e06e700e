use current_platform::CURRENT_PLATFORM;

use crate::plan::{DEFAULT_PATH, TARGET_HEIGHT, TARGET_WIDTH};

pub fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [file]");
    println!();
    println!(
        "Resizes the image to {TARGET_WIDTH}x{TARGET_HEIGHT} (bilinear, aspect ratio ignored)"
    );
    println!("and overwrites it in place, keeping its format.");
    println!("If no file is given, `{DEFAULT_PATH}' in the current directory is used.");
    println!();
    println!("Options:");
    println!("  -help, -h, -?        print this message");
    println!();
    println!("Set RUST_LOG=debug to see what happens at each step.");
}

pub fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    format!("{name} {version} {cpu}")
}
