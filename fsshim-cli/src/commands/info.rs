//! Platform support summary.

use fsshim::platform::{is_supported, platform_name};

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    println!("fsshim {}", fsshim::VERSION);
    println!("  Platform:       {}", platform_name());
    println!(
        "  Kernel channel: {}",
        if is_supported() {
            "supported"
        } else {
            "not implemented"
        }
    );
    Ok(())
}
