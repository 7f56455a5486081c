use navscrape_core::builtin_profiles;

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(&builtin_profiles())?;
    println!("{payload}");
    Ok(())
}
