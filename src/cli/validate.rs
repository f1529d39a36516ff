//! Validation CLI command

use super::util::{load_host_config, load_settings};
use price_fee::*;
use std::path::Path;

pub fn cmd_validate(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(
            "Usage: price-fee validate <settings> [--strict] [--json] [--config <dir>]".into(),
        );
    }

    let settings_path = Path::new(&args[0]);
    let strict = args.contains(&"--strict".to_string());
    let json_output = args.contains(&"--json".to_string());

    let config = load_host_config(args)?;
    let settings = load_settings(settings_path)?;
    let report = validate_settings(&settings, &config.validation);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_report());
    }

    if report.has_errors() || (strict && report.has_warnings()) {
        return Err("Settings validation failed".into());
    }
    Ok(())
}
