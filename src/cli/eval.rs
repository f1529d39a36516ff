//! Eval CLI command

use super::util::{load_host_config, load_settings, parse_subtotal};
use price_fee::*;
use std::path::Path;

pub fn cmd_eval(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return Err("Usage: price-fee eval <settings> <subtotal> [--json] [--config <dir>]".into());
    }

    let settings_path = Path::new(&args[0]);
    let subtotal = parse_subtotal(&args[1])?;
    let json_output = args.contains(&"--json".to_string());

    let config = load_host_config(args)?;
    let settings = load_settings(settings_path)?;

    let label = settings.effective_label(&config.hook.default_label);
    let result = evaluate(subtotal, &settings.rules, label);

    tracing::info!(
        subtotal,
        adjustment = result.adjustment,
        applied = result.applied,
        "evaluated"
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.to_report());
    }

    Ok(())
}
