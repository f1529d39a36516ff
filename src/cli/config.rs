//! Schema CLI command

use price_fee::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: settings, result, config, validate");
            Ok(())
        }
        "settings" => print_schema::<Settings>(),
        "result" => print_schema::<EvaluationResult>(),
        "config" => print_schema::<HostConfig>(),
        "validate" => print_schema::<ValidationReport>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
