use serde_json::json;

use crate::auth::RouteTable;
use crate::cli::OutputFormat;

pub fn handle(method: &str, path: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let exempt = RouteTable::festify().is_exempt(path, method);

    match output_format {
        OutputFormat::Json => {
            println!("{}", json!({ "method": method, "path": path, "exempt": exempt }));
        }
        OutputFormat::Text => {
            let verdict = if exempt { "public" } else { "requires a bearer token" };
            println!("{} {}: {}", method.to_uppercase(), path, verdict);
        }
    }
    Ok(())
}
