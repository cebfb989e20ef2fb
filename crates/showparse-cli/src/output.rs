use color_eyre::eyre::Result;
use showparse_core::{OutputFormat, Tree};

/// Render a parsed tree for stdout.
pub fn render(tree: &Tree, format: OutputFormat, pretty: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(tree)?,
        OutputFormat::Json => serde_json::to_string(tree)?,
        OutputFormat::Yaml => serde_yaml::to_string(tree)?,
    };
    Ok(text)
}
