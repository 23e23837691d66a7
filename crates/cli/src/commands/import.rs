use anyhow::{Context, Result};
use tracing::info;
use yap_tools_core::{Config, apply_edits, ensure_imported};

use crate::display::{display_path, print_json};
use crate::utils::{read_source, resolve_path};

pub fn import_command(file: &str, symbol: &str, module: Option<&str>, write: bool) -> Result<()> {
    let path = resolve_path(file)?;
    let text = read_source(&path)?;
    let config = Config::load_for(&path)?;
    let module = module.unwrap_or(&config.std_module);

    let edits = ensure_imported(&text, symbol, module);

    if !write {
        return print_json(&edits);
    }

    if edits.is_empty() {
        println!("{} is already available in {}", symbol, display_path(&path));
        return Ok(());
    }

    std::fs::write(&path, apply_edits(&text, &edits))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Imported {} from {} in {}", symbol, module, path.display());
    println!("Imported {} from {}", symbol, module);
    Ok(())
}
