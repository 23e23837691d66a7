use anyhow::Result;
use yap_tools_core::{Config, Engine};

use crate::display::print_json;
use crate::utils::{read_source, resolve_path};

pub fn complete_command(file: &str) -> Result<()> {
    let path = resolve_path(file)?;
    let text = read_source(&path)?;
    let engine = Engine::new(Config::load_for(&path)?);

    print_json(&engine.completions(&text))
}
