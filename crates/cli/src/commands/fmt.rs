use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use yap_tools_core::{Config, Engine, apply_edits};

use crate::display::display_path;
use crate::utils::{collect_source_files, read_source, resolve_path};

pub fn fmt_command(paths: &[String], check: bool, indent: Option<usize>) -> Result<()> {
    let mut changed = 0usize;

    for path in paths {
        let target = resolve_path(path)?;
        let mut config = Config::load_for(&target)?;
        if let Some(width) = indent {
            config.indent_width = width;
        }
        let engine = Engine::new(config);

        for file in collect_source_files(&target, engine.config()) {
            let text = read_source(&file)?;
            let Some(edit) = engine.format(&text) else {
                debug!("{} already formatted", file.display());
                continue;
            };
            changed += 1;

            if check {
                println!("{}", display_path(&file));
                continue;
            }

            std::fs::write(&file, apply_edits(&text, &[edit]))
                .with_context(|| format!("Failed to write {}", file.display()))?;
            info!("Formatted {}", file.display());
            println!("Formatted {}", display_path(&file));
        }
    }

    if check && changed > 0 {
        bail!("{} file(s) would be reformatted", changed);
    }
    Ok(())
}
