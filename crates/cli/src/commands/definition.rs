use anyhow::{Result, bail};
use std::path::PathBuf;
use tracing::debug;
use yap_tools_core::{CancellationToken, Config, Engine, FileId, Position};

use crate::display::format_location;
use crate::utils::{DiskWorkspace, parse_filepath_with_position, read_source, resolve_path};

/// Everything a cursor-based lookup needs
pub(crate) struct LookupTarget {
    pub current: FileId,
    pub text: String,
    pub position: Position,
    pub engine: Engine,
    pub workspace: DiskWorkspace,
}

impl LookupTarget {
    pub fn open(position_arg: &str, root: Option<&str>) -> Result<Self> {
        let (filepath, position) = parse_filepath_with_position(position_arg)?;
        let file = resolve_path(&filepath)?;
        let text = read_source(&file)?;
        let config = Config::load_for(&file)?;

        let root = match root {
            Some(root) => resolve_path(root)?,
            None => file
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        debug!("Searching workspace rooted at {}", root.display());

        Ok(Self {
            current: FileId::from_path(&file),
            text,
            position,
            workspace: DiskWorkspace::new(root, config.clone()),
            engine: Engine::new(config),
        })
    }
}

pub fn definition_command(position_arg: &str, root: Option<&str>) -> Result<()> {
    let target = LookupTarget::open(position_arg, root)?;
    let cancel = CancellationToken::new();

    match target.engine.definition(
        &target.current,
        &target.text,
        target.position,
        Some(&target.workspace),
        &cancel,
    ) {
        Some(location) => {
            println!("{}", format_location(&location));
            Ok(())
        }
        None => bail!("No definition found"),
    }
}
