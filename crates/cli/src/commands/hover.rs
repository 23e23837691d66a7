use anyhow::{Result, bail};
use yap_tools_core::CancellationToken;

use super::definition::LookupTarget;

pub fn hover_command(position_arg: &str, root: Option<&str>) -> Result<()> {
    let target = LookupTarget::open(position_arg, root)?;
    let cancel = CancellationToken::new();

    match target.engine.hover(
        &target.current,
        &target.text,
        target.position,
        Some(&target.workspace),
        &cancel,
    ) {
        Some(doc) => {
            println!("{doc}");
            Ok(())
        }
        None => bail!("No documentation found"),
    }
}
