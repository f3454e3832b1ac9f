//! Show command implementation

use crate::cli::ShowArgs;
use crate::config_loader::CliSession;
use crate::output::OutputWriter;
use crate::output_types::GroupOutput;
use anyhow::Result;
use circlegroups_core::{Error, GroupId};

pub fn execute(args: ShowArgs, session: &CliSession, output: &OutputWriter) -> Result<()> {
    let id = GroupId::new(args.id);
    let group = session
        .groups()
        .get(&id)
        .ok_or_else(|| Error::GroupNotFound { id: id.to_string() })?;

    if output.is_json() {
        output.result(GroupOutput::from(group))?;
    } else {
        output.group(group);
    }

    Ok(())
}
