//! Create command implementation

use crate::cli::CreateArgs;
use crate::config_loader::CliSession;
use crate::output::OutputWriter;
use crate::output_types::GroupOutput;
use anyhow::{Context, Result};

pub fn execute(args: CreateArgs, session: &mut CliSession, output: &OutputWriter) -> Result<()> {
    session.create_group();
    session.set_name(args.name)?;
    session.set_radius(args.radius)?;

    for input in &args.points {
        if let Err(e) = session.add_point(input) {
            session.discard();
            return Err(e).context("Group not created");
        }
    }

    let id = session.commit().context("No group was being created")?;
    let group = session
        .groups()
        .get(&id)
        .context("Created group missing from the collection")?;

    if output.is_json() {
        output.result(GroupOutput::from(group))?;
    } else {
        output.success(format!("Created group {}", id));
        output.group(group);
    }

    Ok(())
}
