//! Edit command implementation

use crate::cli::EditArgs;
use crate::config_loader::CliSession;
use crate::output::OutputWriter;
use crate::output_types::GroupOutput;
use anyhow::{Context, Result};
use circlegroups_core::{Error, GroupId};

pub fn execute(args: EditArgs, session: &mut CliSession, output: &OutputWriter) -> Result<()> {
    let id = GroupId::new(args.id);
    if session.edit_group(&id).is_none() {
        return Err(Error::GroupNotFound { id: id.to_string() }.into());
    }

    if let Some(name) = args.name {
        session.set_name(name)?;
    }

    if let Some(radius) = args.radius {
        session.set_radius(radius)?;
    }

    // Indices refer to the listing before this edit, so remove from the back
    let mut remove_points = args.remove_points;
    remove_points.sort_unstable_by(|a, b| b.cmp(a));
    remove_points.dedup();
    for index in remove_points {
        if let Err(e) = session.remove_point(index) {
            session.discard();
            return Err(e).context("Group not changed");
        }
    }

    for input in &args.add_points {
        if let Err(e) = session.add_point(input) {
            session.discard();
            return Err(e).context("Group not changed");
        }
    }

    if !session.is_dirty() {
        session.discard();
        output.info("Nothing to change");
        if output.is_json() {
            if let Some(group) = session.groups().get(&id) {
                output.result(GroupOutput::from(group))?;
            }
        }
        return Ok(());
    }

    session.commit().context("No group was being edited")?;
    let group = session
        .groups()
        .get(&id)
        .context("Edited group missing from the collection")?;

    if output.is_json() {
        output.result(GroupOutput::from(group))?;
    } else {
        output.success(format!("Saved group {}", id));
        output.group(group);
    }

    Ok(())
}
