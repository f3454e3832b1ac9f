//! Delete command implementation

use crate::cli::DeleteArgs;
use crate::config_loader::CliSession;
use crate::output::OutputWriter;
use crate::output_types::DeleteOutput;
use anyhow::Result;
use circlegroups_core::GroupId;

pub fn execute(args: DeleteArgs, session: &mut CliSession, output: &OutputWriter) -> Result<()> {
    let id = GroupId::new(args.id);
    let name = session.groups().get(&id).map(|group| group.name.clone());
    let removed = session.remove(&id);

    if output.is_json() {
        output.result(DeleteOutput { id: id.to_string(), removed })?;
    } else if removed {
        output.success(format!(
            "Deleted group '{}' ({})",
            name.unwrap_or_default(),
            id
        ));
    } else {
        output.warning(format!("No group with id {}; nothing deleted", id));
    }

    Ok(())
}
