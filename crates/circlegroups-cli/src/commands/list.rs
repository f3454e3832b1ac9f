//! List command implementation

use crate::config_loader::CliSession;
use crate::output::OutputWriter;
use crate::output_types::{GroupRow, GroupSummary, ListOutput};
use anyhow::Result;

pub fn execute(session: &CliSession, output: &OutputWriter) -> Result<()> {
    let groups = session.groups();

    if output.is_json() {
        output.result(ListOutput {
            groups: groups.iter().map(GroupSummary::from).collect(),
        })?;
    } else {
        output.section(format!("Groups ({})", groups.len()));
        output.table(groups.iter().map(GroupRow::from).collect());
    }

    Ok(())
}
