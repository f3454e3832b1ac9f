//! Interactive group browser and editor
//!
//! Mirrors the two screens of the original application: the group list and
//! the editor for the active group.

use anyhow::Result;
use circlegroups_core::GroupId;
use dialoguer::{Input, Select};

use crate::config_loader::CliSession;
use crate::output::{format_radius, OutputWriter};

enum ListAction {
    Edit(GroupId),
    Create,
    Remove,
    Quit,
}

enum EditorAction {
    Name,
    Radius,
    AddPoint,
    RemovePoint,
    Save,
    Leave,
}

/// Run until the user quits from the group list
pub fn run(session: &mut CliSession, output: &OutputWriter) -> Result<()> {
    println!("\n⭕ CircleGroups\n");

    loop {
        if session.active_group().is_some() {
            editor_screen(session, output)?;
        } else if !list_screen(session, output)? {
            return Ok(());
        }
    }
}

/// Returns false when the user chose to quit
fn list_screen(session: &mut CliSession, output: &OutputWriter) -> Result<bool> {
    let mut items: Vec<(String, ListAction)> = session
        .groups()
        .iter()
        .map(|group| {
            (
                format!("{} (radius: {})", group.name, format_radius(group.radius)),
                ListAction::Edit(group.id.clone()),
            )
        })
        .collect();
    items.push(("+ Add group".to_string(), ListAction::Create));
    if !session.groups().is_empty() {
        items.push(("x Remove a group".to_string(), ListAction::Remove));
    }
    items.push(("Quit".to_string(), ListAction::Quit));

    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new().with_prompt("Groups").items(&labels).default(0).interact()?;

    match &items[selection].1 {
        ListAction::Edit(id) => {
            if session.edit_group(id).is_none() {
                output.warning(format!("Group {} no longer exists", id));
            }
        }
        ListAction::Create => {
            session.create_group();
        }
        ListAction::Remove => {
            let labels: Vec<String> = session
                .groups()
                .iter()
                .map(|group| format!("{} (radius: {})", group.name, format_radius(group.radius)))
                .collect();
            let index = Select::new().with_prompt("Remove which group?").items(&labels).interact()?;
            if let Some(id) = session.groups().as_slice().get(index).map(|group| group.id.clone()) {
                session.remove(&id);
                output.success(format!("Removed group {}", id));
            }
        }
        ListAction::Quit => return Ok(false),
    }

    Ok(true)
}

fn editor_screen(session: &mut CliSession, output: &OutputWriter) -> Result<()> {
    let state = session.state();
    let Some(draft) = state.active_group.clone() else {
        return Ok(());
    };
    let dirty = state.dirty;
    let coordinate_error = state.coordinate_error;

    output.group(&draft);
    if session.draft_is_orphaned() {
        output.warning("This group has been deleted; saving will create it again");
    }
    println!();

    let mut items = vec![
        (format!("Name: {}", draft.name), EditorAction::Name),
        (format!("Radius: {}", format_radius(draft.radius)), EditorAction::Radius),
        ("Add point".to_string(), EditorAction::AddPoint),
    ];
    if !draft.points.is_empty() {
        items.push(("Remove point".to_string(), EditorAction::RemovePoint));
    }
    if dirty {
        items.push(("Save".to_string(), EditorAction::Save));
    }
    items.push((if dirty { "Cancel" } else { "Back" }.to_string(), EditorAction::Leave));

    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new().with_prompt("Group").items(&labels).default(0).interact()?;

    match items[selection].1 {
        EditorAction::Name => {
            let name: String = Input::new()
                .with_prompt("Name")
                .with_initial_text(draft.name.clone())
                .allow_empty(true)
                .interact_text()?;
            session.set_name(name)?;
        }
        EditorAction::Radius => {
            let raw: String = Input::new()
                .with_prompt("Radius")
                .with_initial_text(format_radius(draft.radius))
                .allow_empty(true)
                .interact_text()?;
            let radius = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
            if radius.is_nan() {
                output.warning("Radius is not a number; no point will be within it");
            }
            session.set_radius(radius)?;
        }
        EditorAction::AddPoint => {
            let prompt = if coordinate_error {
                "Coordinates (three numbers, e.g. 1.2, -3.4, 5.6 or 1.2 -3.4 5.6)"
            } else {
                "Coordinates"
            };
            let raw: String = Input::new().with_prompt(prompt).allow_empty(true).interact_text()?;
            session.clear_coordinate_error();
            if let Err(e) = session.add_point(&raw) {
                output.error(e);
            }
        }
        EditorAction::RemovePoint => {
            let labels: Vec<String> = draft.points.iter().map(ToString::to_string).collect();
            let index = Select::new().with_prompt("Remove which point?").items(&labels).interact()?;
            session.remove_point(index)?;
        }
        EditorAction::Save => {
            if let Some(id) = session.commit() {
                output.success(format!("Saved group {}", id));
            }
        }
        EditorAction::Leave => session.discard(),
    }

    Ok(())
}
