use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CircleGroups - named groups of 3D points checked against a radius
#[derive(Parser, Debug)]
#[command(name = "circlegroups")]
#[command(about = "Manage groups of 3D points and see which lie within each group's radius", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the stored groups and config.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key under which the groups are stored
    #[arg(long, global = true, value_name = "KEY")]
    pub storage_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all groups
    List,

    /// Show a group and classify its points
    Show(ShowArgs),

    /// Create a new group
    Create(CreateArgs),

    /// Edit an existing group
    Edit(EditArgs),

    /// Delete a group
    Delete(DeleteArgs),

    /// Show the effective configuration and where each value comes from
    Config,

    /// Browse and edit groups with interactive prompts
    Interactive,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Group id
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Group name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sphere radius
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub radius: f64,

    /// Point coordinates, e.g. "1.2, -3.4, 5.6" or "1.2 -3.4 5.6" (repeatable)
    #[arg(long = "point", value_name = "COORDINATES", allow_hyphen_values = true)]
    pub points: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Group id
    pub id: String,

    /// New group name
    #[arg(long)]
    pub name: Option<String>,

    /// New sphere radius
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Remove the point at this index, as listed by `show` (repeatable)
    #[arg(long = "remove-point", value_name = "INDEX")]
    pub remove_points: Vec<usize>,

    /// Append a point, e.g. "1.2, -3.4, 5.6" (repeatable)
    #[arg(long = "add-point", value_name = "COORDINATES", allow_hyphen_values = true)]
    pub add_points: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Group id
    pub id: String,
}
