use circlegroups_core::geometry::classify;
use circlegroups_core::{Group, Point};
use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => {}
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => {}
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                });
                eprintln!("{}", output);
            }
        }
    }

    pub fn error(&self, message: impl Display) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if data.is_empty() {
            println!("{}", style("(no groups)").dim());
        } else {
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    /// Print a command result wrapped in a JSON status envelope
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = serde_json::json!({
            "status": "success",
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        println!("{}: {}", style(key).bold(), value);
    }

    pub fn section(&self, title: impl Display) {
        println!("\n{}", style(title).bold().underlined());
    }

    /// One line per point: suitable points highlighted, the rest dimmed
    pub fn point(&self, index: usize, point: &Point, suitable: bool) {
        let label = format!("[{}] {}", index, point);
        if suitable {
            println!("  {} {}", style("●").green().bold(), style(label).green());
        } else {
            println!("  {} {}", style("○").dim(), style(label).dim());
        }
    }

    /// Group details with each point classified against the radius
    pub fn group(&self, group: &Group) {
        self.section(if group.name.is_empty() { "(unnamed)" } else { group.name.as_str() });
        self.kv("ID", &group.id);
        self.kv("Radius", format_radius(group.radius));
        self.kv(
            "Points",
            format!("{} ({} within radius)", group.points.len(), group.suitable_points()),
        );

        for (index, (point, suitable)) in classify(group).iter().enumerate() {
            self.point(index, point, *suitable);
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Radius for display; NaN is shown as-is so the user sees why nothing fits
pub fn format_radius(radius: f64) -> String {
    if radius.is_nan() {
        "NaN".to_string()
    } else {
        radius.to_string()
    }
}
