//! rk_cli - CLI commands for Rakshak
//!
//! This crate provides:
//! - clap-based command definitions
//! - The `tui` entry point and the inspection subcommands
//! - Text and JSON output formatting

use clap::{Parser, Subcommand, ValueEnum};
use rk_alert::AlertFeed;
use rk_comms::MeshStatus;
use rk_config::RkConfig;
use rk_prepare::{Checklist, ChecklistState};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] rk_config::ConfigError),

    #[error("Alert error: {0}")]
    AlertError(#[from] rk_alert::AlertError),

    #[error("TUI error: {0}")]
    TuiError(#[from] rk_tui::TuiError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config encoding error: {0}")]
    ConfigEncodingError(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Output format for inspection commands
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Standard JSON output
    Json,
    /// Human-readable text
    Text,
}

/// Main CLI application
#[derive(Parser, Debug)]
#[command(name = "rakshak")]
#[command(
    author,
    version,
    about = "Rakshak - Disaster preparedness and emergency communication companion"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for inspection commands
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive app
    Tui,

    /// Show a one-shot status summary
    Status,

    /// List active alerts for the configured area
    Alerts,

    /// Checklist inspection
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Checklist subcommands
#[derive(Subcommand, Debug)]
pub enum ChecklistCommands {
    /// List the builtin checklist
    List,

    /// Toggle an item and show the resulting progress (volatile demo state)
    Toggle {
        /// Item id to toggle
        id: String,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,
}

/// One-shot status summary
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusSummary {
    pub location: String,
    pub active_alerts: usize,
    pub highest_severity: Option<rk_alert::Severity>,
    pub mesh_connections: u32,
    pub mesh_online: bool,
    pub checklist_total: usize,
    pub checklist_completed: usize,
}

impl StatusSummary {
    fn gather(config: &RkConfig) -> Self {
        let feed = AlertFeed::demo();
        let mesh = MeshStatus::demo();
        let checklist = Checklist::builtin();
        // Fresh launch state: nothing completed yet
        let completed = ChecklistState::new();

        Self {
            location: config.general.location_name.clone(),
            active_alerts: feed.active_count(),
            highest_severity: feed.highest_severity(),
            mesh_connections: mesh.connections,
            mesh_online: mesh.online,
            checklist_total: checklist.len(),
            checklist_completed: completed.completed_count(),
        }
    }
}

impl Cli {
    /// Run the selected command
    pub fn run(self) -> Result<(), CliError> {
        let config = RkConfig::load_or_default(self.config.as_deref())?;
        tracing::debug!(command = ?self.command, "dispatching command");

        match self.command {
            Commands::Tui => {
                let mut app = rk_tui::App::new(&config);
                rk_tui::run(&mut app)?;
            }
            Commands::Status => {
                let summary = StatusSummary::gather(&config);
                match self.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    }
                    OutputFormat::Text => {
                        println!("Location:  {}", summary.location);
                        println!(
                            "Alerts:    {} active{}",
                            summary.active_alerts,
                            summary
                                .highest_severity
                                .map(|s| format!(" (highest: {s})"))
                                .unwrap_or_default()
                        );
                        println!(
                            "Mesh:      {} connections, {}",
                            summary.mesh_connections,
                            if summary.mesh_online { "online" } else { "offline" }
                        );
                        println!(
                            "Checklist: {} of {} completed",
                            summary.checklist_completed, summary.checklist_total
                        );
                    }
                }
            }
            Commands::Alerts => {
                let mut feed = AlertFeed::demo();
                feed.location_name = config.general.location_name.clone();
                match self.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&feed)?);
                    }
                    OutputFormat::Text => {
                        println!("Active alerts for {}:", feed.location_name);
                        for alert in &feed.alerts {
                            println!(
                                "  [{}] {} - {} ({:.0}km, {})",
                                alert.severity.badge(),
                                alert.title,
                                alert.description,
                                alert.distance_km,
                                alert.source
                            );
                        }
                    }
                }
            }
            Commands::Checklist { command } => match command {
                ChecklistCommands::List => {
                    let checklist = Checklist::builtin();
                    match self.format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(checklist.items())?);
                        }
                        OutputFormat::Text => {
                            for item in checklist.items() {
                                println!(
                                    "  [{}] {} ({}) - {}",
                                    item.id,
                                    item.title,
                                    item.category.as_str(),
                                    item.description
                                );
                            }
                        }
                    }
                }
                ChecklistCommands::Toggle { id } => {
                    let checklist = Checklist::builtin();
                    let mut state = ChecklistState::new();
                    let now_complete = state.toggle(&id);
                    println!(
                        "Toggled '{}' {} - {} of {} complete ({:.0}%)",
                        id,
                        if now_complete { "on" } else { "off" },
                        state.completed_count(),
                        checklist.len(),
                        state.progress_pct(checklist.len())
                    );
                    if !checklist.contains(&id) {
                        println!("note: '{}' is not in the builtin checklist", id);
                    }
                    println!("(volatile demo state; nothing is persisted)");
                }
            },
            Commands::Config { command } => match command {
                ConfigCommands::Show => {
                    println!("{}", toml::to_string_pretty(&config)?);
                }
                ConfigCommands::Path => {
                    let path = self
                        .config
                        .unwrap_or_else(RkConfig::default_path);
                    println!("{}", path.display());
                }
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_parse() {
        let cli = Cli::parse_from(["rakshak", "tui"]);
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn test_status_parse() {
        let cli = Cli::parse_from(["rakshak", "status"]);
        assert!(matches!(cli.command, Commands::Status));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_status_json_format() {
        let cli = Cli::parse_from(["rakshak", "status", "--format", "json"]);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_alerts_parse() {
        let cli = Cli::parse_from(["rakshak", "alerts"]);
        assert!(matches!(cli.command, Commands::Alerts));
    }

    #[test]
    fn test_checklist_list_parse() {
        let cli = Cli::parse_from(["rakshak", "checklist", "list"]);
        if let Commands::Checklist { command } = cli.command {
            assert!(matches!(command, ChecklistCommands::List));
        } else {
            panic!("Expected Checklist command");
        }
    }

    #[test]
    fn test_checklist_toggle_parse() {
        let cli = Cli::parse_from(["rakshak", "checklist", "toggle", "3"]);
        if let Commands::Checklist { command } = cli.command {
            if let ChecklistCommands::Toggle { id } = command {
                assert_eq!(id, "3");
            } else {
                panic!("Expected Toggle subcommand");
            }
        } else {
            panic!("Expected Checklist command");
        }
    }

    #[test]
    fn test_config_show_parse() {
        let cli = Cli::parse_from(["rakshak", "config", "show"]);
        if let Commands::Config { command } = cli.command {
            assert!(matches!(command, ConfigCommands::Show));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "rakshak",
            "status",
            "--verbose",
            "--config",
            "/tmp/rk.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/rk.toml")));
    }

    #[test]
    fn test_status_summary_gather() {
        let summary = StatusSummary::gather(&RkConfig::default());
        assert_eq!(summary.active_alerts, 2);
        assert_eq!(summary.highest_severity, Some(rk_alert::Severity::High));
        assert_eq!(summary.mesh_connections, 3);
        assert_eq!(summary.checklist_total, 5);
        assert_eq!(summary.checklist_completed, 0);
    }
}
