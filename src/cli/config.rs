use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::menu::menu_model::{HoverSettings, MenuBinding, default_bindings};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "storefront-ui",
    version,
    about = "Mega-menu and pricing-rule wizard behavior for the storefront"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: storefront-ui.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append JSONL trace events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Menu hide grace period in ms
    #[arg(long, global = true)]
    pub hide_delay_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay scenario YAML files against the components
    Run {
        /// Scenario YAML file or directory of YAML files
        #[arg(long)]
        scenario: String,

        /// Output format: console, junit (default: from config, else console)
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render the rule/modifier containers of a page snapshot as HTML
    Render {
        /// Page snapshot YAML/JSON file
        #[arg(long)]
        page: String,

        /// pricing_rules or modifiers (default: both)
        #[arg(long)]
        collection: Option<String>,
    },

    /// Print the form fields a page snapshot would submit, as JSON
    Fields {
        /// Page snapshot YAML/JSON file
        #[arg(long)]
        page: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `storefront-ui.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_hide_delay")]
    pub hide_delay_ms: u64,

    #[serde(default = "default_offset")]
    pub offset: f64,

    #[serde(default = "default_bindings")]
    pub bindings: Vec<MenuBinding>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let hover = HoverSettings::default();
        Self {
            hide_delay_ms: hover.hide_delay_ms,
            offset: hover.offset,
            bindings: default_bindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_hide_delay() -> u64 { HoverSettings::default().hide_delay_ms }
fn default_offset() -> f64 { HoverSettings::default().offset }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("storefront-ui.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Hover settings with CLI overrides applied: CLI > config > defaults.
pub fn resolve_hover_settings(config: &AppConfig, hide_delay_ms: Option<u64>) -> HoverSettings {
    HoverSettings {
        hide_delay_ms: hide_delay_ms.unwrap_or(config.menu.hide_delay_ms),
        offset: config.menu.offset,
    }
}
