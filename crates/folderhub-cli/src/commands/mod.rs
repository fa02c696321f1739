//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;

use clap::{Parser, Subcommand};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;

use crate::output::OutputFormat;

/// FolderHub — multi-tenant folder hierarchy management
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Environment name for the configuration overlay
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Dispatch the parsed command.
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, &self.env, self.format),
            Commands::Config(args) => config::execute(args, &self.env, self.format),
        }
    }
}

/// Load configuration for the given environment.
pub(crate) fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
