//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderNode};
use folderhub_service::{FolderService, TreeService};

use crate::data;
use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Path to the snapshot file (defaults to the configured data file)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List all folders belonging to an organization
    List {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
    /// List all descendants of a folder
    Children {
        /// Organization ID
        #[arg(short, long)]
        org: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Move a folder and its subtree under a new parent
    Move {
        /// Source folder name
        #[arg(short, long)]
        source: String,
        /// Destination folder name
        #[arg(short = 'D', long)]
        destination: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the folder tree for an organization
    Tree {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Organization
    org: String,
    /// Depth
    depth: usize,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            path: folder.path.clone(),
            org: folder.org_id.to_string(),
            depth: folder.depth(),
        }
    }
}

/// Execute folder commands
pub fn execute(args: &FolderArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let data_path = args.data.clone().unwrap_or(config.data.file);

    let snapshot = data::load_snapshot(&data_path)?;
    let service = FolderService::new(snapshot);

    match &args.command {
        FolderCommand::List { org } => {
            let org_id = parse_org(org)?;
            let folders = service.folders_by_org(org_id);
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Children { org, name } => {
            let org_id = parse_org(org)?;
            let folders = service.descendants_of(org_id, name)?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Move {
            source,
            destination,
            yes,
        } => {
            if !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Move '{}' under '{}'?", source, destination))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let moved = service.move_folder(source, destination)?;
            data::save_snapshot(&data_path, &moved)?;
            output::print_success(&format!("Folder '{}' moved under '{}'", source, destination));
        }
        FolderCommand::Tree { org } => {
            let org_id = parse_org(org)?;
            let tree = TreeService::new().org_tree(org_id, service.folders());
            match format {
                OutputFormat::Table => {
                    for root in &tree.roots {
                        print_node(root);
                    }
                    println!("{} folders total", tree.total_folders);
                }
                OutputFormat::Json => output::print_item(&tree, format),
            }
        }
    }

    Ok(())
}

fn parse_org(org: &str) -> Result<OrgId, AppError> {
    org.parse()
        .map_err(|e| AppError::validation(format!("Invalid organization UUID: {}", e)))
}

fn print_node(node: &FolderNode) {
    let indent = "  ".repeat(node.depth);
    println!("{}├── {}", indent, node.name);
    for child in &node.children {
        print_node(child);
    }
}
