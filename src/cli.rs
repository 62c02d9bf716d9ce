//! Command-line interface for markpane.
//!
//! Inspects and edits saved layout files: print an outline, validate,
//! normalize, apply a split, or list the windows of the session file.

use crate::session::storage::{load_layout_from, load_session_from, save_layout_to};
use crate::tree::{
    AcceptAll, DocumentTree, FileProbe, FsProbe, Insertion, SplitDirection, TreeNode,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use markpane_config::{Config, LogLevel};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// markpane - split-pane layouts and tab strips of a Markdown editor
#[derive(Parser, Debug)]
#[command(name = "markpane")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/markpane/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG and config
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print an indented outline of a layout file
    Show {
        file: PathBuf,

        /// Keep tabs whose file does not exist
        #[arg(long)]
        no_verify: bool,
    },

    /// Check that a layout file loads (exit code 1 if it does not)
    Validate { file: PathBuf },

    /// Load a layout and write it back with every recoverable problem repaired
    Normalize {
        file: PathBuf,

        /// Write here instead of overwriting FILE
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Keep tabs whose file does not exist
        #[arg(long)]
        no_verify: bool,
    },

    /// Split one pane of a layout file
    Split {
        file: PathBuf,

        /// ID of the leaf to split
        #[arg(long, value_name = "ID")]
        leaf: String,

        /// horizontal or vertical
        #[arg(long)]
        direction: SplitDirection,

        /// Put the new pane before or after the split one
        #[arg(long, default_value = "after")]
        insertion: Insertion,

        /// Write here instead of overwriting FILE
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Keep tabs whose file does not exist
        #[arg(long)]
        no_verify: bool,
    },

    /// List the windows stored in the session file
    Windows,
}

/// Load the config named by `--config`, or the default one
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    Ok(config)
}

/// Run the parsed command and return the process exit code
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Show { file, no_verify } => {
            let probe = file_probe(*no_verify, config);
            let tree = load_layout_from(file, probe.as_ref())?;
            print!("{}", render_outline(&tree));
            Ok(0)
        }
        Commands::Validate { file } => match load_layout_from(file, &AcceptAll) {
            Ok(tree) => {
                println!(
                    "{}: ok ({} panes, {} nodes)",
                    file.display(),
                    tree.all_leaves().len(),
                    tree.node_count()
                );
                Ok(0)
            }
            Err(e) => {
                println!("{}: invalid: {:#}", file.display(), e);
                Ok(1)
            }
        },
        Commands::Normalize {
            file,
            output,
            no_verify,
        } => {
            let probe = file_probe(*no_verify, config);
            let tree = load_layout_from(file, probe.as_ref())?;
            let target = output.as_deref().unwrap_or(file);
            save_layout_to(&tree, target)?;
            println!("Wrote {}", target.display());
            Ok(0)
        }
        Commands::Split {
            file,
            leaf,
            direction,
            insertion,
            output,
            no_verify,
        } => {
            let probe = file_probe(*no_verify, config);
            let mut tree = load_layout_from(file, probe.as_ref())?;
            let Some(new_leaf) = tree.split(leaf, *direction, *insertion) else {
                anyhow::bail!("{} has no pane with id {}", file.display(), leaf);
            };
            let target = output.as_deref().unwrap_or(file);
            save_layout_to(&tree, target)?;
            println!("{}", new_leaf);
            Ok(0)
        }
        Commands::Windows => {
            list_windows(&config.session_path(), config)?;
            Ok(0)
        }
    }
}

/// [`FsProbe`] unless verification is switched off by flag or config
fn file_probe(no_verify: bool, config: &Config) -> Box<dyn FileProbe> {
    if no_verify || !config.verify_files_on_restore {
        Box::new(AcceptAll)
    } else {
        Box::new(FsProbe)
    }
}

fn list_windows(session_path: &Path, config: &Config) -> anyhow::Result<()> {
    let Some(state) = load_session_from(session_path)? else {
        println!("No saved session at {}", session_path.display());
        return Ok(());
    };

    println!("Session saved at {}", state.saved_at);
    let probe = file_probe(false, config);
    for key in state.window_keys() {
        match state.restore_window(key, probe.as_ref()) {
            Ok(Some(tree)) => println!("  {}: {} panes", key, tree.all_leaves().len()),
            Ok(None) => {}
            Err(e) => println!("  {}: invalid layout ({})", key, e),
        }
    }
    Ok(())
}

/// Indented outline of the tree, one line per node and per open document.
///
/// The active document of each leaf is marked with `*`.
pub fn render_outline(tree: &DocumentTree) -> String {
    let mut out = String::new();
    render_node(tree, tree.node(), 0, &mut out);
    out
}

fn render_node(tree: &DocumentTree, node: &TreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        TreeNode::Leaf(leaf) => {
            let tabs = leaf.tab_manager();
            let _ = writeln!(
                out,
                "{}{} {} ({} open)",
                indent,
                node.kind(),
                leaf.id(),
                tabs.len()
            );
            let active = tabs.active_file().map(|doc| doc.path.as_str());
            for doc in tabs.open_files() {
                let marker = if active == Some(doc.path.as_str()) { '*' } else { ' ' };
                let pinned = if doc.pinned { " [pinned]" } else { "" };
                let _ = writeln!(out, "{}  {} {}{}", indent, marker, doc.path, pinned);
            }
        }
        TreeNode::Branch(branch) => {
            let sizes: Vec<String> = branch.sizes().iter().map(|s| format!("{s:.1}")).collect();
            let _ = writeln!(
                out,
                "{}{} {} {} [{}]",
                indent,
                node.kind(),
                branch.id(),
                branch.direction(),
                sizes.join(", ")
            );
            for child in branch.nodes().iter().filter_map(|id| tree.get(id)) {
                render_node(tree, child, depth + 1, out);
            }
        }
    }
}
