//! Command-line interface definitions.

use crate::utils::path::expand_dir;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Rebuild terraform configuration for SD-WAN objects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sdwan-tf.toml, if present)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Prefix for generated files (overrides [output] basename)
    #[arg(short, long, global = true)]
    pub basename: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Process a previously imported terraform.tfstate and create terraform resources
    #[command(visible_alias = "c")]
    Create {
        #[command(flatten)]
        dirs: DirArgs,

        /// State file name inside the source directory
        #[arg(long, default_value = "terraform.tfstate")]
        state: PathBuf,
    },

    /// Process SD-WAN backup data and import it into terraform.tfstate
    #[command(visible_alias = "i")]
    Import {
        #[command(flatten)]
        dirs: DirArgs,

        /// Only generate the skeleton and import script, do not run terraform
        #[arg(long)]
        no_apply: bool,

        /// Terraform binary (overrides [import] terraform)
        #[arg(long)]
        terraform: Option<String>,

        /// Also import Default_* and Factory_Default_* device templates
        #[arg(long)]
        include_defaults: bool,
    },

    /// Process SD-WAN backup data and create device variable resources
    #[command(visible_alias = "v")]
    Vars {
        #[command(flatten)]
        dirs: DirArgs,
    },
}

/// Source and destination directories shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// Directory with the source data
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source_dir: Option<PathBuf>,

    /// Directory to store generated files
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub destination_dir: Option<PathBuf>,
}

impl DirArgs {
    /// Source directory, `default` when not given.
    pub fn source(&self, default: &str) -> PathBuf {
        expand_dir(self.source_dir.as_deref().unwrap_or(Path::new(default)))
    }

    /// Destination directory, `./` when not given.
    pub fn destination(&self) -> PathBuf {
        expand_dir(self.destination_dir.as_deref().unwrap_or(Path::new(".")))
    }
}
