use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tipwell_core::models::goal::Goal;
use tipwell_core::models::profile::{Gender, MAX_AGE, MIN_AGE};

/// tipwell - AI-generated wellness tips for your profile
#[derive(Parser, Debug)]
#[command(name = "tipwell")]
#[command(about = "AI-generated wellness tips for your age and goal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this store file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create or show your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// List the goals you can pick from
    Goals,

    /// Show tips for your profile
    Tips {
        /// Discard the cached list and generate a new one
        #[arg(short, long)]
        regenerate: bool,
    },

    /// Show the full detail for one tip
    Tip {
        /// Tip id as shown by `tipwell tips`
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Save a tip to your board
    Save {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove a tip from your board
    Unsave {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show your saved tips
    Saved,

    /// Forget your profile, saved tips and every cached tip
    Logout,

    /// Show or initialise the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
    /// Replace your profile
    Set {
        #[arg(long, value_parser = clap::value_parser!(u8).range(MIN_AGE as i64..=MAX_AGE as i64))]
        age: u8,

        /// male, female, other or prefer-not-to-say
        #[arg(long)]
        gender: Gender,

        /// Goal id, see `tipwell goals`
        #[arg(long)]
        goal: Goal,
    },

    /// Print your current profile
    Show,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
