//! Command-line interface definitions.

pub mod auth;
pub mod experiences;
pub mod output;
pub mod portfolio;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SkillLevel;

/// Codefolio - terminal dashboard for the portfolio API.
#[derive(Parser, Debug)]
#[command(name = "codefolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate and store the session token
    Login(LoginArgs),

    /// End the session (best-effort remotely, always locally)
    Logout,

    /// Show session and endpoint status
    Status,

    /// Show the full public portfolio
    Portfolio,

    /// View or edit the profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Manage projects
    #[command(subcommand)]
    Projects(ProjectCommand),

    /// Manage skills
    #[command(subcommand)]
    Skills(SkillCommand),

    /// Manage experiences
    #[command(subcommand)]
    Experiences(ExperienceCommand),
}

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,

    /// Password; prompted for when omitted
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the profile
    Show,
    /// Replace the profile contents
    Update(ProfileUpdateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List all projects
    List,
    Create(ProjectArgs),
    /// Replace a project's contents
    Update {
        id: String,
        #[command(flatten)]
        args: ProjectArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct ProjectArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    /// Comma-separated skill tags
    #[arg(long)]
    pub skills: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// List all skills
    List,
    Create(SkillArgs),
    Update {
        id: String,
        #[command(flatten)]
        args: SkillArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct SkillArgs {
    #[arg(long)]
    pub name: String,

    /// beginner, intermediate, advanced, or expert
    #[arg(long)]
    pub level: SkillLevel,

    #[arg(long)]
    pub icon: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExperienceCommand {
    /// List all experiences, most recent first
    List,
    Create(ExperienceArgs),
    Update {
        id: String,
        #[command(flatten)]
        args: ExperienceArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct ExperienceArgs {
    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub role: String,

    /// ISO date, e.g. 2023-01-01
    #[arg(long)]
    pub start_date: String,

    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long)]
    pub details: Option<String>,
}
