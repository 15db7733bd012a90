//! CLI argument parsing for resumeforge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// resumeforge: schema-validated editing of a JSON resume document.
///
/// Every edit loads the whole document, applies one change, validates the
/// result and writes it back. Nothing is written when an edit is rejected.
#[derive(Parser, Debug)]
#[command(name = "resumeforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (default: ./resumeforge.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the resume document, overriding the config.
    #[arg(long, global = true)]
    pub resume: Option<PathBuf>,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for resumeforge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the whole resume document.
    Show,

    /// Print one section of the document by name.
    ///
    /// Valid names: summary, experiences, skills, projects, education.
    Section(SectionArgs),

    /// Read or replace the professional summary.
    Summary(SummaryCommand),

    /// Manage work experiences.
    #[command(alias = "exp")]
    Experience(ExperienceCommand),

    /// Manage bullet points inside an experience.
    Bullet(BulletCommand),

    /// Manage the skills list.
    Skill(SkillCommand),

    /// Manage projects.
    Project(ProjectCommand),

    /// Manage education entries.
    #[command(alias = "edu")]
    Education(EducationCommand),

    /// Diagnose the workspace.
    ///
    /// Reports config problems, a missing or malformed resume file, every
    /// schema violation, and an unreadable history log.
    Check,

    /// Show recorded edits, oldest first.
    History(HistoryArgs),
}

/// Arguments for the `section` command.
#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Section name.
    pub name: String,
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(subcommand)]
    pub action: SummaryAction,
}

#[derive(Subcommand, Debug)]
pub enum SummaryAction {
    /// Print the summary text.
    Get,
    /// Replace the summary text.
    Set {
        /// New summary text.
        text: String,
    },
}

// ============================================================================
// Experiences
// ============================================================================

#[derive(Args, Debug)]
pub struct ExperienceCommand {
    #[command(subcommand)]
    pub action: ExperienceAction,
}

#[derive(Subcommand, Debug)]
pub enum ExperienceAction {
    /// List all experiences.
    List,
    /// Show one experience.
    Get(IdArgs),
    /// Add an experience at the top of the list.
    Add(AddExperienceArgs),
    /// Change company, role and/or dates.
    Update(UpdateExperienceArgs),
    /// Remove an experience.
    Remove(IdArgs),
}

/// Arguments for `experience add`.
#[derive(Args, Debug)]
pub struct AddExperienceArgs {
    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub role: String,

    /// Employment period, e.g. "2021 - Present".
    #[arg(long)]
    pub dates: String,

    /// Bullet point (repeatable).
    #[arg(long = "bullet")]
    pub bullets: Vec<String>,
}

/// Arguments for `experience update`. Omitted or empty flags leave the field as is.
#[derive(Args, Debug)]
pub struct UpdateExperienceArgs {
    /// Experience ID (e.g., exp_1).
    pub id: String,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub dates: Option<String>,
}

// ============================================================================
// Bullets
// ============================================================================

#[derive(Args, Debug)]
pub struct BulletCommand {
    #[command(subcommand)]
    pub action: BulletAction,
}

#[derive(Subcommand, Debug)]
pub enum BulletAction {
    /// Append a bullet to an experience.
    Add {
        /// Experience ID (e.g., exp_1).
        experience_id: String,
        /// Bullet text.
        text: String,
    },
    /// Replace the bullet at a 0-based index.
    Update {
        experience_id: String,
        index: usize,
        text: String,
    },
    /// Remove the bullet at a 0-based index.
    Remove { experience_id: String, index: usize },
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Args, Debug)]
pub struct SkillCommand {
    #[command(subcommand)]
    pub action: SkillAction,
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    /// List all skills.
    List,
    /// Add a skill (exact duplicates are refused).
    Add { skill: String },
    /// Remove a skill by exact name.
    Remove { skill: String },
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List all projects.
    List,
    /// Show one project.
    Get(IdArgs),
    /// Add a project at the end of the list.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    /// Change name and/or description.
    Update {
        /// Project ID (e.g., proj_1).
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a project.
    Remove(IdArgs),
}

// ============================================================================
// Education
// ============================================================================

#[derive(Args, Debug)]
pub struct EducationCommand {
    #[command(subcommand)]
    pub action: EducationAction,
}

#[derive(Subcommand, Debug)]
pub enum EducationAction {
    /// List all education entries.
    List,
    /// Show one education entry.
    Get(IdArgs),
    /// Add an education entry at the end of the list.
    Add {
        #[arg(long)]
        degree: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        year: String,
    },
    /// Change degree, institution and/or year.
    Update {
        /// Education ID (e.g., edu_1).
        id: String,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        year: Option<String>,
    },
    /// Remove an education entry.
    Remove(IdArgs),
}

/// A single entity id.
#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

/// Arguments for the `history` command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Show only the most recent N edits.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
