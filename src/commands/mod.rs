//! Command implementations for resumeforge.
//!
//! This module resolves the workspace from the global flags, opens the
//! editor, and routes each CLI command to its handler. Handlers return the
//! text to print so they can be tested without capturing stdout; rejected
//! edits come back as [`ResumeError::Rejected`] and leave through the
//! normal error path in `main`.

pub mod check;
mod education;
mod experience;
mod history;
mod project;
mod show;
mod skill;
mod summary;


use crate::cli::{Cli, Command};
use crate::context::Workspace;
use crate::editor::{Outcome, ResumeEditor, to_pretty_json};
use crate::error::{ResumeError, Result};
use serde::Serialize;
use std::fmt::Display;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let workspace = resolve_workspace(&cli)?;

    // `check` has to run against a broken workspace, so it loads the config
    // itself instead of failing here.
    if let Command::Check = cli.command {
        return check::cmd_check(&workspace);
    }

    let config = workspace.load_config()?;
    let editor = ResumeEditor::open(&workspace, &config);
    tracing::debug!(resume = %editor.store().path().display(), "opened resume");

    let output = run(&editor, cli.command)?;
    println!("{}", output);
    Ok(())
}

/// Run one command against an open editor and return its output.
pub(crate) fn run(editor: &ResumeEditor, command: Command) -> Result<String> {
    match command {
        Command::Show => show::cmd_show(editor),
        Command::Section(args) => show::cmd_section(editor, &args.name),
        Command::Summary(cmd) => summary::run(editor, cmd.action),
        Command::Experience(cmd) => experience::run(editor, cmd.action),
        Command::Bullet(cmd) => experience::run_bullet(editor, cmd.action),
        Command::Skill(cmd) => skill::run(editor, cmd.action),
        Command::Project(cmd) => project::run(editor, cmd.action),
        Command::Education(cmd) => education::run(editor, cmd.action),
        Command::History(args) => history::cmd_history(editor, args.limit),
        Command::Check => Err(ResumeError::UserError(
            "check runs against the workspace, not an open editor".to_string(),
        )),
    }
}

fn resolve_workspace(cli: &Cli) -> Result<Workspace> {
    let mut workspace = Workspace::resolve()?;
    if let Some(config) = &cli.config {
        workspace = workspace.with_config_path(config);
    }
    if let Some(resume) = &cli.resume {
        workspace = workspace.with_resume_path(resume);
    }
    Ok(workspace)
}

/// Text for a completed write, or the rejection as an error.
fn confirm<T: Display>(outcome: Outcome<T>) -> Result<String> {
    let value = outcome.into_result()?;
    Ok(value.to_string())
}

/// Indented JSON for a completed read, or the rejection as an error.
fn observe<T: Serialize>(outcome: Outcome<T>) -> Result<String> {
    let value = outcome.into_result()?;
    to_pretty_json(&value)
}
