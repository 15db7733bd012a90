//! `resumeforge history`.

use crate::editor::ResumeEditor;
use crate::error::Result;
use crate::events::Event;

/// Recorded edits, oldest first, one line each.
///
/// With `limit`, only the most recent `limit` edits are shown.
pub fn cmd_history(editor: &ResumeEditor, limit: Option<usize>) -> Result<String> {
    let Some(log) = editor.history() else {
        return Ok("History recording is disabled (record_history: false).".to_string());
    };

    let events = log.read_all()?;
    if events.is_empty() {
        return Ok("No edits recorded.".to_string());
    }

    let skip = limit.map_or(0, |n| events.len().saturating_sub(n));
    let lines: Vec<String> = events[skip..].iter().map(format_event).collect();
    Ok(lines.join("\n"))
}

fn format_event(event: &Event) -> String {
    let ts = event.ts.format("%Y-%m-%d %H:%M:%S");
    match &event.target {
        Some(target) => format!("{}  {:<18} {:<10} {}", ts, event.action, target, event.actor),
        None => format!("{}  {:<18} {:<10} {}", ts, event.action, "-", event.actor),
    }
}
