use anyhow::{Context, Result};
use mdcal_core::{CalendarDate, NoteRef, Notebook};
use std::{path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> Result<String> {
    Ok(pick_editor(
        editor.as_deref(),
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    ))
}

/// First non-blank of the configured editor, `$VISUAL` and `$EDITOR`, else `vim`.
fn pick_editor(configured: Option<&str>, visual: Option<String>, editor: Option<String>) -> String {
    let usable = |e: &String| !e.trim().is_empty();
    configured
        .map(str::to_string)
        .filter(usable)
        .or_else(|| visual.filter(usable))
        .or_else(|| editor.filter(usable))
        .unwrap_or_else(|| "vim".into())
}

/// Runs the editor on `path` and waits for it. Extra words in `editor_cmd`
/// (e.g. `code --wait`) are passed as leading arguments.
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let mut parts = editor_cmd.split_whitespace();
    let program = parts.next().unwrap_or("vim");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("starting editor '{editor_cmd}'"))?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}

/// Creates the note for `date` if needed, then hands it to the editor.
pub fn open_note_in_editor(notebook: &Notebook, editor_cmd: &str, date: CalendarDate) -> Result<NoteRef> {
    let note = notebook.open_note(date)?;
    open_file_in_editor(editor_cmd, &note.path)?;
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn configured_editor_wins() {
        assert_eq!(pick_editor(Some("hx"), some("code"), some("nano")), "hx");
    }

    #[test]
    fn blank_config_falls_through_to_the_environment() {
        assert_eq!(pick_editor(Some(""), some("code --wait"), some("nano")), "code --wait");
        assert_eq!(pick_editor(Some("  "), None, some("nano")), "nano");
        assert_eq!(pick_editor(None, some(" "), some("nano")), "nano");
    }

    #[test]
    fn vim_is_the_last_resort() {
        assert_eq!(pick_editor(None, None, None), "vim");
        assert_eq!(pick_editor(Some(""), some(""), some("\t")), "vim");
    }
}
