use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod library;
pub mod logging;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use library::Library;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub const CONFIG_DIRECTORY: &str = "soundboard";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "soundboard.log";

/// Uppercase the first character, lowercase the rest, then cut the
/// result down to `limit` characters.
///
/// `"GUITAR solo"` becomes `"Guitar solo"`.
pub fn capitalize_label(s: &str, limit: usize) -> String {
    let mut chars = s.chars();
    let capitalized = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect::<String>(),
        None => String::new(),
    };

    capitalized.chars().take(limit).collect()
}

pub fn overwrite_line(message: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(MoveToColumn(0))
        .and_then(|s| s.execute(Clear(ClearType::CurrentLine)))
        .and_then(|s| s.execute(Print(message)));
    let _ = stdout.flush();
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!(
            "Refusing to use the home directory itself as a sound library. Please provide a more specific path!"
        ));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading directory with tilde (~)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_and_lowercases_the_rest() {
        assert_eq!(capitalize_label("solo", 15), "Solo");
        assert_eq!(capitalize_label("GUITAR solo", 15), "Guitar solo");
        assert_eq!(capitalize_label("", 15), "");
    }

    #[test]
    fn truncates_after_capitalizing() {
        let label = capitalize_label("a very long clip name indeed", 15);
        assert_eq!(label, "A very long cli");
        assert_eq!(label.chars().count(), 15);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(capitalize_label("ééééé", 3), "Ééé");
    }

    #[test]
    fn relative_paths_pass_through_tilde_expansion() {
        assert_eq!(expand_tilde("sounds").unwrap(), PathBuf::from("sounds"));
        assert!(expand_tilde("~").is_err());
    }
}
