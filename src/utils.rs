// src/utils.rs
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Normalize a user identifier for file system usage
pub fn normalize_user_id(id: &str) -> String {
    id.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Collapse runs of whitespace and strip markup-sensitive characters
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.trim().chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else if !matches!(c, '<' | '>' | '"' | '\'' | '&') {
            out.push(c);
            last_was_space = false;
        } else {
            last_was_space = false;
        }
    }

    out
}

/// Standardize a free-form experience level description
pub fn parse_experience_level(text: &str) -> &'static str {
    let text = text.to_lowercase();

    let matches_any = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

    if matches_any(&["entry", "junior", "new", "graduate", "0-2"]) {
        "Entry Level"
    } else if matches_any(&["mid", "intermediate", "3-5", "2-5"]) {
        "Mid Level"
    } else if matches_any(&["senior", "lead", "principal", "5+"]) {
        "Senior Level"
    } else if matches_any(&["executive", "director", "vp", "chief"]) {
        "Executive"
    } else {
        "Mid Level"
    }
}

/// Ensure directory exists
pub async fn ensure_directory(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
