//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RosterError, RosterResult};

use super::types::{ColorMode, Config, LogLevel};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "roster.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RosterResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RosterError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RosterError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the working directory config, user config, or defaults.
///
/// Unknown-key warnings from whichever file was used are returned alongside.
pub fn load_or_default(working_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let project_config = working_dir.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user_config = dirs::config_dir().map(|dir| dir.join("roster/config.toml"));

    for candidate in project_config.into_iter().chain(user_config) {
        if !candidate.exists() {
            continue;
        }
        if let Ok((config, warnings)) = load_with_warnings(&candidate) {
            return (with_env_overrides(config), warnings);
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (ROSTER_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ROSTER_DATA_DIR
    if let Ok(dir) = std::env::var("ROSTER_DATA_DIR") {
        if !dir.trim().is_empty() {
            config.storage.data_dir = PathBuf::from(dir);
        }
    }

    // ROSTER_COLOR
    if let Ok(color) = std::env::var("ROSTER_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // ROSTER_LOG
    if let Ok(level) = std::env::var("ROSTER_LOG") {
        if let Some(level) = LogLevel::parse(&level) {
            config.log.level = level;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "trainees_file",
        "courses_file",
        "output",
        "color",
        "json",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
