use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BRACE_TOKENS, DEFAULT_COMMENT_PREFIXES,
    DEFAULT_CONFIG_FILES, DEFAULT_DOC_EXTENSIONS, DEFAULT_DOMINANCE_RATIO,
    DEFAULT_FEATURE_DIFF_KEYWORDS, DEFAULT_FEATURE_NAME, DEFAULT_FEATURE_PATH_PATTERNS,
    DEFAULT_GENERATED_FILES, DEFAULT_GITIGNORE_CANDIDATES, DEFAULT_IMPORT_MARKERS,
    DEFAULT_NOTES_MARKERS, DEFAULT_SOURCE_MARKERS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// keyword tables driving the categorizer
///
/// every field has a default, so a config file only needs the keys it changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub feature: FeatureRules,

    /// exact paths of lockfiles and other generated artifacts
    pub generated_files: Vec<String>,

    /// generated files worth adding to .gitignore rather than reviewing
    pub gitignore_candidates: Vec<String>,

    /// extensions (without the dot) treated as documentation
    pub doc_extensions: Vec<String>,

    /// path substrings that exclude a documentation file from the docs rule
    pub notes_markers: Vec<String>,

    /// file names treated as configuration
    pub config_files: Vec<String>,

    /// path substrings marking source code
    pub source_markers: Vec<String>,

    pub formatting: FormattingRules,
}

/// what makes a file part of the feature being committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureRules {
    /// name used in report headings
    pub name: String,

    /// case-insensitive regexes matched against the path
    pub path_patterns: Vec<String>,

    /// case-insensitive substrings searched for in a source file's diff
    pub diff_keywords: Vec<String>,
}

/// per-line formatting heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingRules {
    pub import_markers: Vec<String>,
    pub comment_prefixes: Vec<String>,
    pub brace_tokens: Vec<String>,

    /// formatting lines must outnumber content lines by more than this factor
    pub dominance_ratio: usize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature: FeatureRules::default(),
            generated_files: owned(DEFAULT_GENERATED_FILES),
            gitignore_candidates: owned(DEFAULT_GITIGNORE_CANDIDATES),
            doc_extensions: owned(DEFAULT_DOC_EXTENSIONS),
            notes_markers: owned(DEFAULT_NOTES_MARKERS),
            config_files: owned(DEFAULT_CONFIG_FILES),
            source_markers: owned(DEFAULT_SOURCE_MARKERS),
            formatting: FormattingRules::default(),
        }
    }
}

impl Default for FeatureRules {
    fn default() -> Self {
        Self {
            name: DEFAULT_FEATURE_NAME.to_string(),
            path_patterns: owned(DEFAULT_FEATURE_PATH_PATTERNS),
            diff_keywords: owned(DEFAULT_FEATURE_DIFF_KEYWORDS),
        }
    }
}

impl Default for FormattingRules {
    fn default() -> Self {
        Self {
            import_markers: owned(DEFAULT_IMPORT_MARKERS),
            comment_prefixes: owned(DEFAULT_COMMENT_PREFIXES),
            brace_tokens: owned(DEFAULT_BRACE_TOKENS),
            dominance_ratio: DEFAULT_DOMINANCE_RATIO,
        }
    }
}

impl Config {
    /// load from an explicit file, else the user config file, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match user_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialise config")
    }
}

/// `<config dir>/git-sort-changes/config.json`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
