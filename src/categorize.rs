use crate::config::Config;
use crate::diff::{self, ChangeVerdict};
use crate::git::Vcs;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use regex::{RegexSet, RegexSetBuilder};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// bucket a changed file lands in
///
/// declaration order is report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// part of the feature being committed (pathfinding by default)
    Feature,
    Formatting,
    Generated,
    Docs,
    Config,
    UnrelatedCode,
    Other,
}

impl Category {
    /// human label; the feature category takes the configured feature name
    pub fn label<'a>(&self, feature_name: &'a str) -> &'a str {
        match self {
            Category::Feature => feature_name,
            Category::Formatting => "formatting",
            Category::Generated => "generated",
            Category::Docs => "docs",
            Category::Config => "config",
            Category::UnrelatedCode => "unrelated code",
            Category::Other => "other",
        }
    }
}

/// paths grouped by category, first-seen order within each group
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Groups {
    entries: BTreeMap<Category, Vec<String>>,
    seen: HashSet<String>,
}

impl Groups {
    /// add a path; returns false if it was already grouped
    pub fn insert(&mut self, category: Category, path: impl Into<String>) -> bool {
        let path = path.into();
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.entries.entry(category).or_default().push(path);
        true
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// non-empty groups in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(category, paths)| (*category, paths.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// assigns a `Category` to each path using the configured rules
pub struct Categorizer<'a, V: Vcs> {
    vcs: &'a V,
    config: &'a Config,
    feature_paths: RegexSet,
}

impl<'a, V: Vcs> Categorizer<'a, V> {
    pub fn new(vcs: &'a V, config: &'a Config) -> Result<Self> {
        let feature_paths = RegexSetBuilder::new(&config.feature.path_patterns)
            .case_insensitive(true)
            .build()
            .context("invalid feature path pattern")?;

        Ok(Self {
            vcs,
            config,
            feature_paths,
        })
    }

    /// verdict for the unstaged diff of `path`
    pub fn classify_diff(&self, path: &str) -> ChangeVerdict {
        diff::classify(&self.vcs.diff(path), &self.config.formatting)
    }

    /// first matching rule wins
    pub fn categorize(&self, path: &str) -> Category {
        let config = self.config;

        // feature paths short-circuit any diff inspection
        if self.feature_paths.is_match(path) {
            return Category::Feature;
        }

        if config.generated_files.iter().any(|name| name == path) {
            return Category::Generated;
        }

        if self.is_doc(path) {
            return match self.classify_diff(path) {
                ChangeVerdict::FormattingOnly => Category::Formatting,
                _ => Category::Docs,
            };
        }

        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy());
        if let Some(file_name) = file_name
            && config.config_files.iter().any(|name| *name == file_name)
        {
            return Category::Config;
        }

        // fetch once, reuse the text for the keyword search
        let diff_text = self.vcs.diff(path);
        if diff::classify(&diff_text, &config.formatting) == ChangeVerdict::FormattingOnly {
            return Category::Formatting;
        }

        if !contains_any(path, &config.source_markers) {
            return Category::Other;
        }

        let diff_lower = diff_text.to_lowercase();
        if config
            .feature
            .diff_keywords
            .iter()
            .any(|keyword| diff_lower.contains(&keyword.to_lowercase()))
        {
            Category::Feature
        } else {
            Category::UnrelatedCode
        }
    }

    /// categorize every path in order, ticking `progress` once per path
    pub fn group(&self, paths: &[String], progress: &ProgressBar) -> Groups {
        let mut groups = Groups::default();
        for path in paths {
            progress.set_message(path.clone());
            groups.insert(self.categorize(path), path.as_str());
            progress.inc(1);
        }
        groups
    }

    fn is_doc(&self, path: &str) -> bool {
        let has_doc_extension = Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.config.doc_extensions.iter().any(|d| *d == ext));

        has_doc_extension && !contains_any(path, &self.config.notes_markers)
    }
}

fn contains_any(path: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| path.contains(marker.as_str()))
}
