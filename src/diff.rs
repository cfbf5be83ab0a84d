use crate::config::FormattingRules;
use std::collections::HashMap;

/// type of a single unified-diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `---` / `+++` lines naming the old and new file
    FileHeader,
    /// `diff --git`, `index`, mode lines, `\ No newline at end of file`, etc.
    Meta,
    HunkHeader,
    Addition,
    Deletion,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub kind: LineKind,
    pub raw: &'a str,
}

impl<'a> DiffLine<'a> {
    /// text with the leading `+`, `-` or space marker removed
    pub fn content(&self) -> &'a str {
        match self.kind {
            LineKind::Addition | LineKind::Deletion | LineKind::Context => {
                self.raw.get(1..).unwrap_or("")
            }
            _ => self.raw,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self.kind, LineKind::Addition | LineKind::Deletion)
    }
}

/// verdict for one file's diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeVerdict {
    NoChanges,
    FormattingOnly,
    ContentChanges,
}

/// changed lines split by the formatting heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub formatting: usize,
    pub content: usize,
}

impl LineCounts {
    pub fn total(&self) -> usize {
        self.formatting + self.content
    }

    pub fn verdict(&self, dominance_ratio: usize) -> ChangeVerdict {
        if self.total() == 0 {
            ChangeVerdict::NoChanges
        } else if self.formatting > self.content.saturating_mul(dominance_ratio) {
            ChangeVerdict::FormattingOnly
        } else if self.content > 0 {
            ChangeVerdict::ContentChanges
        } else {
            // unreachable once total() is non-zero
            ChangeVerdict::FormattingOnly
        }
    }
}

/// tag every line of a unified diff
///
/// `---`/`+++` only count as file headers between `diff --git` and the first
/// hunk, so a removed line reading `-- foo` is still a deletion
pub fn parse(diff: &str) -> Vec<DiffLine<'_>> {
    let mut lines = Vec::new();
    let mut in_header = true;

    for raw in diff.lines() {
        let kind = if raw.starts_with("diff ") {
            in_header = true;
            LineKind::Meta
        } else if raw.starts_with("@@") {
            in_header = false;
            LineKind::HunkHeader
        } else if in_header {
            if raw.starts_with("---") || raw.starts_with("+++") {
                LineKind::FileHeader
            } else {
                LineKind::Meta
            }
        } else if raw.starts_with('+') {
            LineKind::Addition
        } else if raw.starts_with('-') {
            LineKind::Deletion
        } else if raw.starts_with('\\') {
            LineKind::Meta
        } else {
            LineKind::Context
        };
        lines.push(DiffLine { kind, raw });
    }

    lines
}

/// whether a changed line (marker already stripped) is formatting on its own
///
/// this is a plain textual heuristic: a comment holding code, or a line that
/// merely mentions `use `, is still counted as formatting
pub fn is_formatting_line(content: &str, rules: &FormattingRules) -> bool {
    let trimmed = content.trim();

    // blank or whitespace-only
    if trimmed.is_empty() {
        return true;
    }

    // import / module declarations
    if rules
        .import_markers
        .iter()
        .any(|marker| content.contains(marker.as_str()))
    {
        return true;
    }

    // comments
    if rules
        .comment_prefixes
        .iter()
        .any(|prefix| trimmed.starts_with(prefix.as_str()))
    {
        return true;
    }

    // brace-only lines
    rules.brace_tokens.iter().any(|token| trimmed == token)
}

/// collapse whitespace runs and drop leading/trailing whitespace
pub fn normalize_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// a changed line plus whether git marked it as lacking a final newline
type HunkLine<'a> = (DiffLine<'a>, bool);

/// count formatting and content lines across every hunk
pub fn count_lines(diff: &str, rules: &FormattingRules) -> LineCounts {
    let mut counts = LineCounts::default();
    let mut hunk: Vec<HunkLine<'_>> = Vec::new();

    for line in parse(diff) {
        if line.is_change() {
            hunk.push((line, false));
        } else if line.kind == LineKind::Meta && line.raw.starts_with('\\') {
            // `\ No newline at end of file` applies to the line above it
            if let Some(last) = hunk.last_mut() {
                last.1 = true;
            }
        } else if line.kind == LineKind::HunkHeader || line.raw.starts_with("diff ") {
            count_hunk(&hunk, rules, &mut counts);
            hunk.clear();
        }
    }
    count_hunk(&hunk, rules, &mut counts);

    counts
}

/// classify one hunk's changed lines
///
/// a deletion and an addition whose text only differs in whitespace form a
/// pair, and both halves count as formatting. byte-identical text on both
/// sides is a moved line and stays content.
fn count_hunk(hunk: &[HunkLine<'_>], rules: &FormattingRules, counts: &mut LineCounts) {
    let formatting: Vec<bool> = hunk
        .iter()
        .map(|(line, _)| is_formatting_line(line.content(), rules))
        .collect();

    // candidate additions per normalised text, in hunk order
    let mut additions: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, (line, _)) in hunk.iter().enumerate() {
        if line.kind == LineKind::Addition && !formatting[idx] {
            additions
                .entry(normalize_whitespace(line.content()))
                .or_default()
                .push(idx);
        }
    }

    let mut paired = vec![false; hunk.len()];
    for (idx, (line, no_newline)) in hunk.iter().enumerate() {
        if line.kind != LineKind::Deletion || formatting[idx] {
            continue;
        }
        let Some(candidates) = additions.get(&normalize_whitespace(line.content())) else {
            continue;
        };
        let partner = candidates.iter().copied().find(|&other| {
            let (added, added_no_newline) = &hunk[other];
            !paired[other]
                && (added.content() != line.content() || added_no_newline != no_newline)
        });
        if let Some(other) = partner {
            paired[idx] = true;
            paired[other] = true;
        }
    }

    for idx in 0..hunk.len() {
        if formatting[idx] || paired[idx] {
            counts.formatting += 1;
        } else {
            counts.content += 1;
        }
    }
}

pub fn classify(diff: &str, rules: &FormattingRules) -> ChangeVerdict {
    count_lines(diff, rules).verdict(rules.dominance_ratio)
}

#[cfg(test)]
mod tests;
