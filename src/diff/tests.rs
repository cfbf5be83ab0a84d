use super::*;

/// helper to wrap changed lines in a single-file, single-hunk diff
fn diff_of(path: &str, body: &[&str]) -> String {
    let mut out = format!(
        "diff --git a/{path} b/{path}\nindex 1111111..2222222 100644\n--- a/{path}\n+++ b/{path}\n@@ -1,{n} +1,{n} @@\n",
        n = body.len()
    );
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn rules() -> FormattingRules {
    FormattingRules::default()
}

#[test]
fn test_parse_tags_each_line() {
    let diff = diff_of("src/lib.rs", &[" context", "-old", "+new", "\\ No newline at end of file"]);
    let kinds: Vec<LineKind> = parse(&diff).iter().map(|l| l.kind).collect();

    assert_eq!(
        kinds,
        vec![
            LineKind::Meta,
            LineKind::Meta,
            LineKind::FileHeader,
            LineKind::FileHeader,
            LineKind::HunkHeader,
            LineKind::Context,
            LineKind::Deletion,
            LineKind::Addition,
            LineKind::Meta,
        ]
    );
}

#[test]
fn test_parse_keeps_double_dash_deletions_inside_hunks() {
    let diff = diff_of("notes.sql", &["--- select 1;", "+++ counter"]);
    let lines = parse(&diff);

    let changes: Vec<_> = lines.iter().filter(|l| l.is_change()).collect();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].kind, LineKind::Deletion);
    assert_eq!(changes[0].content(), "-- select 1;");
    assert_eq!(changes[1].kind, LineKind::Addition);
}

#[test]
fn test_content_strips_marker() {
    let diff = diff_of("a.rs", &["+    let x = 1;"]);
    let line = parse(&diff).into_iter().find(|l| l.is_change()).unwrap();
    assert_eq!(line.content(), "    let x = 1;");
}

#[test]
fn test_formatting_predicate() {
    let rules = rules();

    assert!(is_formatting_line("", &rules));
    assert!(is_formatting_line("   \t", &rules));
    assert!(is_formatting_line("use std::fmt;", &rules));
    assert!(is_formatting_line("pub mod grid;", &rules));
    assert!(is_formatting_line("    // explain", &rules));
    assert!(is_formatting_line("  };", &rules));
    assert!(is_formatting_line("},", &rules));

    assert!(!is_formatting_line("let cost = heuristic(a, b);", &rules));
    assert!(!is_formatting_line("fn main() {", &rules));
    assert!(!is_formatting_line("# Title", &rules));
}

#[test]
fn test_formatting_predicate_is_a_textual_heuristic() {
    // a commented-out statement and a sentence mentioning "use " still count
    assert!(is_formatting_line("// let x = compute();", &rules()));
    assert!(is_formatting_line("We use the grid here.", &rules()));
}

#[test]
fn test_empty_diff_has_no_changes() {
    assert_eq!(classify("", &rules()), ChangeVerdict::NoChanges);
}

#[test]
fn test_metadata_only_diff_has_no_changes() {
    let diff = "diff --git a/run.sh b/run.sh\nold mode 100644\nnew mode 100755\n";
    assert_eq!(classify(diff, &rules()), ChangeVerdict::NoChanges);
}

#[test]
fn test_blank_lines_only_is_formatting() {
    let diff = diff_of("src/a.rs", &["+", "-   ", "+\t", " fn a() {}"]);
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_five_to_one_is_formatting_only() {
    let mut body = vec!["+"; 10];
    body.extend(["+let a = 1;", "-let b = 2;"]);
    let diff = diff_of("src/a.rs", &body);

    let counts = count_lines(&diff, &rules());
    assert_eq!(
        counts,
        LineCounts {
            formatting: 10,
            content: 2
        }
    );
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_two_and_a_half_to_one_is_content() {
    let mut body = vec!["+"; 10];
    body.extend(["+let a = 1;", "-let b = 2;", "+let c = 3;", "-let d = 4;"]);
    let diff = diff_of("src/a.rs", &body);

    assert_eq!(count_lines(&diff, &rules()).content, 4);
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::ContentChanges);
}

#[test]
fn test_exactly_three_to_one_is_content() {
    let diff = diff_of("src/a.rs", &["+", "+", "+", "+let a = 1;"]);
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::ContentChanges);
}

#[test]
fn test_trailing_whitespace_edit_is_formatting() {
    let diff = diff_of("README.md", &["-The quick fox.", "+The quick fox.   "]);

    assert_eq!(
        count_lines(&diff, &rules()),
        LineCounts {
            formatting: 2,
            content: 0
        }
    );
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_reindented_line_is_formatting() {
    let diff = diff_of(
        "src/a.rs",
        &["-        total += step;", "+    total  +=  step;"],
    );
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_reworded_sentence_is_content() {
    let diff = diff_of("README.md", &["-The quick fox.", "+The slow fox."]);
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::ContentChanges);
}

#[test]
fn test_whitespace_pairs_match_one_to_one() {
    // two removals, one re-indented addition: one removal is unmatched
    let diff = diff_of("src/a.rs", &["-step();", "-step();", "+  step();"]);
    assert_eq!(
        count_lines(&diff, &rules()),
        LineCounts {
            formatting: 2,
            content: 1
        }
    );
}

#[test]
fn test_pairs_do_not_cross_hunks() {
    let diff = "diff --git a/a.rs b/a.rs\n--- a/a.rs\n+++ b/a.rs\n@@ -1 +1 @@\n-step();\n@@ -9 +9 @@\n+  step();\n";
    assert_eq!(
        count_lines(diff, &rules()),
        LineCounts {
            formatting: 0,
            content: 2
        }
    );
}

#[test]
fn test_custom_ratio() {
    let mut rules = rules();
    rules.dominance_ratio = 1;
    let diff = diff_of("src/a.rs", &["+", "+", "+let a = 1;"]);

    assert_eq!(classify(&diff, &rules), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_verdict_ladder() {
    let verdict = |formatting, content| LineCounts { formatting, content }.verdict(3);

    assert_eq!(verdict(0, 0), ChangeVerdict::NoChanges);
    assert_eq!(verdict(4, 1), ChangeVerdict::FormattingOnly);
    assert_eq!(verdict(3, 1), ChangeVerdict::ContentChanges);
    assert_eq!(verdict(0, 7), ChangeVerdict::ContentChanges);
    assert_eq!(verdict(1, 0), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_missing_final_newline_pairs_across_marker() {
    let diff = diff_of(
        "src/a.rs",
        &["-finish();", "\\ No newline at end of file", "+finish();"],
    );
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::FormattingOnly);
}

#[test]
fn test_reordered_statement_is_content() {
    let diff = diff_of(
        "src/a.rs",
        &["-let total = base;", " let base = load();", "+let total = base;"],
    );

    assert_eq!(
        count_lines(&diff, &rules()),
        LineCounts {
            formatting: 0,
            content: 2
        }
    );
    assert_eq!(classify(&diff, &rules()), ChangeVerdict::ContentChanges);
}

#[test]
fn test_moved_line_does_not_consume_reindented_partner() {
    // the identical addition is a move; the re-indented one pairs
    let diff = diff_of(
        "src/a.rs",
        &["-step();", "+step();", "+    step();"],
    );

    assert_eq!(
        count_lines(&diff, &rules()),
        LineCounts {
            formatting: 2,
            content: 1
        }
    );
}
