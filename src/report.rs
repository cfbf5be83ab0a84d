use crate::categorize::{Category, Groups};
use crate::config::Config;
use crate::constants::RULE_WIDTH;
use colored::Colorize;
use std::borrow::Cow;
use std::io::{self, Write};

/// shell-quote a path for a copyable command
fn quote(path: &str) -> Cow<'_, str> {
    shlex::try_quote(path).unwrap_or(Cow::Borrowed(path))
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.to_uppercase().bold())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// write the grouped listing, recommendations and workflow
pub fn render(out: &mut impl Write, groups: &Groups, config: &Config) -> io::Result<()> {
    let feature = config.feature.name.as_str();

    writeln!(
        out,
        "{}",
        format!("analysing unstaged changes for {feature} commit organisation").green()
    )?;
    writeln!(out)?;

    render_groups(out, groups, feature)?;
    writeln!(out)?;
    render_recommendations(out, groups, config)?;
    writeln!(out)?;
    render_workflow(out, feature)
}

fn render_groups(out: &mut impl Write, groups: &Groups, feature: &str) -> io::Result<()> {
    heading(out, "change categorisation results")?;

    for (category, paths) in groups.iter() {
        let file_word = if paths.len() == 1 { "file" } else { "files" };
        writeln!(out)?;
        writeln!(
            out,
            "{} ({} {}):",
            category.label(feature).to_uppercase().bold(),
            paths.len(),
            file_word
        )?;
        for path in paths {
            writeln!(out, "  • {path}")?;
        }
    }

    Ok(())
}

fn render_recommendations(out: &mut impl Write, groups: &Groups, config: &Config) -> io::Result<()> {
    let feature = config.feature.name.as_str();
    heading(out, "recommendations")?;

    let feature_paths = groups.get(Category::Feature);
    if !feature_paths.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", format!("include in {feature} commit:").bold())?;
        for path in feature_paths {
            writeln!(out, "  git add {}", quote(path))?;
        }
    }

    let formatting = groups.get(Category::Formatting);
    if !formatting.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "handle formatting separately:".bold())?;
        writeln!(out, "  # option 1: reset formatting changes")?;
        for path in formatting {
            writeln!(out, "  git checkout -- {}", quote(path))?;
        }
        writeln!(out)?;
        writeln!(out, "  # option 2: stash for later formatting commit")?;
        let quoted: Vec<Cow<'_, str>> = formatting.iter().map(|p| quote(p)).collect();
        writeln!(
            out,
            "  git stash push -m 'formatting changes' -- {}",
            quoted.join(" ")
        )?;
    }

    let generated = groups.get(Category::Generated);
    if !generated.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "add to .gitignore:".bold())?;
        let (ignorable, keep): (Vec<&String>, Vec<&String>) = generated
            .iter()
            .partition(|path| config.gitignore_candidates.contains(path));
        for path in keep {
            writeln!(out, "  # note: {path} might be intentional - review manually")?;
        }
        if !ignorable.is_empty() {
            writeln!(out, "  # add these to .gitignore:")?;
            for path in ignorable {
                writeln!(out, "  echo {} >> .gitignore", quote(path))?;
            }
        }
    }

    let review = [Category::UnrelatedCode, Category::Other];
    if review.iter().any(|category| !groups.get(*category).is_empty()) {
        writeln!(out)?;
        writeln!(out, "{}", "review manually:".bold())?;
        for category in review {
            let paths = groups.get(category);
            if paths.is_empty() {
                continue;
            }
            writeln!(out, "  # {}:", category.label(feature))?;
            for path in paths {
                writeln!(out, "  git diff {}  # review this file", quote(path))?;
            }
        }
    }

    Ok(())
}

fn render_workflow(out: &mut impl Write, feature: &str) -> io::Result<()> {
    heading(out, "suggested workflow")?;
    writeln!(out, "1. stage {feature}-related files (see above)")?;
    writeln!(out, "2. reset or stash formatting-only changes")?;
    writeln!(out, "3. review unrelated changes for separate commits")?;
    writeln!(out, "4. update .gitignore for generated files")?;
    writeln!(out, "5. commit clean {feature} feature")
}
