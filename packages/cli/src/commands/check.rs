use super::{find_json_files, resolve_input};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_document::{check_with_types, DiagnosticLevel, NodeGraph};
use pagecraft_renderer::NodeKind;
use std::fs;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document file or directory to check (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let input = resolve_input(&args.path, cwd);
    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    println!("{}", "🔎 Checking page documents...".bright_blue().bold());

    let files = if input.is_file() {
        vec![input.clone()]
    } else {
        find_json_files(&input)?
    };

    if files.is_empty() {
        println!("{}", "⚠️  No .json documents found".yellow());
        return Ok(());
    }

    let mut error_count = 0;
    let mut warning_count = 0;

    for file in &files {
        let relative = file.strip_prefix(&input).unwrap_or(file);
        let text = fs::read_to_string(file)?;

        let graph = match NodeGraph::from_json(&text) {
            Ok(graph) => graph,
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative.display(),
                    e.to_string().red()
                );
                continue;
            }
        };

        let diagnostics = check_with_types(&graph, NodeKind::known_type_names());
        if diagnostics.is_empty() {
            println!("  {} {}", "✓".green(), relative.display());
            continue;
        }

        println!("  {} {}", "!".yellow(), relative.display());
        for diagnostic in &diagnostics {
            let label = match diagnostic.level {
                DiagnosticLevel::Error => {
                    error_count += 1;
                    "error".red()
                }
                DiagnosticLevel::Warning => {
                    warning_count += 1;
                    "warning".yellow()
                }
                DiagnosticLevel::Info => "info".dimmed(),
            };
            println!(
                "      {} [{}] {}",
                label,
                diagnostic.rule.dimmed(),
                diagnostic.message
            );
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Checked {} files, {} warnings",
            "✅".green(),
            files.len(),
            warning_count
        );
        Ok(())
    } else {
        Err(anyhow!("{} errors, {} warnings", error_count, warning_count))
    }
}
