use super::{find_json_files, resolve_input};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_page_from_json, CompileOptions, PageOptions};
use pagecraft_document::Breakpoint;
use pagecraft_renderer::RenderOptions;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document file or directory to render (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Breakpoint to render at (mobile, tablet, desktop)
    #[arg(short, long)]
    pub breakpoint: Option<String>,

    /// Viewport width in px (used when no breakpoint is given)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (defaults to ./dist)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Emit compact single-line HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let input = resolve_input(&args.path, cwd);
    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let render_options = render_options(&args)?;

    println!("{}", "🔨 Rendering page documents...".bright_blue().bold());

    let files = if input.is_file() {
        vec![input.clone()]
    } else {
        find_json_files(&input)?
    };

    if files.is_empty() {
        println!("{}", "⚠️  No .json documents found".yellow());
        return Ok(());
    }

    println!("Found {} files", files.len());

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        match render_file(file, &args, &render_options, &input, cwd) {
            Ok(output_path) => {
                success_count += 1;
                let relative = file.strip_prefix(&input).unwrap_or(file);
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative.display(),
                    output_path
                );
            }
            Err(e) => {
                error_count += 1;
                let relative = file.strip_prefix(&input).unwrap_or(file);
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Rendered {} files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Rendered {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn render_options(args: &RenderArgs) -> Result<RenderOptions> {
    if let Some(name) = &args.breakpoint {
        let breakpoint: Breakpoint = name.parse().map_err(|e: String| anyhow!(e))?;
        return Ok(RenderOptions::at(breakpoint));
    }
    if let Some(width) = args.width {
        return Ok(RenderOptions::for_width(width));
    }
    Ok(RenderOptions::default())
}

fn render_file(
    file_path: &Path,
    args: &RenderArgs,
    render_options: &RenderOptions,
    input_root: &Path,
    cwd: &str,
) -> Result<String> {
    let text = fs::read_to_string(file_path)?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page")
        .to_string();

    let options = PageOptions {
        title,
        render: render_options.clone(),
        html: CompileOptions {
            pretty: !args.compact,
            ..Default::default()
        },
    };

    let html = compile_page_from_json(&text, &options)?;

    if args.stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    let relative: PathBuf = match file_path.strip_prefix(input_root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => PathBuf::from(file_path.file_name().unwrap_or_default()),
    };

    let out_dir = if let Some(out) = &args.out_dir {
        PathBuf::from(cwd).join(out)
    } else {
        PathBuf::from(cwd).join("dist")
    };

    let output_file = out_dir.join(relative).with_extension("html");

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, html)?;

    Ok(output_file.display().to_string())
}
