use super::resolve_input;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create the starter document in
    #[arg(default_value = ".")]
    pub dir: String,

    /// Overwrite an existing page.json
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let dir = resolve_input(&args.dir, cwd);
    fs::create_dir_all(&dir)?;

    let target = dir.join("page.json");
    if target.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            target.display()
        ));
    }

    let sample = json!({
        "ROOT": {
            "type": {"resolvedName": "Container"},
            "props": {
                "background": "#ffffff",
                "padding": {"mobile": [16, 16, 16, 16], "desktop": [48, 80, 48, 80]},
                "flexDirection": "column",
                "alignItems": "center"
            },
            "nodes": ["headline", "tagline", "cta", "photo"]
        },
        "headline": {
            "type": {"resolvedName": "Text"},
            "props": {
                "text": "Welcome to Pagecraft",
                "fontSize": {"mobile": 24, "tablet": 32, "desktop": 40},
                "fontWeight": "bold",
                "textAlign": "center"
            },
            "nodes": []
        },
        "tagline": {
            "type": {"resolvedName": "Text"},
            "props": {
                "text": "Compose pages once, render them at every breakpoint.",
                "fontSize": 16,
                "color": "#555555",
                "margin": [8, 0, 24, 0]
            },
            "nodes": []
        },
        "cta": {
            "type": {"resolvedName": "Button"},
            "props": {
                "text": "Get started",
                "backgroundColor": "#00CBFF",
                "borderRadius": 6
            },
            "nodes": []
        },
        "photo": {
            "type": {"resolvedName": "UserImage"},
            "props": {
                "src": "",
                "width": {"mobile": "100%", "desktop": 640},
                "borderRadius": 8,
                "margin": [32, 0, 0, 0]
            },
            "nodes": []
        }
    });

    fs::write(&target, serde_json::to_string_pretty(&sample)?)?;

    println!("{} Created {}", "✅".green(), target.display());
    println!(
        "   Render it with: {}",
        "pagecraft render page.json --breakpoint mobile --stdout".dimmed()
    );

    Ok(())
}
