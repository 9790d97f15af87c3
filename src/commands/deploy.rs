//! Publish the output directory to GitHub Pages through `npx gh-pages`

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::Devlog;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GH_TOKEN";

/// Arguments passed to `npx`.
///
/// A push URL is only added when both the token and the repository are set;
/// otherwise `gh-pages` pushes to the detected `origin`.
pub fn deploy_args(output_dir: &Path, repo: &str, token: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "gh-pages".to_string(),
        "-d".to_string(),
        output_dir.to_string_lossy().into_owned(),
    ];

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        if !repo.is_empty() {
            args.push("-r".to_string());
            args.push(format!("https://{}@github.com/{}.git", token, repo));
        }
    }

    args
}

/// The arguments with the token masked, safe to print
pub fn redacted(args: &[String], token: Option<&str>) -> String {
    let joined = args.join(" ");
    match token.filter(|t| !t.is_empty()) {
        Some(token) => joined.replace(token, "***"),
        None => joined,
    }
}

/// Build the site, then push the output directory
pub fn run(devlog: &Devlog) -> Result<()> {
    devlog.build()?;

    let token = std::env::var(TOKEN_ENV).ok();
    let token = token.as_deref();
    let repo = devlog.config.deploy_repo.as_str();
    let args = deploy_args(&devlog.paths.output_dir, repo, token);

    match (token.is_some_and(|t| !t.is_empty()), repo.is_empty()) {
        (true, false) => tracing::info!("Deploying to github.com/{}", repo),
        (false, false) => tracing::warn!("{} not set, deploying to origin", TOKEN_ENV),
        _ => tracing::info!("Deploying to origin"),
    }
    tracing::debug!("Running: npx {}", redacted(&args, token));

    let status = Command::new("npx")
        .args(&args)
        .status()
        .context("Failed to run npx (is Node.js installed?)")?;
    if !status.success() {
        bail!("gh-pages failed with {}", status);
    }

    println!("Deployed {:?}", devlog.paths.output_dir);
    Ok(())
}
