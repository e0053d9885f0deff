use anyhow::{Context, Result};
use quorum_store::Workspace;
use std::env;

pub fn run() -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let ws = Workspace::init(&cwd).context("failed to initialize workspace")?;
    let count = ws.decisions.list()?.len();
    println!(
        "Initialized Quorum workspace in {} with {} sample decisions",
        ws.quorum_dir().display(),
        count
    );
    Ok(())
}
