use crate::config::Config;
use crate::wire::CompletionRequest;
use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

#[derive(Serialize)]
struct StageRecord<'a> {
    stage: &'a str,
    timestamp: DateTime<Utc>,
    request: &'a CompletionRequest,
}

fn tx_dir(root: &Path, artifacts_dir: &str, tx: Uuid) -> PathBuf {
    root.join(artifacts_dir).join("tx").join(tx.to_string())
}

/// Persist one provider round-trip under the transaction directory. Requests
/// are stored as JSON, responses as the raw completion text.
pub fn save_stage(
    stage: &str,
    req: &CompletionRequest,
    raw_response: &str,
    tx: Uuid,
    cfg: &Config,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(Path::new(&cfg.root), &cfg.artifacts_dir, tx);
    fs::create_dir_all(&dir)?;

    let mut request_path = None;
    let mut response_path = None;

    if save_request {
        let record = StageRecord { stage, timestamp: Utc::now(), request: req };
        let p = dir.join(format!("{stage}.request.json"));
        fs::write(&p, to_string_pretty(&record)?)?;
        request_path = Some(p);
    }

    if save_response {
        let p = dir.join(format!("{stage}.response.txt"));
        fs::write(&p, raw_response)?;
        response_path = Some(p);
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

/// Persist a derived artifact (the accepted plan, the generated source) under
/// the same transaction directory.
pub fn save_artifact(
    name: &str,
    contents: &str,
    tx: Uuid,
    cfg: &Config,
) -> anyhow::Result<PathBuf> {
    let dir = tx_dir(Path::new(&cfg.root), &cfg.artifacts_dir, tx);
    fs::create_dir_all(&dir)?;
    let p = dir.join(name);
    fs::write(&p, contents)?;
    Ok(p)
}

pub fn print_planned_paths(root: &Path, artifacts_dir: &str, tx: Uuid) {
    let dir = tx_dir(root, artifacts_dir, tx);
    println!("debug: planned artifacts directory: {}", dir.display());
    println!("debug: planned request path: {}", dir.join("plan.request.json").display());
    println!("debug: planned response path: {}", dir.join("plan.response.txt").display());
    std::io::stdout().flush().ok();
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    println!("debug[{stage}]: artifacts directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug[{stage}]: request saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: request not saved (flag off)");
    }
    if let Some(p) = &saved.response {
        println!("debug[{stage}]: response saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: response not saved (flag off)");
    }
    std::io::stdout().flush().ok();
}
