use anyhow::Context;
use fs_err as fs;
use std::path::Path;

/// Upper bound on a previous-plan file we will embed into a prompt.
const MAX_PREVIOUS_PLAN_BYTES: usize = 32_768;

/// Load a previously generated plan so the planner can edit instead of
/// rewrite. The file must be well-formed JSON, but it is NOT validated
/// against the registry here; the model's new output goes through the
/// validator like any other.
pub fn load_previous_plan(path: &Path) -> anyhow::Result<String> {
    let data = fs::read(path)?;
    if data.len() > MAX_PREVIOUS_PLAN_BYTES {
        anyhow::bail!(
            "previous plan {} is {} bytes (limit {})",
            path.display(),
            data.len(),
            MAX_PREVIOUS_PLAN_BYTES
        );
    }
    let text = String::from_utf8_lossy(&data).into_owned();
    serde_json::from_str::<serde_json::Value>(&text)
        .with_context(|| format!("previous plan {} is not valid JSON", path.display()))?;
    Ok(text)
}
