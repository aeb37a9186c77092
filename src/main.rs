use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

use uiforge::wire::{CompletionRequest, UiPlan};
use uiforge::{cli, codegen, config, context, extract, log, plan, prompt, provider, safety, ux};

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::default();
    if let Some(root) = &args.root {
        cfg.root = root.clone();
    }
    if let Some(out) = &args.out {
        cfg.out_dir = out.clone();
    }
    if let Some(provider_kind) = args.provider {
        cfg.provider = provider_kind;
        cfg.model = provider_kind.default_model().into();
    }
    if let Some(model) = &args.model {
        cfg.model = model.clone();
    }
    cfg.timeout_secs = args.timeout_secs;
    cfg.auto_approve = args.auto_approve;

    let task = args.task.clone().unwrap_or_default();
    if task.trim().is_empty() {
        anyhow::bail!("no task given; pass --task \"describe the UI you want\"");
    }

    let txid = Uuid::new_v4();
    if args.debug {
        println!("debug: flag enabled");
        log::print_planned_paths(Path::new(&cfg.root), &cfg.artifacts_dir, txid);
    }

    // Optional iteration context: a plan from an earlier run.
    let previous_plan = match &args.previous_plan {
        Some(path) => Some(context::load_previous_plan(Path::new(path))?),
        None => None,
    };

    // Refuse before anything reaches the network.
    safety::check_request(&task, previous_plan.as_deref())?;

    let prov = provider::make_provider(cfg.provider, cfg.model.clone(), cfg.timeout_secs)?;

    // ===== PHASE 1: PLAN =====
    let plan_req = CompletionRequest {
        system: prompt::system_prompt_plan(),
        user: prompt::user_prompt_plan(&task, previous_plan.as_deref()),
        temperature: 0.2,
    };

    let pb = spinner(format!("waiting for {} ({})", cfg.provider, cfg.model));
    let raw = prov.complete(&plan_req, args.debug).await;
    pb.finish_and_clear();
    let raw = raw?;

    if raw.len() > cfg.max_response_bytes {
        anyhow::bail!(
            "completion is {} bytes, over the {} byte limit",
            raw.len(),
            cfg.max_response_bytes
        );
    }

    let saved = log::save_stage("plan", &plan_req, &raw, txid, &cfg, args.save_request, args.save_response)?;
    if args.debug {
        log::print_saved_paths("plan", &saved);
    }

    // ===== PHASE 2: VALIDATE =====
    let candidate = extract::extract_plan(&raw)?;
    let verdict = plan::validate(&candidate);
    if !verdict.is_valid {
        ux::print_validation_dashboard(&verdict.errors);
        anyhow::bail!("plan failed validation with {} violation(s)", verdict.errors.len());
    }

    let ui_plan: UiPlan =
        serde_json::from_value(candidate).context("validated plan did not deserialize")?;
    let plan_json = serde_json::to_string_pretty(&ui_plan)?;
    log::save_artifact("plan.json", &plan_json, txid, &cfg)?;

    ux::show_plan(&ui_plan);
    if !cfg.auto_approve && !ux::confirm("Generate code for this plan?") {
        println!("Aborted by user.");
        return Ok(());
    }

    // ===== PHASE 3: GENERATE =====
    let code = codegen::generate(&ui_plan);
    log::save_artifact("generated-ui.tsx", &code, txid, &cfg)?;

    let out_path = if args.dry_run {
        None
    } else {
        let out_dir = Path::new(&cfg.root).join(&cfg.out_dir);
        fs_err::create_dir_all(&out_dir)?;
        let path = out_dir.join("generated-ui.tsx");
        fs_err::write(&path, &code)?;
        Some(path)
    };
    ux::print_generation_summary(&code, out_path.as_deref());

    // ===== PHASE 4 (optional): EXPLAIN =====
    if args.explain {
        let explain_req = CompletionRequest {
            system: prompt::system_prompt_explain().to_string(),
            user: prompt::user_prompt_explain(&task, &plan_json),
            temperature: 0.2,
        };
        let pb = spinner(format!("asking {} to explain the plan", cfg.provider));
        let explained = prov.complete(&explain_req, args.debug).await;
        pb.finish_and_clear();
        match explained {
            Ok(text) => {
                println!("\n=== EXPLANATION ===\n{}\n", text.trim());
                log::save_stage("explain", &explain_req, &text, txid, &cfg, args.save_request, args.save_response).ok();
            }
            // The code is already on disk; a missing explanation is not worth failing over.
            Err(err) => eprintln!("warning: explainer call failed: {err}"),
        }
    }

    Ok(())
}
