use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gaussprm::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod scenario;

use provenance::{write_sidecar, RunRecord};
use scenario::{PlanReport, Scenario};

#[derive(Parser)]
#[command(name = "prm-cli")]
#[command(about = "Probabilistic roadmap planning with narrow-passage sampling")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan a path for a scenario and write the roadmap and path as JSON
    Plan {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Overrides the scenario seed
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        num_nodes: Option<usize>,
        #[arg(long)]
        radius: Option<f64>,
        /// gaussian | bridge | simple_gaussian | simple_bridge | uniform
        #[arg(long)]
        sampler: Option<String>,
        /// brute_force | rtree
        #[arg(long)]
        neighbor_search: Option<String>,
    },
    /// Draw samples from one sampler and print them as JSON lines
    Sample {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long, default_value = "gaussian")]
        sampler: String,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Plan {
            scenario,
            out,
            seed,
            num_nodes,
            radius,
            sampler,
            neighbor_search,
        } => {
            let mut loaded = Scenario::load(&scenario)?;
            let cfg = &mut loaded.config;
            if let Some(seed) = seed {
                cfg.seed = Some(seed);
            }
            if let Some(n) = num_nodes {
                cfg.num_nodes = n;
            }
            if let Some(r) = radius {
                cfg.radius = r;
            }
            if let Some(s) = sampler {
                cfg.sampler = s.parse()?;
            }
            if let Some(s) = neighbor_search {
                cfg.neighbor_search = s.parse()?;
            }
            // Pin the seed so the sidecar can reproduce the run.
            cfg.seed.get_or_insert_with(rand::random);
            plan(&scenario, &loaded, &out)
        }
        Action::Sample {
            scenario,
            sampler,
            count,
            seed,
        } => sample(&scenario, &sampler, count, seed),
        Action::Report => report(),
    }
}

fn plan(scenario_path: &Path, scenario: &Scenario, out: &Path) -> Result<()> {
    let cfg = &scenario.config;
    tracing::info!(
        scenario = %scenario_path.display(),
        radius = cfg.radius,
        num_nodes = cfg.num_nodes,
        sampler = %cfg.sampler,
        neighbor_search = %cfg.neighbor_search,
        seed = ?cfg.seed,
        "plan"
    );
    let outcome = plan_path(
        &scenario.environment,
        &scenario.starts(),
        &scenario.goals(),
        cfg,
    )
    .context("planning failed")?;
    if !outcome.found() {
        tracing::warn!("no path between start and goal");
    }

    let report = PlanReport::from(&outcome);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let run = RunRecord::new(cfg.seed.unwrap_or_default(), serde_json::to_value(cfg)?)
        .with_input(scenario_path)?;
    let prov = write_sidecar(out, &run)?;
    tracing::info!(
        found = report.found,
        hops = report.path.len().saturating_sub(1),
        length = report.path_length,
        out = %out.display(),
        provenance = %prov.display(),
        "written"
    );
    Ok(())
}

fn sample(scenario_path: &Path, sampler: &str, count: usize, seed: Option<u64>) -> Result<()> {
    let scenario = Scenario::load(scenario_path)?;
    let kind: SamplerKind = sampler.parse()?;
    let mut rng = match seed.or(scenario.config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cfg = &scenario.config.sampler_cfg;
    let mut failures = 0usize;
    for index in 0..count {
        match kind.draw(&scenario.environment, &mut rng, cfg) {
            Ok(p) => {
                let line = serde_json::json!({"index": index, "sample": p.to_vec()});
                println!("{line}");
            }
            Err(e) if e.is_recoverable() => failures += 1,
            Err(e) => return Err(e).context("sampling failed"),
        }
    }
    tracing::info!(sampler = %kind, count, failures, "sample");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": gaussprm::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
