//! Plan through a narrow corridor and print roadmap statistics per sampler.
//!
//! Usage:
//!   cargo run -p gaussprm --example narrow_passage
//!   cargo run -p gaussprm --example narrow_passage -- 600
//!
//! The environment is split by a wall with a 0.6-wide slot; uniform sampling rarely
//! lands inside the slot, the biased samplers do.

use gaussprm::prelude::*;

fn main() {
    let num_nodes = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(300usize);
    let env = ObstacleField::square(0.0, 10.0)
        .with_obstacle(Obstacle::rect(4.5, 0.0, 5.5, 4.7))
        .with_obstacle(Obstacle::rect(4.5, 5.3, 5.5, 10.0));
    let starts = vec![Configuration::xy(1.0, 5.0)];
    let goals = vec![Configuration::xy(9.0, 5.0)];

    for kind in SamplerKind::ALL {
        let cfg = PlanConfig::new(2.0, num_nodes)
            .with_seed(2025)
            .with_sampler(kind);
        match plan_path(&env, &starts, &goals, &cfg) {
            Ok(out) => {
                let in_slot = out
                    .roadmap
                    .nodes()
                    .filter(|n| {
                        let [x, y] = [n.position.coords()[0], n.position.coords()[1]];
                        (4.5..=5.5).contains(&x) && (4.7..=5.3).contains(&y)
                    })
                    .count();
                println!(
                    "{kind:>16}: nodes={} edges={} in_slot={} skipped={} path={}",
                    out.roadmap.node_count(),
                    out.roadmap.edge_count(),
                    in_slot,
                    out.stats.skipped,
                    if out.found() {
                        format!("{} hops, length {:.2}", out.path.len() - 1, out.path_length())
                    } else {
                        "none".to_string()
                    }
                );
            }
            Err(e) => eprintln!("{kind:>16}: {e}"),
        }
    }
}
