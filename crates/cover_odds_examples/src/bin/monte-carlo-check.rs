use cover_odds::prelude::*;
use cover_odds_examples::{format_percent, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const TRIALS: usize = 50_000;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(2024);
    let opened: OpenedCells = [Cell::new(4, 2), Cell::new(1, 1), Cell::new(7, 3)]
        .into_iter()
        .collect();

    for id in ScenarioId::ALL {
        let objects = scenario_objects(id);
        let exact = compute_probabilities(&objects, &opened);
        let sampled = estimate_coverage(GridSize::STANDARD, &objects, &opened, TRIALS, &mut rng);

        let (worst_cell, worst) = exact
            .iter()
            .zip(sampled.iter())
            .map(|((cell, p), (_, q))| (cell, (p - q).abs()))
            .fold((Cell::ZERO, 0.0), |acc, x| if x.1 > acc.1 { x } else { acc });

        info!(
            "{}: max |exact - sampled| = {} at {} over {} trials",
            id,
            format_percent(worst),
            worst_cell,
            TRIALS
        );
    }

    Ok(())
}
