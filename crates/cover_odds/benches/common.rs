use std::time::Duration;

use cover_odds::prelude::{Cell, GridSize, OpenedCells};
use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_SIZE: usize = 50;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Opens `count` distinct cells of the standard board, chosen from `seed`.
pub fn random_opened(count: usize, seed: u64) -> OpenedCells {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = GridSize::STANDARD;
    let mut opened = OpenedCells::new();
    while opened.len() < count.min(size.cell_count()) {
        let x = rng.next_u32() % size.width;
        let y = rng.next_u32() % size.height;
        opened.insert(Cell::new(x, y));
    }
    opened
}

/// Board throughput: every cell is ranked or evaluated once per iteration.
pub fn board_throughput() -> Throughput {
    elements_throughput(GridSize::STANDARD.cell_count())
}
