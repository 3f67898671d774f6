// Container demo: fill std containers from one saved draw sequence.
//
// The draws are generated once and reused for every container, so a single
// seed produces the same contents in each of them.  The containers are kept
// live until the end of main for a debugger attached to the process.

use std::collections::{BTreeMap, LinkedList};
use std::hint::black_box;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use walker_demos::cli::parse_seed;
use walker_demos::constants::RANDOM_DRAWS;

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "containers".to_string());

    let seed = match parse_seed(args) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} <seed>", program);
            std::process::exit(1);
        }
    };

    let mut rng = SmallRng::seed_from_u64(seed as u64);
    let draws: Vec<i32> = (0..RANDOM_DRAWS)
        .map(|_| rng.gen_range(0..=i32::MAX))
        .collect();

    let as_list: LinkedList<i32> = draws.iter().copied().collect();
    let as_vec: Vec<i32> = draws.clone();
    let as_map: BTreeMap<i32, usize> = draws
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| (value, index))
        .collect();

    black_box(&as_list);
    black_box(&as_vec);
    black_box(&as_map);
}
