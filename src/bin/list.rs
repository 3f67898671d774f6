// Linked-list demo: build a seeded random list, then tear it down.
//
// A debugger attached to the live process walks the structure directly;
// nothing is printed on stdout.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use walker_demos::builders::list::{create_random_list, free_list};
use walker_demos::cli::parse_seed;
use walker_demos::memory::NodeStore;

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "list".to_string());

    let seed = match parse_seed(args) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} <seed>", program);
            std::process::exit(1);
        }
    };

    let mut store = NodeStore::new();
    let mut rng = SmallRng::seed_from_u64(seed as u64);

    let head = match create_random_list(&mut store, &mut rng) {
        Ok(head) => head,
        Err(e) => {
            eprintln!("Error inserting entry: {}", e);
            std::process::exit(1);
        }
    };

    free_list(&mut store, head);
}
