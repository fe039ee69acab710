//! Prints randomly generated transactions as JSON without submitting them.
//! can be run with `cargo run --example dry_run -- [count]`

use std::env;

use rand::thread_rng;
use tx_seeder::generator::random_transaction;

fn main() {
    let count: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);

    let mut rng = thread_rng();
    for _ in 0..count {
        let transaction = random_transaction(&mut rng);
        println!("{}", serde_json::to_string_pretty(&transaction).unwrap());
    }
}
