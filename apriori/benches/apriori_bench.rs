use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use apriori::{apriori_algorithm, CandidateStrategy, CountingStrategy, Database, MiningConfig};

/// Generate a synthetic transaction database
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_database(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Database {
    let mut rng = rand::thread_rng();
    let rows: Vec<Vec<usize>> = (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut items = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    items.push(rng.gen_range(0..num_items));
                }
            }
            items
        })
        .collect();

    Database::new(num_items, rows).expect("generated items are in range")
}

fn config(min_support: f64) -> MiningConfig {
    MiningConfig::new(min_support).expect("valid support").with_max_candidates(None)
}

/// Benchmark Apriori with different dataset sizes
fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let database = generate_database(num_tx, num_items, avg_size, 0.7);
        let config = config(0.1);

        group.bench_with_input(BenchmarkId::from_parameter(name), &database, |b, db| {
            b.iter(|| apriori_algorithm(black_box(db), black_box(&config)))
        });
    }

    group.finish();
}

/// Benchmark Apriori with different min_support thresholds
fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let database = generate_database(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let config = config(min_sup);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:.2}", min_sup)), &config, |b, cfg| {
            b.iter(|| apriori_algorithm(black_box(&database), black_box(cfg)))
        });
    }

    group.finish();
}

/// Candidate and counting strategies on the same dense database
fn bench_apriori_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_strategies");

    let database = generate_database(1000, 30, 8, 0.8);
    let variants = [
        ("join_tidlist", CandidateStrategy::Join, CountingStrategy::TidList, false),
        ("join_tidlist_parallel", CandidateStrategy::Join, CountingStrategy::TidList, true),
        ("join_scan", CandidateStrategy::Join, CountingStrategy::Scan, false),
        ("union_tidlist", CandidateStrategy::Union, CountingStrategy::TidList, false),
    ];

    for (name, candidates, counting, parallel) in variants {
        let config = config(0.15).with_candidates(candidates).with_counting(counting).with_parallel(parallel);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, cfg| {
            b.iter(|| apriori_algorithm(black_box(&database), black_box(cfg)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apriori_scaling, bench_apriori_min_support, bench_apriori_strategies);
criterion_main!(benches);
