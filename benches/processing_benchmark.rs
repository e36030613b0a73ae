use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flightdata_processor::models::CoordinateTable;
use flightdata_processor::processors::{
    CoordinateJoiner, DatetimeNormalizer, Finalizer, LoadFactorMerger,
};
use flightdata_processor::readers::TableReader;
use flightdata_processor::utils::parse_epoch_seconds;
use polars::prelude::DataFrame;

const AIRPORTS: [&str; 8] = ["BER", "CDG", "LHR", "FRA", "AMS", "MAD", "FCO", "VIE"];

// Create test data for benchmarking
fn create_test_flights(flight_count: usize) -> (DataFrame, DataFrame, CoordinateTable) {
    let mut flights =
        String::from("Origin,Destination,Flight Number,Departure Date,Departure Time,Capture Date,Price\n");
    let mut load_factor =
        String::from("Origin,Destination,Flight Number,Departure Date,Load Factor\n");

    for i in 0..flight_count {
        let origin = AIRPORTS[i % AIRPORTS.len()];
        let destination = AIRPORTS[(i + 3) % AIRPORTS.len()];
        let number = 1000 + i;
        let date = format!("2023-{:02}-{:02}", i % 12 + 1, i % 28 + 1);

        flights.push_str(&format!(
            "{},{},{},{},{:02}:{:02},2022-12-01 08:00:00,{}\n",
            origin,
            destination,
            number,
            date,
            i % 24,
            i % 60,
            50 + i % 400
        ));

        // Every other flight has a load factor
        if i % 2 == 0 {
            load_factor.push_str(&format!(
                "{},{},{},{},{}\n",
                origin,
                destination,
                number,
                date,
                i % 100
            ));
        }
    }

    let mut reference = String::from("GKA,lat,lon\n");
    // Leave the last airport out so the coordinate join drops rows
    for (i, code) in AIRPORTS.iter().take(AIRPORTS.len() - 1).enumerate() {
        reference.push_str(&format!("{},{},{}\n", code, 40.0 + i as f64, i as f64 * 2.5));
    }

    let reader = TableReader::new();
    (
        reader.parse_str(&flights).unwrap(),
        reader.parse_str(&load_factor).unwrap(),
        CoordinateTable::from_frame(reader.parse_str(&reference).unwrap()).unwrap(),
    )
}

fn benchmark_load_factor_merge(c: &mut Criterion) {
    let (flights, load_factor, _) = create_test_flights(5_000);

    c.bench_function("load_factor_merge", |b| {
        b.iter(|| {
            let merger = LoadFactorMerger::new();
            let (merged, _) = merger.merge(&flights, &load_factor).unwrap();
            black_box(merged.height())
        })
    });
}

fn benchmark_epoch_parsing(c: &mut Criterion) {
    let dates = vec![
        "2023-01-15",
        "2023-01-15 12:30:00",
        "2023-01-15T12:30:00.250",
        "2023-01-15T12:30:00+02:00",
        "01/15/2023",
    ];

    c.bench_function("epoch_parsing", |b| {
        b.iter(|| {
            let mut results = Vec::new();
            for date in &dates {
                if let Some(seconds) = parse_epoch_seconds(date) {
                    results.push(seconds);
                }
            }
            black_box(results.len())
        })
    });
}

fn benchmark_full_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_by_size");

    for &size in &[100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("flights", size), &size, |b, &flight_count| {
            let (flights, load_factor, coordinates) = create_test_flights(flight_count);

            b.iter(|| {
                let (merged, _) = LoadFactorMerger::new()
                    .merge(&flights, &load_factor)
                    .unwrap();
                let normalized = DatetimeNormalizer::new().normalize(merged).unwrap();
                let (joined, _) = CoordinateJoiner::new().join(&normalized, &coordinates).unwrap();
                let numeric = Finalizer::new().finalize(&joined).unwrap();
                black_box(numeric.height())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_load_factor_merge,
    benchmark_epoch_parsing,
    benchmark_full_transform
);
criterion_main!(benches);
