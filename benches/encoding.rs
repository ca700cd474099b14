use std::hint::black_box;
use std::time::{Duration, Instant};

use qrgen::{generate, version_info};

const ITERATIONS: u32 = 200;

fn bench_version(v: usize) -> Duration {
    let info = version_info(v).expect("Version should be supported");
    let data = (0..info.input_bytes()).map(|i| (i * 31 + v) as u8).collect::<Vec<_>>();

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let code = generate(black_box(&data)).expect("Payload should fit its version");
        black_box(code);
    }
    start.elapsed() / ITERATIONS
}

fn main() {
    println!("Running qrgen Encoding Benchmark");
    println!("================================\n");

    let total_start = Instant::now();

    for v in [1, 5, 10, 15, 20, 26] {
        let per_code = bench_version(v);
        let info = version_info(v).expect("Version should be supported");
        println!(
            "Version {v:>2} ({:>3}x{:<3}, {:>4} bytes): {:?} per code",
            info.size,
            info.size,
            info.input_bytes(),
            per_code
        );
    }

    println!("\nAll benchmarks completed in: {:?}", total_start.elapsed());
}
