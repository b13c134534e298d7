// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Generates the fixed pseudo-random intervals used by the benchmarks.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, LogNormal};
use std::{env, fmt::Write as _, fs, path::Path};

const DOMAIN: i64 = 1_000_000;

fn random_intervals(rng: &mut StdRng, n: usize, lengths: &LogNormal<f64>) -> String {
    let mut out = String::from("[");
    for _ in 0..n {
        let start = rng.random_range(0..DOMAIN);
        // mostly short intervals, with the occasional long one that merges many
        let length = (lengths.sample(rng).ceil() as i64).clamp(1, DOMAIN / 10);
        write!(out, "({start}, {}),", start + length).unwrap();
    }
    out.push(']');
    out
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let mut rng = StdRng::seed_from_u64(0x1e7e_4a15);
    let lengths = LogNormal::new(3.0, 1.0).unwrap();

    let mut code = String::new();
    for (name, n) in [("SMALL", 64), ("BIG", 4096), ("PROBES", 256)] {
        writeln!(
            code,
            "#[allow(dead_code)]\nconst {name}: [(i64, i64); {n}] = {};",
            random_intervals(&mut rng, n, &lengths)
        )
        .unwrap();
    }

    let out_dir = env::var_os("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("random_intervals.rs"), code).unwrap();
}
