//! K-means++ on a simple 2D dataset.
//!
//! With no arguments this clusters a small built-in dataset. Pass a path to a
//! whitespace-separated `x y` coordinate file and a cluster count to cluster
//! your own data:
//!
//! ```text
//! cargo run --example clustering -- s1.txt 15
//! ```

use kmeans2d::{cluster, Point};
use std::env;
use std::fs;

fn main() {
    let mut args = env::args().skip(1);
    let points: Vec<Point> = match args.next() {
        Some(path) => read_points(&path),
        None => builtin_dataset(),
    };
    let k: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);

    let assigned = cluster(&points, k).unwrap();

    println!("=== K-means++ (k={k}) ===");
    for (i, a) in assigned.iter().enumerate() {
        println!(
            "  point {:2} ({:7.1}, {:7.1}) => cluster {}",
            i,
            a.point().x,
            a.point().y,
            a.cluster_id()
        );
    }
}

/// Two loose groups, one near the origin and one near (7.5, 4).
fn builtin_dataset() -> Vec<Point> {
    vec![
        Point::new(0.0, 2.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 3.0),
        Point::new(7.0, 8.0),
        Point::new(8.0, 7.0),
        Point::new(7.0, 3.0),
        Point::new(8.0, 3.0),
        Point::new(7.0, 2.0),
    ]
}

fn read_points(path: &str) -> Vec<Point> {
    let text = fs::read_to_string(path).expect("failed to read coordinate file");
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.split_whitespace();
            let x = parts
                .next()
                .and_then(|v| v.parse().ok())
                .expect("expected `x y` per line");
            let y = parts
                .next()
                .and_then(|v| v.parse().ok())
                .expect("expected `x y` per line");
            Point::new(x, y)
        })
        .collect()
}
