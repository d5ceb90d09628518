//! Planar k-means clustering.
//!
//! `kmeans2d` is a small library that groups 2D points into `k` clusters
//! using k-means++ seeding followed by Lloyd refinement.
//!
//! The primary public API is under [`cluster`](mod@cluster), which provides:
//! - [`Kmeans`]: builder-configured clusterer (seed, iteration cap, tolerance)
//! - [`cluster()`](fn@cluster): one-shot clustering returning annotated points

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{cluster, Assigned, Clustering, Kmeans, KmeansFit, Point};
pub use error::{Error, Result};
