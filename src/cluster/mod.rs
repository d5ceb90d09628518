//! Clustering of 2D points.
//!
//! This module provides k-means clustering over planar coordinates.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat until no centroid
//! moves.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Initial centroids are chosen with k-means++: each new centroid is drawn
//! among the not-yet-assigned points with probability proportional to squared
//! distance from the nearest already-chosen centroid, which spreads the seeds
//! out and markedly improves convergence over uniform random seeding.
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use kmeans2d::cluster::{Clustering, Kmeans, Point};
//!
//! let data = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.1, 10.1),
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // Or get annotated points back in one call.
//! let assigned = kmeans2d::cluster(&data, 2).unwrap();
//! assert!(assigned.iter().all(|a| a.cluster_id() < 2));
//! ```

mod kmeans;
mod point;
mod traits;

pub use kmeans::{cluster, Assigned, Kmeans, KmeansFit};
pub use point::Point;
pub use traits::Clustering;
