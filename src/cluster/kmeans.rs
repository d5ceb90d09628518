//! K-means clustering with k-means++ seeding and Lloyd refinement.
//!
//! # The Algorithm
//!
//! K-means partitions `n` points into `k` clusters by minimizing the
//! within-cluster sum of squared distances. This implementation runs in two
//! stages:
//!
//! ## Seeding (k-means++)
//!
//! Uniform random seeding can place several initial centroids inside the same
//! natural cluster. K-means++ (Arthur & Vassilvitskii, 2007) instead picks the
//! first centroid uniformly at random and each subsequent one among the
//! not-yet-assigned points with probability proportional to the *squared*
//! distance to the nearest existing centroid, so far-away points are favored
//! and the initial centroids tend to be spread apart.
//!
//! Candidates are walked in ascending order of raw distance while their
//! squared distances accumulate toward a uniformly drawn threshold in
//! `[0, Σd²]`. If every remaining point coincides with an existing centroid
//! the weights collapse to zero and the walk deterministically selects the
//! first candidate.
//!
//! ## Lloyd refinement
//!
//! Alternate two phases until a fixed point:
//!
//! 1. **Assignment**: move each point to a centroid strictly closer than the
//!    best distance recorded for that point *so far across the whole run*.
//!    The recorded distance is never reset, so every reassignment strictly
//!    decreases it; that monotonicity is what rules out cycling.
//! 2. **Relocation**: move each centroid to the arithmetic mean of its
//!    members. A centroid with no members is frozen in place.
//!
//! The loop stops when a full relocation pass moves nothing. Movement is
//! compared against a tolerance that defaults to exact `0.0`; an optional
//! iteration cap is available for pathological inputs, but the default is to
//! iterate until the fixed point.
//!
//! ## Tie-breaks
//!
//! Centroids are scanned in id order with a strict `<` comparison, so the
//! lowest-id centroid wins when several are equidistant. During seeding the
//! candidate sort is stable, so ties in raw distance keep input order.
//!
//! ## Complexity
//!
//! - **Time**: O(n · k) per refinement pass, O(n · k) per seeding round.
//! - **Space**: O(n + k).
//!
//! ## References
//!
//! Arthur, D., Vassilvitskii, S. (2007). "k-means++: The Advantages of
//! Careful Seeding." SODA 2007.
//!
//! Lloyd, S. (1982). "Least Squares Quantization in PCM." IEEE Transactions
//! on Information Theory.

use super::point::Point;
use super::traits::Clustering;
use crate::error::{Error, Result};
use log::{debug, trace};
use rand::prelude::*;

/// K-means clustering algorithm with k-means++ seeding.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Optional RNG seed for reproducibility.
    seed: Option<u64>,
    /// Optional cap on refinement iterations (`None` = run to the fixed point).
    max_iter: Option<usize>,
    /// Centroid movement below or equal to this counts as "did not move".
    tolerance: f32,
}

impl Kmeans {
    /// Create a new k-means clusterer for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seed: None,
            max_iter: None,
            tolerance: 0.0,
        }
    }

    /// Set the RNG seed for reproducible seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of refinement iterations.
    ///
    /// Without a cap the loop runs until no centroid moves. The strict
    /// equality convergence check makes floating-point oscillation possible in
    /// principle, so long-running callers may want a cap as a backstop.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Set the centroid movement tolerance for the convergence check.
    ///
    /// The default is `0.0`: a centroid counts as moved on any nonzero
    /// displacement, compared with exact floating-point equality. A positive
    /// tolerance trades exactness for earlier termination.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run the full clustering and return the fitted result.
    ///
    /// Input points are taken as fresh (no pre-existing assignment). Fails
    /// fast on an empty input, `k == 0`, `k` larger than the number of
    /// points, or an invalid tolerance; no partial result is produced.
    pub fn fit(&self, data: &[Point]) -> Result<KmeansFit> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_points: data.len(),
            });
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be non-negative",
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        debug!(
            "k-means fit: {} points, k={}, seed={:?}",
            data.len(),
            self.k,
            self.seed
        );

        let mut engine = Engine::new(data);
        engine.seed(self.k, &mut rng);
        let iterations = engine.run(self.max_iter, self.tolerance);

        debug!("k-means finished after {iterations} iteration(s)");
        Ok(engine.finish(iterations))
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Point]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.into_labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Result of a completed k-means fit.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    labels: Vec<usize>,
    distances: Vec<f32>,
    centroids: Vec<Point>,
    iterations: usize,
}

impl KmeansFit {
    /// Cluster label per input point, each in `0..k`.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the fit and return the labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Recorded nearest-assignment distance per point.
    ///
    /// This is the distance at the moment of the point's last reassignment;
    /// it is non-increasing over the run but may lag a centroid's final
    /// position slightly when the centroid moved after the point last won a
    /// strictly-closer comparison.
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Final centroid positions, indexed by cluster label.
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Number of assignment/relocation passes performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// A point annotated with its final cluster assignment.
#[derive(Debug, Clone, Copy)]
pub struct Assigned {
    point: Point,
    label: usize,
    distance: f32,
}

impl Assigned {
    /// The original coordinate.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The assigned cluster identifier, in `0..k`.
    pub fn cluster_id(&self) -> usize {
        self.label
    }

    /// Recorded distance to the assigned centroid.
    pub fn distance_to_centroid(&self) -> f32 {
        self.distance
    }
}

/// Cluster `points` into `k` groups and return each point annotated with its
/// cluster id.
///
/// Convenience wrapper over [`Kmeans`] with default settings (unseeded RNG,
/// exact convergence, no iteration cap). Use [`Kmeans`] directly for
/// reproducible runs.
pub fn cluster(points: &[Point], k: usize) -> Result<Vec<Assigned>> {
    let fit = Kmeans::new(k).fit(points)?;
    Ok(points
        .iter()
        .enumerate()
        .map(|(i, &point)| Assigned {
            point,
            label: fit.labels[i],
            distance: fit.distances[i],
        })
        .collect())
}

/// One cluster center plus the indices of its member points.
///
/// Members are indices into the engine's point slice; the id of a centroid is
/// its index in the engine's centroid vector.
#[derive(Debug, Clone)]
struct Centroid {
    x: f32,
    y: f32,
    members: Vec<usize>,
}

impl Centroid {
    fn at(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            members: Vec::new(),
        }
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move to the arithmetic mean of the member points.
    ///
    /// Returns whether the centroid moved by more than `tolerance`. A
    /// centroid without members is frozen in place and reports no movement;
    /// k-means++ seeding gives every centroid a member, so this only matters
    /// if refinement later drains one.
    fn relocate(&mut self, points: &[Point], tolerance: f32) -> bool {
        if self.members.is_empty() {
            return false;
        }

        let mut x_total = 0.0;
        let mut y_total = 0.0;
        for &m in &self.members {
            x_total += points[m].x;
            y_total += points[m].y;
        }
        let count = self.members.len() as f32;
        let mean = Point::new(x_total / count, y_total / count);

        let change = self.position().distance(mean);
        self.x = mean.x;
        self.y = mean.y;
        change > tolerance
    }
}

/// Arena-style clustering state: points stay in the caller's slice, per-point
/// state and centroid membership are tracked by index.
struct Engine<'a> {
    points: &'a [Point],
    centroids: Vec<Centroid>,
    /// Current centroid id per point; `None` until the point is first assigned.
    assign: Vec<Option<usize>>,
    /// Best assignment distance recorded so far per point; never reset.
    best: Vec<f32>,
}

impl<'a> Engine<'a> {
    fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            centroids: Vec::new(),
            assign: vec![None; points.len()],
            best: vec![f32::INFINITY; points.len()],
        }
    }

    /// Move `point` to `centroid`, keeping membership and the per-point state
    /// in lock-step. This is the only place either side is mutated.
    fn reassign(&mut self, point: usize, centroid: usize, distance: f32) {
        if let Some(old) = self.assign[point] {
            let members = &mut self.centroids[old].members;
            if let Some(pos) = members.iter().position(|&m| m == point) {
                members.swap_remove(pos);
            }
        }
        self.centroids[centroid].members.push(point);
        self.assign[point] = Some(centroid);
        self.best[point] = distance;
    }

    /// Distance from `point` to the nearest already-created centroid.
    fn nearest_centroid_distance(&self, point: usize) -> f32 {
        let p = self.points[point];
        self.centroids
            .iter()
            .map(|c| p.distance(c.position()))
            .fold(f32::INFINITY, f32::min)
    }

    /// K-means++ seeding: create `k` centroids, each at a distinct input
    /// point, and assign those seed points with distance 0.
    fn seed(&mut self, k: usize, rng: &mut dyn RngCore) {
        let first = rng.random_range(0..self.points.len());
        self.centroids.push(Centroid::at(self.points[first]));
        self.reassign(first, 0, 0.0);

        for n in 1..k {
            let mut candidates: Vec<(usize, f32)> = self
                .assign
                .iter()
                .enumerate()
                .filter(|(_, assigned)| assigned.is_none())
                .map(|(p, _)| (p, self.nearest_centroid_distance(p)))
                .collect();

            // Ascending raw distance; the sort is stable, so equal distances
            // keep input order and the threshold walk stays reproducible.
            candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

            let total: f32 = candidates.iter().map(|&(_, d)| d * d).sum();
            let threshold = rng.random_range(0.0..=total);

            // `k <= n` is validated up front, so at least one candidate
            // remains. Defaulting to the last one covers the case where
            // rounding keeps the accumulator just below the threshold. When
            // all remaining points coincide with existing centroids the
            // weights collapse to zero and the walk picks the first candidate.
            let mut chosen = candidates[candidates.len() - 1].0;
            let mut accumulated = 0.0;
            for &(p, d) in &candidates {
                accumulated += d * d;
                if accumulated >= threshold {
                    chosen = p;
                    break;
                }
            }

            self.centroids.push(Centroid::at(self.points[chosen]));
            self.reassign(chosen, n, 0.0);
        }
    }

    /// Assignment phase: move each point to any centroid strictly closer than
    /// its recorded best distance. Scans centroids in id order, so the
    /// lowest-id centroid wins exact ties.
    fn assign_pass(&mut self) {
        for point in 0..self.points.len() {
            for centroid in 0..self.centroids.len() {
                let d = self.points[point].distance(self.centroids[centroid].position());
                if d < self.best[point] {
                    self.reassign(point, centroid, d);
                }
            }
        }
    }

    /// Relocation phase: move every centroid to the mean of its members.
    /// Returns whether any centroid moved.
    fn relocate_pass(&mut self, tolerance: f32) -> bool {
        let mut moved = false;
        for centroid in &mut self.centroids {
            if centroid.relocate(self.points, tolerance) {
                moved = true;
            }
        }
        moved
    }

    /// Alternate assignment and relocation until a relocation pass moves
    /// nothing, or until the optional iteration cap. Returns the number of
    /// passes performed.
    fn run(&mut self, max_iter: Option<usize>, tolerance: f32) -> usize {
        let mut iterations = 0;
        loop {
            self.assign_pass();
            let moved = self.relocate_pass(tolerance);
            iterations += 1;
            trace!("refinement pass {iterations}: moved={moved}");

            if !moved {
                break;
            }
            if let Some(cap) = max_iter {
                if iterations >= cap {
                    break;
                }
            }
        }
        iterations
    }

    fn finish(self, iterations: usize) -> KmeansFit {
        let labels = self
            .assign
            .iter()
            .map(|a| a.expect("every point is assigned after the first pass"))
            .collect();
        KmeansFit {
            labels,
            distances: self.best,
            centroids: self.centroids.iter().map(Centroid::position).collect(),
            iterations,
        }
    }
}
