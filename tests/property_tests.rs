use kmeans2d::cluster::{Clustering, Kmeans, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(
        data in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= data.len() {
            let points: Vec<Point> = data.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let model = Kmeans::new(k).with_seed(42);
            let labels = model.fit_predict(&points).unwrap();

            prop_assert_eq!(labels.len(), points.len());
            for &l in &labels {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_kmeans_deterministic_given_seed(
        data in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 2..15),
        seed in 0u64..1000
    ) {
        let points: Vec<Point> = data.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let a = Kmeans::new(2).with_seed(seed).fit_predict(&points).unwrap();
        let b = Kmeans::new(2).with_seed(seed).fit_predict(&points).unwrap();
        prop_assert_eq!(a, b);
    }
}
