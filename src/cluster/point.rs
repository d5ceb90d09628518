/// An immutable 2D coordinate.
///
/// Points are plain values; cluster membership is tracked by the engine, not
/// on the point itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point from two coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Pure and non-negative. Expected coordinate magnitudes are modest, so no
    /// overflow guarding is done here.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_3_4_5_triangle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-1.0, 2.0);
        let b = Point::new(4.0, -3.0);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn point_conversions() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_eq!(Point::from([3.0, 4.0]), Point::new(3.0, 4.0));
    }
}
