use std::ops;

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

pub trait Point: Copy + Sized + IntoIterator<Item = f64> {
    /// Set all the values to this value.
    fn all(v: f64) -> Self;

    /// Set all values to zero.
    fn zero() -> Self {
        Self::all(0.)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    fn scale(self, scalar: f64) -> Self;

    /// Return the minimum of each dimension.
    fn min_all(self, b: Self) -> Self {
        Self::xfm(self, b, f64::min)
    }

    /// Return the maximum of each dimension.
    fn max_all(self, b: Self) -> Self {
        Self::xfm(self, b, f64::max)
    }

    /// Perform a transformation on each pair of dimensions.
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self;

    fn add(self, rhs: Self) -> Self {
        Self::xfm(self, rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        Self::xfm(self, rhs, ops::Sub::sub)
    }
}

impl Point for Point2 {
    fn all(v: f64) -> Self {
        [v; 2]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let [ax, ay] = self;
        let [bx, by] = b;
        [f(ax, bx), f(ay, by)]
    }
}

/// Rotate a point about the origin by `degrees`.
///
/// Positive angles turn counter-clockwise.
pub fn rotate([x, y]: Point2, degrees: f64) -> Point2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [x * cos - y * sin, x * sin + y * cos]
}

/// The four corners of a `width` x `height` rectangle centred on `centre` and turned by
/// `degrees`.
///
/// Corners are returned top-left, top-right, bottom-right, bottom-left (before rotation).
pub fn rotated_rect(centre: Point2, width: f64, height: f64, degrees: f64) -> [Point2; 4] {
    let w2 = width / 2.0;
    let h2 = height / 2.0;
    [[-w2, h2], [w2, h2], [w2, -h2], [-w2, -h2]].map(|c| rotate(c, degrees).add(centre))
}

/// Arithmetic mean of the points, `None` if there are none.
///
/// This is the _vertex_ centroid, which only matches the area centroid for regular shapes.
pub fn mean(ps: &[Point2]) -> Option<Point2> {
    if ps.is_empty() {
        return None;
    }

    let n = ps.len() as f64;
    let sum = ps.iter().fold(Point2::zero(), |acc, &p| acc.add(p));
    Some(sum.map(|s| s / n))
}
