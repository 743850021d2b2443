use crate::*;
use std::iter::FromIterator;

/// An axis aligned bounding box in output units, as its `min` and `max` corners.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Extents2 {
    pub min: Point2,
    pub max: Point2,
}

impl Extents2 {
    /// Zero sized extents about `p`.
    pub fn point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    pub fn from_min_max(min: Point2, max: Point2) -> Self {
        Self {
            min: min.min_all(max),
            max: max.max_all(min),
        }
    }

    pub fn size(&self) -> Point2 {
        self.max.sub(self.min)
    }

    /// Grow the extents to include `p`.
    pub fn merge(self, p: Point2) -> Self {
        Self {
            min: self.min.min_all(p),
            max: self.max.max_all(p),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min_all(other.min),
            max: self.max.max_all(other.max),
        }
    }
}

impl Envelops<Point2> for Extents2 {
    fn envelops(&self, p: Point2) -> bool {
        let [x, y] = p;
        let [x0, y0] = self.min;
        let [x1, y1] = self.max;
        x0 <= x && x <= x1 && y0 <= y && y <= y1
    }
}

/// Merge a point into an optional accumulator.
///
/// An empty accumulator starts as the point itself.
pub fn merge_extents(acc: Option<Extents2>, p: Point2) -> Extents2 {
    match acc {
        Some(e) => e.merge(p),
        None => Extents2::point(p),
    }
}

/// Running bounding box of everything drawn into one document.
///
/// Starts empty and only ever grows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds(Option<Extents2>);

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, p: Point2) {
        self.0 = Some(merge_extents(self.0, p));
    }

    pub fn extend<I: IntoIterator<Item = Point2>>(&mut self, ps: I) {
        ps.into_iter().for_each(|p| self.add(p));
    }

    pub fn extents(&self) -> Option<Extents2> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl FromIterator<Point2> for Bounds {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Point2>,
    {
        let mut b = Bounds::new();
        b.extend(iter);
        b
    }
}
