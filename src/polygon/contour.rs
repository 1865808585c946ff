use super::BoundingBox;
use crate::core::math::{Point, Segment};
use crate::core::traits::Real;

/// Closed loop of points, one ring of a [Polygon](crate::polygon::Polygon).
///
/// The edge from the last point back to the first is implicit. A contour
/// knows the indices of the contours that are holes directly inside it
/// (indices into the owning polygon's contour list) and whether it is itself
/// a hole.
///
/// Orientation (counter-clockwise or not) is derived from the shoelace sum
/// and cached lazily. The cache, when present, always matches the current
/// point order: point mutations clear it, [Contour::change_orientation]
/// toggles it, `Clone` copies it (cloning never reorders points).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour<T = f64> {
    points: Vec<Point<T>>,
    hole_indices: Vec<usize>,
    is_hole: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    ccw_cache: Option<bool>,
}

impl<T> Contour<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Contour {
            points: Vec::new(),
            hole_indices: Vec::new(),
            is_hole: false,
            ccw_cache: None,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Contour {
            points: Vec::with_capacity(capacity),
            hole_indices: Vec::new(),
            is_hole: false,
            ccw_cache: None,
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Contour {
            points,
            hole_indices: Vec::new(),
            is_hole: false,
            ccw_cache: None,
        }
    }

    /// Count of points in the contour.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn point(&self, i: usize) -> Point<T> {
        self.points[i]
    }

    /// Appends a point, invalidating the cached orientation.
    #[inline]
    pub fn add(&mut self, point: Point<T>) {
        self.points.push(point);
        self.ccw_cache = None;
    }

    #[inline]
    pub fn add_xy(&mut self, x: T, y: T) {
        self.add(Point::new(x, y));
    }

    /// Edge `i` of the contour, edge `len() - 1` wraps back to point 0.
    #[inline]
    pub fn segment(&self, i: usize) -> Segment<T> {
        if i == self.points.len() - 1 {
            Segment::new(self.points[i], self.points[0])
        } else {
            Segment::new(self.points[i], self.points[i + 1])
        }
    }

    /// Splits off the points from index `at` to the end, keeping the point
    /// at `at` as this contour's new last point. Used by contour assembly
    /// when a walk pinches a closed loop onto the contour.
    pub(crate) fn split_loop(&mut self, at: usize) -> Vec<Point<T>> {
        let tail = self.points.split_off(at);
        self.points.push(tail[0]);
        self.ccw_cache = None;
        tail
    }

    /// Even-odd rule containment test of `p` against the contour boundary.
    ///
    /// Points exactly on the boundary may report either side.
    pub fn contains(&self, p: Point<T>) -> bool {
        let mut inside = false;
        for i in 0..self.points.len() {
            let s = self.segment(i);
            let (a, b) = (s.begin, s.end);
            if (a.y > p.y) != (b.y > p.y) {
                let t = (p.y - a.y) / (b.y - a.y);
                if p.x < a.x + t * (b.x - a.x) {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        let mut bb = BoundingBox::empty();
        for &p in &self.points {
            bb.add_point(p);
        }
        bb
    }

    /// Twice the signed shoelace area, positive for counter-clockwise order.
    pub fn signed_area_sum(&self) -> T {
        let mut sum = T::zero();
        for i in 0..self.points.len() {
            let s = self.segment(i);
            sum = sum + (s.begin.x * s.end.y - s.end.x * s.begin.y);
        }
        sum
    }

    /// Returns `true` if the points wind counter-clockwise.
    ///
    /// Reads the cached orientation when present; an uncached read computes
    /// the value without storing it (so this works behind a shared
    /// reference). Use [Contour::counter_clockwise_cached] on a mutable
    /// contour to also fill the cache.
    #[inline]
    pub fn counter_clockwise(&self) -> bool {
        match self.ccw_cache {
            Some(ccw) => ccw,
            None => self.signed_area_sum() >= T::zero(),
        }
    }

    /// Same as [Contour::counter_clockwise] but stores the computed value.
    #[inline]
    pub fn counter_clockwise_cached(&mut self) -> bool {
        let ccw = self.counter_clockwise();
        self.ccw_cache = Some(ccw);
        ccw
    }

    /// Returns `true` if the points wind clockwise.
    #[inline]
    pub fn clockwise(&self) -> bool {
        !self.counter_clockwise()
    }

    /// Reverses the point order, toggling the cached orientation if present.
    pub fn change_orientation(&mut self) {
        self.points.reverse();
        if let Some(ccw) = self.ccw_cache {
            self.ccw_cache = Some(!ccw);
        }
    }

    /// Makes the contour counter-clockwise, reversing points only if needed.
    pub fn set_counter_clockwise(&mut self) {
        if !self.counter_clockwise_cached() {
            self.change_orientation();
        }
    }

    /// Makes the contour clockwise, reversing points only if needed.
    pub fn set_clockwise(&mut self) {
        if self.counter_clockwise_cached() {
            self.change_orientation();
        }
    }

    /// Indices of the contours that are holes directly inside this one.
    #[inline]
    pub fn holes(&self) -> &[usize] {
        &self.hole_indices
    }

    #[inline]
    pub fn add_hole(&mut self, contour_index: usize) {
        self.hole_indices.push(contour_index);
    }

    #[inline]
    pub fn clear_holes(&mut self) {
        self.hole_indices.clear();
    }

    /// Re-bases all hole indices by `offset`, used when joining polygons.
    #[inline]
    pub(crate) fn rebase_holes(&mut self, offset: usize) {
        for h in &mut self.hole_indices {
            *h += offset;
        }
    }

    #[inline]
    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    #[inline]
    pub fn set_is_hole(&mut self, is_hole: bool) {
        self.is_hole = is_hole;
    }
}
