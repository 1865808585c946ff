use super::{BoundingBox, Contour};
use crate::core::traits::Real;

/// Set of contours forming a polygon, possibly with holes and multiple
/// disjoint regions.
///
/// Hole relations are flat: a contour's hole indices point at sibling
/// contours of the same polygon. Every hole index is valid and each hole has
/// exactly one parent.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T = f64> {
    contours: Vec<Contour<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Polygon {
            contours: Vec::new(),
        }
    }

    #[inline]
    pub fn from_contours(contours: Vec<Contour<T>>) -> Self {
        Polygon { contours }
    }

    /// Count of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    #[inline]
    pub fn contour(&self, i: usize) -> &Contour<T> {
        &self.contours[i]
    }

    #[inline]
    pub fn contour_mut(&mut self, i: usize) -> &mut Contour<T> {
        &mut self.contours[i]
    }

    #[inline]
    pub fn contours(&self) -> &[Contour<T>] {
        &self.contours
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Contour<T>> {
        self.contours.iter()
    }

    #[inline]
    pub fn add(&mut self, contour: Contour<T>) {
        self.contours.push(contour);
    }

    /// Total count of points over all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(|c| c.len()).sum()
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        let mut bb = BoundingBox::empty();
        for c in &self.contours {
            bb = bb.combine(&c.bounding_box());
        }
        bb
    }

    /// Appends copies of `other`'s contours, re-basing their hole indices by
    /// this polygon's contour count so the relations stay valid.
    pub fn join(&mut self, other: &Polygon<T>) {
        let offset = self.contours.len();
        self.contours.reserve(other.contours.len());
        for c in &other.contours {
            let mut c = c.clone();
            c.rebase_holes(offset);
            self.contours.push(c);
        }
    }
}

impl<T> IntoIterator for Polygon<T>
where
    T: Real,
{
    type Item = Contour<T>;
    type IntoIter = std::vec::IntoIter<Contour<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.contours.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polygon<T>
where
    T: Real,
{
    type Item = &'a Contour<T>;
    type IntoIter = std::slice::Iter<'a, Contour<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_rebases_hole_indices() {
        let mut a = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]];
        let mut b = polygon![
            [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            [(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)],
        ];
        b.contour_mut(0).add_hole(1);
        b.contour_mut(1).set_is_hole(true);

        a.join(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.contour(1).holes(), &[2]);
        assert!(a.contour(2).is_hole());
    }

    #[test]
    fn bounding_box_combines_contours() {
        let p = polygon![
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            [(5.0, 5.0), (6.0, 5.0), (6.0, 7.0)],
        ];
        let bb = p.bounding_box();
        assert_eq!((bb.x_min, bb.y_min, bb.x_max, bb.y_max), (0.0, 0.0, 6.0, 7.0));
    }
}
