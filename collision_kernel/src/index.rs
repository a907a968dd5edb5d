//! Interop with the `static_aabb2d_index` packed Hilbert R-tree used for broad phase culling.
//!
//! The index answers "which boxes might touch this box", its queries are inclusive (boxes sharing
//! an edge are returned) and every candidate still needs an exact test from [crate::overlap].
use crate::{
    core::{math::Vector2, traits::Real},
    shapes::{Aabb2, Capsule2, ConvexPolygon2, Obb2},
    validate::ShapeError,
};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};

impl<T> From<AABB<T>> for Aabb2<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        Aabb2::from_coords(aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y)
    }
}

impl<T> From<Aabb2<T>> for AABB<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: Aabb2<T>) -> Self {
        AABB::new(aabb.mins.x, aabb.mins.y, aabb.maxs.x, aabb.maxs.y)
    }
}

/// Bounding box of a disc.
#[inline]
pub fn disc_bounds2<T>(center: Vector2<T>, radius: T) -> Aabb2<T>
where
    T: Real,
{
    let r = Vector2::new(radius, radius);
    Aabb2::new(center - r, center + r)
}

impl<T> Capsule2<T>
where
    T: Real,
{
    /// Bounding box of the capsule (the bone's bounds grown by the radius).
    pub fn bounds(&self) -> Aabb2<T> {
        let mut result = disc_bounds2(self.bone.start, self.radius);
        let end = disc_bounds2(self.bone.end, self.radius);
        result.stretch_to_include_point(end.mins);
        result.stretch_to_include_point(end.maxs);
        result
    }
}

impl<T> Obb2<T>
where
    T: Real,
{
    /// Tight axis aligned bounding box of the oriented box.
    pub fn bounds(&self) -> Aabb2<T> {
        let i = self.i_basis_normal;
        let j = self.j_basis_normal();
        let h = self.half_dimensions;
        let extents = Vector2::new(
            i.x.abs() * h.x + j.x.abs() * h.y,
            i.y.abs() * h.x + j.y.abs() * h.y,
        );

        Aabb2::new(self.center - extents, self.center + extents)
    }
}

impl<T> ConvexPolygon2<T>
where
    T: Real,
{
    /// Axis aligned bounding box of all the vertexes (zero sized at the origin if there are none).
    pub fn bounds(&self) -> Aabb2<T> {
        let Some((first, rest)) = self.vertexes().split_first() else {
            return Aabb2::new(Vector2::zero(), Vector2::zero());
        };

        let mut result = Aabb2::new(*first, *first);
        for v in rest {
            result.stretch_to_include_point(*v);
        }

        result
    }
}

/// Build a spatial index over `boxes`, query results are positions in `boxes`.
///
/// # Examples
///
/// ```
/// # use collision_kernel::index::*;
/// # use collision_kernel::shapes::Aabb2;
/// let boxes = [
///     Aabb2::from_coords(0.0, 0.0, 1.0, 1.0),
///     Aabb2::from_coords(5.0, 5.0, 6.0, 6.0),
/// ];
/// let index = build_aabb2_index(&boxes).unwrap();
/// assert_eq!(query_overlapping(&index, &Aabb2::from_coords(0.5, 0.5, 2.0, 2.0)), vec![0]);
/// ```
pub fn build_aabb2_index<T>(boxes: &[Aabb2<T>]) -> Result<StaticAABB2DIndex<T>, ShapeError<T>>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(boxes.len());
    for b in boxes {
        builder.add(b.mins.x, b.mins.y, b.maxs.x, b.maxs.y);
    }

    builder.build().map_err(|e| match e {
        StaticAABB2DIndexBuildError::ItemCountError { .. } => {
            ShapeError::IndexBuild(format!("item count mismatch: {e}"))
        }
        StaticAABB2DIndexBuildError::NumericCastError => {
            ShapeError::IndexBuild(format!("numeric cast failed: {e}"))
        }
    })
}

/// Positions of every indexed box overlapping or touching `query`.
#[inline]
pub fn query_overlapping<T>(index: &StaticAABB2DIndex<T>, query: &Aabb2<T>) -> Vec<usize>
where
    T: Real,
{
    index.query(query.mins.x, query.mins.y, query.maxs.x, query.maxs.y)
}

/// Bounds of everything in the index, `None` if the index is empty.
#[inline]
pub fn index_bounds<T>(index: &StaticAABB2DIndex<T>) -> Option<Aabb2<T>>
where
    T: Real,
{
    index.bounds().map(Aabb2::from)
}
