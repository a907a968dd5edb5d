use super::Plane2;
use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convex polygon with vertexes in counter clockwise order (at least 3).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon2<T = f64> {
    vertexes: Vec<Vector2<T>>,
}

impl<T> ConvexPolygon2<T>
where
    T: Real,
{
    /// Create from counter clockwise `vertexes`.
    ///
    /// Vertex count, winding, and convexity are not checked here, see
    /// [Validate](crate::validate::Validate).
    #[inline]
    pub fn new(vertexes: Vec<Vector2<T>>) -> Self {
        ConvexPolygon2 { vertexes }
    }

    #[inline]
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertexes
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    /// Iterate the edges `(v[i], v[i + 1])`, wrapping around to close the polygon.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let next = self.vertexes.iter().cycle().skip(1);
        self.vertexes.iter().zip(next).map(|(&a, &b)| (a, b))
    }

    /// Twice the signed area (positive for counter clockwise winding).
    pub fn signed_area_doubled(&self) -> T {
        self.edges()
            .fold(T::zero(), |acc, (a, b)| acc + a.perp_dot(b))
    }
}

/// Convex region expressed as the intersection of the back sides of a set of half-planes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull2<T = f64> {
    pub planes: Vec<Plane2<T>>,
}

impl<T> ConvexHull2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(planes: Vec<Plane2<T>>) -> Self {
        ConvexHull2 { planes }
    }

    /// One outward facing plane per polygon edge.
    pub fn from_convex_polygon(polygon: &ConvexPolygon2<T>) -> Self {
        let planes = polygon
            .edges()
            .map(|(a, b)| Plane2::from_points(a, b))
            .collect();
        ConvexHull2 { planes }
    }
}

impl<T> From<&ConvexPolygon2<T>> for ConvexHull2<T>
where
    T: Real,
{
    #[inline]
    fn from(polygon: &ConvexPolygon2<T>) -> Self {
        ConvexHull2::from_convex_polygon(polygon)
    }
}
