//! Construction time validation of shape invariants.
//!
//! Queries never validate their inputs, a degenerate shape silently produces degenerate results.
//! Callers that build shapes from untrusted data (files, network, editors) check them once with
//! [Validate::validate] before handing them to the query functions.
use crate::{
    core::{math::Vector3, traits::Real},
    shapes::{
        Aabb2, Aabb3, Capsule2, ConvexPolygon2, Cylinder3, FloatRange, Obb2, Obb3, Plane2, Plane3,
        ZCylinder3,
    },
};
use thiserror::Error;

/// Error describing the first broken invariant found on a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError<T = f64> {
    /// A minimum is greater than its maximum (or either is NaN).
    #[error("inverted bounds: min {min:?} is not <= max {max:?}")]
    InvertedBounds { min: T, max: T },
    #[error("radius must be non-negative, got {0:?}")]
    NegativeRadius(T),
    #[error("half dimension must be non-negative, got {0:?}")]
    NegativeHalfDimension(T),
    /// A normal or basis vector is not unit length.
    #[error("expected a unit vector, got length {length:?}")]
    NonUnitVector { length: T },
    /// Two basis vectors of an oriented box are not perpendicular.
    #[error("basis vectors are not orthogonal, dot product is {dot:?}")]
    NonOrthogonalBasis { dot: T },
    #[error("polygon needs at least 3 vertexes, got {count}")]
    TooFewVertexes { count: usize },
    /// Polygon winding is clockwise or the polygon has no area.
    #[error("polygon is not counter clockwise, doubled signed area is {signed_area_doubled:?}")]
    NotCounterClockwise { signed_area_doubled: T },
    /// Polygon turns clockwise at `vertex_index`.
    #[error("polygon is not convex at vertex {vertex_index}")]
    NotConvex { vertex_index: usize },
    /// Cylinder start and end cap centers coincide.
    #[error("cylinder axis has zero length")]
    DegenerateAxis,
    #[error("failed to build spatial index: {0}")]
    IndexBuild(String),
}

/// Shapes that can check their own invariants.
pub trait Validate {
    type Num: Real;

    /// Returns the first broken invariant, if any.
    fn validate(&self) -> Result<(), ShapeError<Self::Num>>;

    #[inline]
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[inline]
fn check_ordered<T>(min: T, max: T) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    // written so NaN fails
    if min <= max {
        Ok(())
    } else {
        Err(ShapeError::InvertedBounds { min, max })
    }
}

#[inline]
fn check_radius<T>(radius: T) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    if radius >= T::zero() {
        Ok(())
    } else {
        Err(ShapeError::NegativeRadius(radius))
    }
}

#[inline]
fn check_half_dimension<T>(value: T) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    if value >= T::zero() {
        Ok(())
    } else {
        Err(ShapeError::NegativeHalfDimension(value))
    }
}

#[inline]
fn check_unit_length<T>(length: T) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    if length.fuzzy_eq(T::one()) {
        Ok(())
    } else {
        Err(ShapeError::NonUnitVector { length })
    }
}

#[inline]
fn check_orthogonal3<T>(a: Vector3<T>, b: Vector3<T>) -> Result<(), ShapeError<T>>
where
    T: Real,
{
    let dot = a.dot(b);
    if dot.fuzzy_eq_zero() {
        Ok(())
    } else {
        Err(ShapeError::NonOrthogonalBasis { dot })
    }
}

impl<T> Validate for FloatRange<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_ordered(self.min, self.max)
    }
}

impl<T> Validate for Aabb2<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_ordered(self.mins.x, self.maxs.x)?;
        check_ordered(self.mins.y, self.maxs.y)
    }
}

impl<T> Validate for Aabb3<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_ordered(self.mins.x, self.maxs.x)?;
        check_ordered(self.mins.y, self.maxs.y)?;
        check_ordered(self.mins.z, self.maxs.z)
    }
}

impl<T> Validate for Obb2<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_unit_length(self.i_basis_normal.length())?;
        check_half_dimension(self.half_dimensions.x)?;
        check_half_dimension(self.half_dimensions.y)
    }
}

impl<T> Validate for Obb3<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_unit_length(self.i_basis.length())?;
        check_unit_length(self.j_basis.length())?;
        check_unit_length(self.k_basis.length())?;
        check_orthogonal3(self.i_basis, self.j_basis)?;
        check_orthogonal3(self.j_basis, self.k_basis)?;
        check_orthogonal3(self.k_basis, self.i_basis)?;
        check_half_dimension(self.half_dimensions.x)?;
        check_half_dimension(self.half_dimensions.y)?;
        check_half_dimension(self.half_dimensions.z)
    }
}

impl<T> Validate for Plane2<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_unit_length(self.normal.length())
    }
}

impl<T> Validate for Plane3<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_unit_length(self.normal.length())
    }
}

impl<T> Validate for ConvexPolygon2<T>
where
    T: Real,
{
    type Num = T;

    /// Checks vertex count, counter clockwise winding, and that no vertex turns clockwise.
    /// Collinear vertexes are accepted.
    fn validate(&self) -> Result<(), ShapeError<T>> {
        let count = self.vertex_count();
        if count < 3 {
            return Err(ShapeError::TooFewVertexes { count });
        }

        let signed_area_doubled = self.signed_area_doubled();
        if !signed_area_doubled.fuzzy_gt(T::zero()) {
            return Err(ShapeError::NotCounterClockwise {
                signed_area_doubled,
            });
        }

        let vertexes = self.vertexes();
        for i in 0..count {
            let prev = vertexes[(i + count - 1) % count];
            let curr = vertexes[i];
            let next = vertexes[(i + 1) % count];
            let turn = (curr - prev).perp_dot(next - curr);
            if turn < T::zero() && !turn.fuzzy_eq_zero() {
                return Err(ShapeError::NotConvex { vertex_index: i });
            }
        }

        Ok(())
    }
}

impl<T> Validate for Capsule2<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_radius(self.radius)
    }
}

impl<T> Validate for Cylinder3<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        check_radius(self.radius)?;
        if self.height().fuzzy_eq_zero() {
            return Err(ShapeError::DegenerateAxis);
        }

        Ok(())
    }
}

impl<T> Validate for ZCylinder3<T>
where
    T: Real,
{
    type Num = T;

    fn validate(&self) -> Result<(), ShapeError<T>> {
        self.min_max_z.validate()?;
        check_radius(self.radius)
    }
}
