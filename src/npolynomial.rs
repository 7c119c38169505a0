//! A wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Const, Dim, DimDiff, DimName, DimSub, U1};
use nalgebra::storage::{RawStorage, Storage, StorageMut};
use nalgebra::{DefaultAllocator, Field, Matrix, OMatrix, OVector, Owned, Scalar};
use std::fmt;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial:
/// $p: \R \to \R^r $ where $r$ is the number of rows i.e. the generic `R` parameter
///
/// This means rows are the polynomials for each coordinate
/// and columns are the different powers' coefficents.
pub struct Polynomial<T, R, C, S>(pub Matrix<T, R, C, S>);

/// "Normal" polynomial of static degree using numbers as coefficents.
pub type ScalarPolynomial<T, C> = Polynomial<T, U1, C, Owned<T, U1, C>>;

/* Eval, Derive */
impl<T: Scalar, R: DimName, C: Dim, S: Storage<T, R, C>> Polynomial<T, R, C, S> {
    /// Evaluate `self` at position `x` and store the result into `out`.
    pub fn evaluate_to<S2>(&self, x: T, out: &mut Matrix<T, R, U1, S2>)
    where
        T: Field,
        S2: StorageMut<T, R, U1>,
    {
        out.fill(T::zero());
        for i in 0..self.0.ncols() - 1 {
            let i = self.0.ncols() - 1 - i;
            *out += self.0.column(i);
            *out *= x.clone();
        }
        *out += self.0.column(0);
    }

    /// Evaluate `self` at position `x`.
    pub fn evaluate(&self, x: T) -> OVector<T, R>
    where
        T: Field,
        DefaultAllocator: Allocator<T, R>,
    {
        let mut out = OVector::from_element(T::zero());
        self.evaluate_to(x, &mut out);
        out
    }

    /// Calculate `self`'s derivative and store the result into `out`.
    pub fn derive_to<S2>(&self, out: &mut Matrix<T, R, DimDiff<C, U1>, S2>)
    where
        T: Field,
        C: DimSub<U1>,
        S2: StorageMut<T, R, DimDiff<C, U1>>,
    {
        let mut exponent = T::one();
        for i in 1..self.0.ncols() {
            out.set_column(i - 1, &self.0.column(i));
            *&mut out.column_mut(i - 1) *= exponent.clone();
            exponent += T::one();
        }
    }

    /// Calculate `self`'s derivative.
    pub fn derive(&self) -> Polynomial<T, R, DimDiff<C, U1>, Owned<T, R, DimDiff<C, U1>>>
    where
        T: Field,
        C: DimSub<U1>,
        DefaultAllocator: Allocator<T, R, DimDiff<C, U1>>,
    {
        let (r, c) = self.0.shape_generic();
        let mut out = OMatrix::zeros_generic(r, c.sub(Const::<1>));
        self.derive_to(&mut out);
        Polynomial(out)
    }

    /// Split off the polynomial of a single coordinate.
    ///
    /// For a curve's polynomial row `0` describes `x(t)` and row `1` describes `y(t)`.
    pub fn coordinate(&self, row: usize) -> ScalarPolynomial<T, C>
    where
        DefaultAllocator: Allocator<T, U1, C>,
    {
        Polynomial(self.0.row(row).clone_owned())
    }
}

impl<T: Scalar + Field, C: Dim, S: Storage<T, U1, C>> Polynomial<T, U1, C, S> {
    /// Evaluate a scalar polynomial at position `x` using horner's method.
    pub fn evaluate_scalar(&self, x: T) -> T {
        let mut out = T::zero();
        for i in (0..self.0.ncols()).rev() {
            out = out * x.clone() + self.0[(0, i)].clone();
        }
        out
    }
}

/* Common traits */
impl<T: Scalar, R: Dim, R2: Dim, C: Dim, C2: Dim, S, S2> PartialEq<Polynomial<T, R2, C2, S2>>
    for Polynomial<T, R, C, S>
where
    S: RawStorage<T, R, C>,
    S2: RawStorage<T, R2, C2>,
{
    #[inline]
    fn eq(&self, rhs: &Polynomial<T, R2, C2, S2>) -> bool {
        self.0 == rhs.0
    }
}
impl<T, R, C, S: fmt::Debug> fmt::Debug for Polynomial<T, R, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.data.fmt(formatter)
    }
}
