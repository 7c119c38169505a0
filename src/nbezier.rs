//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Dim, U1, U2, U4};
use nalgebra::{DefaultAllocator, Matrix, Matrix2x4, OMatrix, OVector, Owned, RealField, Storage};

use crate::npolynomial::Polynomial;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Wrapper around [`nalgebra::OMatrix`] interpreting it as a bezier curve.
pub type OBezierCurve<T, R, C> = BezierCurve<T, R, C, Owned<T, R, C>>;

/// Stack allocated planar cubic curve, the only kind the editor ever draws.
pub type CubicCurve = OBezierCurve<f64, U2, U4>;

impl CubicCurve {
    /// Build a cubic curve from its start, both controls and its end.
    pub fn cubic(
        start: OVector<f64, U2>,
        control1: OVector<f64, U2>,
        control2: OVector<f64, U2>,
        end: OVector<f64, U2>,
    ) -> Self {
        BezierCurve(Matrix2x4::from_columns(&[start, control1, control2, end]))
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    DefaultAllocator: Allocator<T, R, U1>,
    DefaultAllocator: Allocator<T, R, C>,
{
    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm. An alternative way would be to evaluate the
    /// curve's polynomial (See `BezierCurve::polynomial`).
    pub fn castlejau_eval(&self, t: T) -> OVector<T, R> {
        let t_inv = T::one() - t.clone();
        let ncols = self.0.ncols();

        let mut points = (&mut self.0.clone_owned(), &mut self.0.clone_owned());
        for step in 0..ncols {
            let (input, output) = points;
            for i in 1..(ncols - step) {
                let column = &input.column(i - 1) * t_inv.clone() + &input.column(i) * t.clone();
                output.set_column(i - 1, &column);
            }
            points = (output, input);
        }

        points.1.column(0).clone_owned()
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    DefaultAllocator: Allocator<T, R, C>, // polynomial
    DefaultAllocator: Allocator<T, C, C>, // bernstein basis
{
    /// Computes the curve's polynomial
    ///
    /// This polynomial evaluated between `0` and `1` yields the same points as its corrisponding bezier curve.
    pub fn polynomial(&self) -> Polynomial<T, R, C, Owned<T, R, C>> {
        let (rows, cols) = self.0.shape_generic();
        let mut polynomial = Matrix::zeros_generic(rows, cols);

        for (i, b) in bernstein_polynomials::<T, _>(cols).row_iter().enumerate() {
            let p = self.0.column(i) * b;
            polynomial += p;
        }

        Polynomial(polynomial)
    }
}

/// Computes the bernstein polynomial basis for a given degree
pub fn bernstein_polynomials<T: RealField, C: Dim>(cols: C) -> OMatrix<T, C, C>
where
    DefaultAllocator: Allocator<T, C, C>,
{
    // Each row is a different berstein polynomial
    let mut polynomials = OMatrix::zeros_generic(cols, cols);

    // Fill matrix with pascal triangle of shape:
    //    ...
    //   1 3 3 1
    //     1 2 1
    //       1 1
    //         1
    for n in 0..cols.value() {
        let m = cols.value() - 1 - n;
        polynomials[(m, cols.value() - 1)] = T::one();
        polynomials[(m, m)] = T::one();
        for i in 1..n {
            let j = cols.value() - 1 - i;
            polynomials[(m, j)] =
                polynomials[(m + 1, j + 1)].clone() + polynomials[(m + 1, j)].clone();
        }
    }

    // Scale every row by the entries is the top row
    // (First and last row can be skipped, since their coeff is always 1)
    for i in 1..(cols.value() - 1) {
        let coeff = polynomials[(0, i)].clone();
        let mut row = polynomials.row_mut(i);
        row *= coeff;
    }

    // Apply minus sign in checkerboard pattern
    for i in 0..cols.value() {
        for j in i..cols.value() {
            if (j + i) % 2 == 1 {
                polynomials[(i, j)] *= -T::one();
            }
        }
    }

    polynomials
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Const, Matrix2, Matrix4, RowVector2, RowVector4, Vector2};

    #[test]
    fn bernstein() {
        assert_eq!(
            bernstein_polynomials::<f64, _>(Const::<2>),
            Matrix2::from_rows(&[RowVector2::new(1.0, -1.0), RowVector2::new(0.0, 1.0),])
        );
        assert_eq!(
            bernstein_polynomials::<f64, _>(Const::<4>),
            Matrix4::from_rows(&[
                RowVector4::new(1.0, -3.0, 3.0, -1.0),
                RowVector4::new(0.0, 3.0, -6.0, 3.0),
                RowVector4::new(0.0, 0.0, 3.0, -3.0),
                RowVector4::new(0.0, 0.0, 0.0, 1.0),
            ])
        );
    }

    #[test]
    fn cubic_endpoints() {
        let curve = CubicCurve::cubic(
            Vector2::new(0.0, 100.0),
            Vector2::new(25.0, 75.0),
            Vector2::new(75.0, 25.0),
            Vector2::new(100.0, 0.0),
        );
        assert_relative_eq!(curve.castlejau_eval(0.0), Vector2::new(0.0, 100.0));
        assert_relative_eq!(curve.castlejau_eval(1.0), Vector2::new(100.0, 0.0));
        // Symmetric controls put the midpoint in the middle
        assert_relative_eq!(curve.castlejau_eval(0.5), Vector2::new(50.0, 50.0));
    }

    #[test]
    fn polynomial_matches_castlejau() {
        let curve = CubicCurve::cubic(
            Vector2::new(50.0, 0.0),
            Vector2::new(200.0, 33.0),
            Vector2::new(0.0, 66.0),
            Vector2::new(50.0, 100.0),
        );
        let polynomial = curve.polynomial();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_relative_eq!(
                polynomial.evaluate(t),
                curve.castlejau_eval(t),
                epsilon = 1e-9
            );
        }
    }
}
