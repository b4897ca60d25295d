use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use itertools::Itertools;
use num_traits::{AsPrimitive, PrimInt, Signed, WrappingAdd, WrappingMul, WrappingSub};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops;

pub trait Entry:  // Avoid repeating all the traits
    PrimInt
    + Signed
    + AsPrimitive<f64>
    + SampleUniform
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + std::hash::Hash
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Entry for T where
    T: PrimInt
        + Signed
        + AsPrimitive<f64>
        + SampleUniform
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + std::hash::Hash
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Square matrix of fixed-width integers, stored row-major.
///
/// Arithmetic on entries wraps on overflow in every build profile.
///
/// Ordering compares the order first, then the entries lexicographically
/// in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquareMatrix<T = i32> {
    order: usize,
    cells: Vec<T>,
}

impl<T: Entry> SquareMatrix<T> {
    /// Zero-filled matrix.
    ///
    /// # Panics
    /// If `order` is zero.
    pub fn new(order: usize) -> SquareMatrix<T> {
        assert!(order > 0, "matrix order must be positive");
        SquareMatrix {
            order,
            cells: vec![T::zero(); order * order],
        }
    }

    /// Matrix filled with uniform samples from `[min, max)`.
    ///
    /// # Panics
    /// If `order` is zero or the range is empty.
    pub fn random<R: Rng>(order: usize, min: T, max: T, rng: &mut R) -> SquareMatrix<T> {
        assert!(order > 0, "matrix order must be positive");
        assert!(min < max, "empty fill range");
        SquareMatrix {
            order,
            cells: (0..order * order).map(|_| rng.gen_range(min..max)).collect(),
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Submatrix without `row` and `col`. `None` for order 1 or an index out of range.
    pub fn minor(&self, row: usize, col: usize) -> Option<SquareMatrix<T>> {
        if self.order < 2 || row >= self.order || col >= self.order {
            return None;
        }
        Some(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> SquareMatrix<T> {
        SquareMatrix {
            order: self.order - 1,
            cells: (0..self.order)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    (0..self.order)
                        .filter(move |&c| c != col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        }
    }
}

impl<T: Entry> Matrix<T> for SquareMatrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let order = lines.len();
        if order == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != order) {
            return Err(MatrixError::NotSquare {
                row,
                expected: order,
                found: line.len(),
            });
        }

        Ok(SquareMatrix {
            order,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.order)
            .map(|line| line.into())
            .collect()
    }

    /// # Panics
    /// If `n` is zero.
    fn identity(n: usize) -> SquareMatrix<T> {
        assert!(n > 0, "matrix order must be positive");
        SquareMatrix {
            order: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn order(&self) -> usize {
        self.order
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.order && col < self.order, "index out of bounds");
        self.cells[row * self.order + col]
    }

    fn transpose(&self) -> SquareMatrix<T> {
        SquareMatrix {
            order: self.order,
            cells: (0..self.order)
                .flat_map(|r| (0..self.order).map(move |c| self.at(c, r)))
                .collect(),
        }
    }

    fn trace(&self) -> T {
        (0..self.order).fold(T::zero(), |acc, i| acc.wrapping_add(&self.at(i, i)))
    }

    /// Cofactor expansion along the first row. Factorial cost, meant for small orders.
    fn determinant(&self) -> T {
        if self.order == 1 {
            return self.cells[0];
        }

        let mut det = T::zero();
        for col in 0..self.order {
            let term = self
                .at(0, col)
                .wrapping_mul(&self.minor_unchecked(0, col).determinant());
            det = if col % 2 == 0 {
                det.wrapping_add(&term)
            } else {
                det.wrapping_sub(&term)
            };
        }
        det
    }

    /// Gauss-Jordan elimination over `[self | I]` in `f64`.
    ///
    /// The right half is narrowed back to `T` by truncation toward zero, so
    /// only matrices with an integer inverse round-trip exactly.
    fn inverse(&self) -> Result<SquareMatrix<T>, MatrixError> {
        let n = self.order;
        let width = 2 * n;
        let mut aug = vec![0f64; n * width];

        for row in 0..n {
            for col in 0..n {
                aug[row * width + col] = self.at(row, col).as_();
            }
            aug[row * width + n + row] = 1.0;
        }

        for pivot in 0..n {
            if aug[pivot * width + pivot] == 0.0 {
                if let Some(row) = (pivot + 1..n).find(|&r| aug[r * width + pivot] != 0.0) {
                    for k in 0..width {
                        aug.swap(pivot * width + k, row * width + k);
                    }
                }
            }

            let pivot_val = aug[pivot * width + pivot];
            if pivot_val == 0.0 {
                tracing::debug!(column = pivot, "no nonzero pivot");
                return Err(MatrixError::NonInvertible { column: pivot });
            }

            for k in pivot..width {
                aug[pivot * width + k] /= pivot_val;
            }

            for row in pivot + 1..n {
                let factor = aug[row * width + pivot];
                for k in pivot..width {
                    let delta = factor * aug[pivot * width + k];
                    aug[row * width + k] -= delta;
                }
            }
        }

        // Upper triangle -> identity
        for pivot in (0..n).rev() {
            for row in 0..pivot {
                let factor = aug[row * width + pivot];
                for k in 0..width {
                    let delta = factor * aug[pivot * width + k];
                    aug[row * width + k] -= delta;
                }
            }
        }

        let mut inverse = SquareMatrix::new(n);
        for row in 0..n {
            for col in 0..n {
                inverse.cells[row * n + col] = num_traits::cast(aug[row * width + n + col])
                    .ok_or(MatrixError::EntryOverflow { row, column: col })?;
            }
        }
        Ok(inverse)
    }

    fn diagonalize(&mut self) -> &mut SquareMatrix<T> {
        let order = self.order;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            if index / order != index % order {
                *cell = T::zero();
            }
        }
        self
    }
}

impl<T: Entry, const N: usize> From<[[T; N]; N]> for SquareMatrix<T> {
    fn from(lines: [[T; N]; N]) -> SquareMatrix<T> {
        assert!(N > 0, "matrix order must be positive");
        SquareMatrix {
            order: N,
            cells: lines.into_iter().flatten().collect(),
        }
    }
}

impl<T> ops::Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.order && col < self.order, "index out of bounds");
        &self.cells[row * self.order + col]
    }
}

impl<T> ops::IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.order && col < self.order, "index out of bounds");
        &mut self.cells[row * self.order + col]
    }
}

impl<T: Entry> ops::Add<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>, MatrixError>;

    fn add(self, rhs: &SquareMatrix<T>) -> Result<SquareMatrix<T>, MatrixError> {
        if self.order != rhs.order {
            return Err(MatrixError::IncompatibleSize {
                left: self.order,
                right: rhs.order,
            });
        }

        Ok(SquareMatrix {
            order: self.order,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.wrapping_add(b))
                .collect(),
        })
    }
}

impl<T: Entry> ops::Mul<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>, MatrixError>;

    fn mul(self, rhs: &SquareMatrix<T>) -> Result<SquareMatrix<T>, MatrixError> {
        if self.order != rhs.order {
            return Err(MatrixError::IncompatibleSize {
                left: self.order,
                right: rhs.order,
            });
        }

        let n = self.order;
        Ok(SquareMatrix {
            order: n,
            cells: (0..n)
                .flat_map(|i| {
                    (0..n).map(move |j| {
                        (0..n).fold(T::zero(), |acc, k| {
                            acc.wrapping_add(&self.at(i, k).wrapping_mul(&rhs.at(k, j)))
                        })
                    })
                })
                .collect(),
        })
    }
}

impl<T: Entry> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.order) {
            writeln!(f, "{}", line.iter().join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
