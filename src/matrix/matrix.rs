use crate::error::MatrixError;

/// Square matrix contract shared by the dispatcher and the bindings.
///
/// Every operation allocates its result, except [`Matrix::diagonalize`]
/// which rewrites its receiver.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Self;
    fn order(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;

    fn transpose(&self) -> Self;
    fn trace(&self) -> T;
    fn determinant(&self) -> T;
    fn inverse(&self) -> Result<Self, MatrixError>;

    /// Zero every off-diagonal entry in place.
    fn diagonalize(&mut self) -> &mut Self;
}
