use crate::chain::handler::{HandlerChain, Report};
use crate::chain::operation::OperationTag;
use crate::error::MatrixError;
use crate::matrix::matrix_square::{Entry, SquareMatrix};

/// Entry point for callers: holds a read-only chain and routes requests through it.
///
/// The dispatcher keeps no per-request state, so one instance can serve any
/// number of requests as long as each request brings its own operands.
#[derive(Debug, Clone)]
pub struct Dispatcher<T = i32> {
    chain: HandlerChain<T>,
}

impl<T: Entry> Dispatcher<T> {
    pub fn new() -> Dispatcher<T> {
        Dispatcher {
            chain: HandlerChain::standard(),
        }
    }

    pub fn with_chain(chain: HandlerChain<T>) -> Dispatcher<T> {
        Dispatcher { chain }
    }

    pub fn chain(&self) -> &HandlerChain<T> {
        &self.chain
    }

    /// Run `tag` on the operands. Unary operations ignore `second`;
    /// [`OperationTag::Diagonalize`] rewrites `first` in place.
    pub fn dispatch(
        &self,
        tag: OperationTag,
        first: &mut SquareMatrix<T>,
        second: &SquareMatrix<T>,
    ) -> Result<Report<T>, MatrixError> {
        self.chain.handle(tag, first, second)
    }

    /// Same as [`Dispatcher::dispatch`] for a raw menu number (1-8).
    pub fn dispatch_selector(
        &self,
        selector: u8,
        first: &mut SquareMatrix<T>,
        second: &SquareMatrix<T>,
    ) -> Result<Report<T>, MatrixError> {
        match OperationTag::from_selector(selector) {
            Some(tag) => self.dispatch(tag, first, second),
            None => {
                tracing::warn!(selector, "unrecognized operation, cannot handle");
                Ok(Report::Unrecognized)
            }
        }
    }
}

impl<T: Entry> Default for Dispatcher<T> {
    fn default() -> Self {
        Dispatcher::new()
    }
}

/// One-shot dispatch through a freshly built standard chain.
pub fn dispatch<T: Entry>(
    tag: OperationTag,
    first: &mut SquareMatrix<T>,
    second: &SquareMatrix<T>,
) -> Result<Report<T>, MatrixError> {
    Dispatcher::new().dispatch(tag, first, second)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::handler::{Handler, Outcome};
    use crate::matrix::matrix::Matrix;
    use crate::utils::capture_logs;

    #[test]
    fn test_dispatch_trace() {
        let mut m = SquareMatrix::from([[1, 2], [3, 4]]);
        let other = SquareMatrix::new(2);

        let report = dispatch(OperationTag::Trace, &mut m, &other).unwrap();
        assert_eq!(
            report,
            Report::Handled {
                tag: OperationTag::Trace,
                outcome: Outcome::Trace(5)
            }
        );
        assert_eq!(m, SquareMatrix::from([[1, 2], [3, 4]]));
    }

    #[test]
    fn test_dispatch_diagonalize() {
        let mut m = SquareMatrix::from([[1, 2], [3, 4]]);
        let other = SquareMatrix::new(2);

        let report = dispatch(OperationTag::Diagonalize, &mut m, &other).unwrap();
        assert_eq!(
            report.outcome(),
            Some(&Outcome::Diagonal(SquareMatrix::from([[1, 0], [0, 4]])))
        );
        assert_eq!(m, SquareMatrix::from([[1, 0], [0, 4]]));
        assert_eq!(report.to_string(), "Diagonalized matrix:\n1 0\n0 4\n");
    }

    #[test]
    fn test_dispatch_errors() {
        let dispatcher = Dispatcher::new();
        let mut a = SquareMatrix::from([[1, 2], [3, 4]]);
        let b = SquareMatrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

        assert_eq!(
            dispatcher.dispatch(OperationTag::Add, &mut a, &b),
            Err(MatrixError::IncompatibleSize { left: 2, right: 3 })
        );
        assert_eq!(
            dispatcher.dispatch(OperationTag::Multiply, &mut a, &b),
            Err(MatrixError::IncompatibleSize { left: 2, right: 3 })
        );

        let mut singular = SquareMatrix::from([[1, 2], [2, 4]]);
        assert_eq!(
            dispatcher.dispatch(OperationTag::Inverse, &mut singular, &b),
            Err(MatrixError::NonInvertible { column: 1 })
        );
    }

    #[test]
    fn test_dispatch_inverse_identity() {
        let dispatcher = Dispatcher::<i64>::default();
        let mut p = SquareMatrix::from([[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        let other = SquareMatrix::identity(3);

        let inverse = match dispatcher.dispatch(OperationTag::Inverse, &mut p, &other) {
            Ok(Report::Handled {
                outcome: Outcome::Inverse(inverse),
                ..
            }) => inverse,
            other => panic!("unexpected report {:?}", other),
        };
        assert_eq!((&p * &inverse).unwrap(), SquareMatrix::identity(3));
    }

    #[test]
    fn test_dispatch_selector() {
        let dispatcher = Dispatcher::new();
        let mut a = SquareMatrix::from([[1, 2], [3, 4]]);
        let b = SquareMatrix::from([[1, 2], [3, 4]]);

        assert_eq!(
            dispatcher.dispatch_selector(3, &mut a, &b).unwrap().outcome(),
            Some(&Outcome::Equal(true))
        );
        assert_eq!(
            dispatcher.dispatch_selector(4, &mut a, &b).unwrap().outcome(),
            Some(&Outcome::Determinant(-2))
        );

        for selector in [0, 9, 255] {
            let (report, logs) =
                capture_logs(|| dispatcher.dispatch_selector(selector, &mut a, &b));
            assert_eq!(report, Ok(Report::Unrecognized));
            assert!(logs.contains("unrecognized operation"));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_chain() {
        let dispatcher = Dispatcher::with_chain(HandlerChain::new(vec![
            Handler::standard(OperationTag::Trace),
            Handler::standard(OperationTag::Add),
        ]));
        assert_eq!(
            dispatcher.chain().tags().collect::<Vec<_>>(),
            vec![OperationTag::Trace, OperationTag::Add]
        );

        let mut a = SquareMatrix::from([[1, 2], [3, 4]]);
        let b = SquareMatrix::new(2);
        assert_eq!(
            dispatcher.dispatch(OperationTag::Transpose, &mut a, &b),
            Ok(Report::Unrecognized)
        );
        assert_eq!(
            dispatcher.dispatch(OperationTag::Add, &mut a, &b).unwrap().outcome(),
            Some(&Outcome::Sum(SquareMatrix::from([[1, 2], [3, 4]])))
        );
    }
}
