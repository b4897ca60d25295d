use crate::chain::operation::OperationTag;
use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_square::{Entry, SquareMatrix};
use std::fmt;

/// Result of one handled operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = i32> {
    Sum(SquareMatrix<T>),
    Product(SquareMatrix<T>),
    Equal(bool),
    Determinant(T),
    Inverse(SquareMatrix<T>),
    Transpose(SquareMatrix<T>),
    Trace(T),
    /// Copy of the first operand after it was diagonalized in place.
    Diagonal(SquareMatrix<T>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<T = i32> {
    Handled { tag: OperationTag, outcome: Outcome<T> },
    /// No handler in the chain is bound to the requested operation.
    Unrecognized,
}

impl<T> Report<T> {
    pub fn outcome(&self) -> Option<&Outcome<T>> {
        match self {
            Report::Handled { outcome, .. } => Some(outcome),
            Report::Unrecognized => None,
        }
    }
}

impl<T: Entry> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sum(m) => write!(f, "Sum of matrices:\n{}", m),
            Outcome::Product(m) => write!(f, "Product of matrices:\n{}", m),
            Outcome::Equal(equal) => writeln!(f, "Matrices are equal: {}", equal),
            Outcome::Determinant(det) => writeln!(f, "Determinant: {}", det),
            Outcome::Inverse(m) => write!(f, "Inverse matrix:\n{}", m),
            Outcome::Transpose(m) => write!(f, "Transposed matrix:\n{}", m),
            Outcome::Trace(trace) => writeln!(f, "Trace: {}", trace),
            Outcome::Diagonal(m) => write!(f, "Diagonalized matrix:\n{}", m),
        }
    }
}

impl<T: Entry> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Handled { outcome, .. } => write!(f, "{}", outcome),
            Report::Unrecognized => writeln!(f, "Unrecognized operation, cannot handle."),
        }
    }
}

/// Operands are call-scoped: only [`OperationTag::Diagonalize`] writes through `first`.
pub type Action<T> =
    fn(first: &mut SquareMatrix<T>, second: &SquareMatrix<T>) -> Result<Outcome<T>, MatrixError>;

/// One link of the chain: the operation it answers to and what it runs.
pub struct Handler<T = i32> {
    tag: OperationTag,
    action: Action<T>,
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler {
            tag: self.tag,
            action: self.action,
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("tag", &self.tag).finish()
    }
}

impl<T: Entry> Handler<T> {
    pub fn new(tag: OperationTag, action: Action<T>) -> Handler<T> {
        Handler { tag, action }
    }

    /// Handler running the matrix operation named by `tag`.
    pub fn standard(tag: OperationTag) -> Handler<T> {
        let action: Action<T> = match tag {
            OperationTag::Add => run_add,
            OperationTag::Multiply => run_multiply,
            OperationTag::Equal => run_equal,
            OperationTag::Determinant => run_determinant,
            OperationTag::Inverse => run_inverse,
            OperationTag::Transpose => run_transpose,
            OperationTag::Trace => run_trace,
            OperationTag::Diagonalize => run_diagonalize,
        };
        Handler { tag, action }
    }

    pub fn tag(&self) -> OperationTag {
        self.tag
    }

    pub fn handles(&self, tag: OperationTag) -> bool {
        self.tag == tag
    }

    pub fn run(
        &self,
        first: &mut SquareMatrix<T>,
        second: &SquareMatrix<T>,
    ) -> Result<Outcome<T>, MatrixError> {
        (self.action)(first, second)
    }
}

fn run_add<T: Entry>(
    first: &mut SquareMatrix<T>,
    second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Sum((&*first + second)?))
}

fn run_multiply<T: Entry>(
    first: &mut SquareMatrix<T>,
    second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Product((&*first * second)?))
}

fn run_equal<T: Entry>(
    first: &mut SquareMatrix<T>,
    second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Equal(*first == *second))
}

fn run_determinant<T: Entry>(
    first: &mut SquareMatrix<T>,
    _second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Determinant(first.determinant()))
}

fn run_inverse<T: Entry>(
    first: &mut SquareMatrix<T>,
    _second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Inverse(first.inverse()?))
}

fn run_transpose<T: Entry>(
    first: &mut SquareMatrix<T>,
    _second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Transpose(first.transpose()))
}

fn run_trace<T: Entry>(
    first: &mut SquareMatrix<T>,
    _second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Trace(first.trace()))
}

fn run_diagonalize<T: Entry>(
    first: &mut SquareMatrix<T>,
    _second: &SquareMatrix<T>,
) -> Result<Outcome<T>, MatrixError> {
    Ok(Outcome::Diagonal(first.diagonalize().clone()))
}

/// Ordered, immutable sequence of handlers. The first handler bound to the
/// requested tag runs; every handler before it forwards.
#[derive(Debug, Clone)]
pub struct HandlerChain<T = i32> {
    handlers: Vec<Handler<T>>,
}

impl<T: Entry> HandlerChain<T> {
    pub fn new(handlers: Vec<Handler<T>>) -> HandlerChain<T> {
        HandlerChain { handlers }
    }

    /// One standard handler per tag, in [`OperationTag::ALL`] order.
    pub fn standard() -> HandlerChain<T> {
        HandlerChain::new(
            OperationTag::ALL
                .into_iter()
                .map(Handler::standard)
                .collect(),
        )
    }

    pub fn tags(&self) -> impl Iterator<Item = OperationTag> + '_ {
        self.handlers.iter().map(|h| h.tag())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handle(
        &self,
        tag: OperationTag,
        first: &mut SquareMatrix<T>,
        second: &SquareMatrix<T>,
    ) -> Result<Report<T>, MatrixError> {
        for handler in &self.handlers {
            if handler.handles(tag) {
                tracing::debug!(handler = %handler.tag(), "operation handled");
                let outcome = handler.run(first, second)?;
                return Ok(Report::Handled { tag, outcome });
            }
            tracing::trace!(
                handler = %handler.tag(),
                requested = %tag,
                "cannot handle, forwarding to next handler"
            );
        }

        tracing::warn!(requested = %tag, "unrecognized operation, cannot handle");
        Ok(Report::Unrecognized)
    }
}

impl<T: Entry> Default for HandlerChain<T> {
    fn default() -> Self {
        HandlerChain::standard()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
