#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod chain {
    pub mod dispatcher;
    pub mod handler;
    pub mod operation;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_square;
}

pub mod error;

#[cfg(feature = "python")]
pub mod python;

#[cfg(test)]
mod utils;

pub use chain::dispatcher::{dispatch, Dispatcher};
pub use chain::handler::{Handler, HandlerChain, Outcome, Report};
pub use chain::operation::OperationTag;
pub use error::MatrixError;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_square::{Entry, SquareMatrix};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn matrix_chain(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::init_logging();
    m.add_class::<python::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(python::dispatch, m)?)?;
    Ok(())
}
