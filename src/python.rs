use crate::chain::dispatcher::Dispatcher;
use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_square::SquareMatrix;
use pyo3::basic::CompareOp;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing_subscriber::EnvFilter;

fn value_error(error: MatrixError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

// RUST_LOG decides the level, `warn` otherwise. A second import keeps the first subscriber.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

#[derive(Debug, Clone)]
#[pyclass(name = "SquareMatrix")]
pub struct PyMatrix {
    pub inner: SquareMatrix<i64>,
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(order: usize) -> PyResult<Self> {
        if order == 0 {
            return Err(PyValueError::new_err("matrix order must be positive"));
        }
        Ok(PyMatrix {
            inner: SquareMatrix::new(order),
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<i64>>) -> PyResult<Self> {
        match Matrix::from_list(lines) {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(value_error(error)),
        }
    }

    #[classmethod]
    pub fn random(_cls: &Bound<PyType>, order: usize, min: i64, max: i64) -> PyResult<Self> {
        if order == 0 || min >= max {
            return Err(PyValueError::new_err(
                "order must be positive and min lower than max",
            ));
        }
        Ok(PyMatrix {
            inner: SquareMatrix::random(order, min, max, &mut rand::thread_rng()),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<i64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        match &self.inner + &rhs.inner {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(value_error(error)),
        }
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        match &self.inner * &rhs.inner {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(value_error(error)),
        }
    }

    pub fn __richcmp__(&self, other: &PyMatrix, op: CompareOp) -> bool {
        op.matches(self.inner.cmp(&other.inner))
    }

    pub fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn determinant(&self) -> i64 {
        self.inner.determinant()
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        match self.inner.inverse() {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(value_error(error)),
        }
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transpose(),
        }
    }

    pub fn trace(&self) -> i64 {
        self.inner.trace()
    }

    /// Zero the off-diagonal entries of this matrix in place.
    pub fn diagonalize(&mut self) {
        self.inner.diagonalize();
    }
}

/// Run the operation behind menu number `selector` and return the rendered report.
#[pyfunction]
pub fn dispatch(
    selector: u8,
    first: &Bound<'_, PyMatrix>,
    second: &Bound<'_, PyMatrix>,
) -> PyResult<String> {
    // `first` and `second` may be the same Python object
    let second = second.borrow().inner.clone();
    let mut first = first.borrow_mut();

    match Dispatcher::new().dispatch_selector(selector, &mut first.inner, &second) {
        Ok(report) => Ok(report.to_string()),
        Err(error) => Err(value_error(error)),
    }
}
