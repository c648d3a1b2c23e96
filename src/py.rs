use crate::{BigInt, Error};
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use std::string::String;
use std::string::ToString;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        if err.is_allocation() {
            PyMemoryError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// A class representing arbitrary precision non-negative integers.
///
/// Numbers are built from decimal strings and printed in hexadecimal.
#[pyclass(name = "BigInt")]
struct PyBigInt {
    inner: BigInt,
}

#[pymethods]
impl PyBigInt {
    /// Create a new number from a decimal string.
    ///
    /// Args:
    ///     digits: A non-empty string of the digits 0-9, with no sign
    ///
    /// Raises:
    ///     ValueError: if the string is not a valid decimal number
    #[new]
    fn new(digits: &str) -> PyResult<Self> {
        Ok(PyBigInt {
            inner: BigInt::from_decimal(digits)?,
        })
    }
    /// Multiply two numbers and return the product as a new number.
    fn __mul__(&self, other: &PyBigInt) -> PyResult<PyBigInt> {
        Ok(PyBigInt {
            inner: self.inner.try_mul(&other.inner)?,
        })
    }
    /// Returns the number in hexadecimal, for example '0x1FFFFFFFE'.
    fn hex(&self) -> String {
        self.inner.as_hex()
    }
    /// Returns True if the number is zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns the number of 32-bit words in the number.
    fn __len__(&self) -> usize {
        self.inner.len()
    }
    fn __str__(&self) -> String {
        self.inner.as_hex()
    }
    fn __repr__(&self) -> String {
        format!("BigInt({})", self.inner.as_hex())
    }
    /// Prints the words of the number.
    fn dump(&self) {
        self.inner.dump();
    }
} // impl PyBigInt

/// Multiply two decimal strings and return the product in hexadecimal.
///
/// Args:
///     a: The first decimal number
///     b: The second decimal number
#[pyfunction]
fn multiply(a: &str, b: &str) -> PyResult<String> {
    Ok(crate::multiply_decimal(a, b)?)
}

#[pymodule]
fn _bigmult(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBigInt>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(multiply, m)?)?;
    Ok(())
}
