use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::ap::mining::apriori_algorithm;
use crate::ap::utils::FrequentLevel;
use crate::config::MiningConfig;
use crate::database::Database;
use crate::error::AprioriError;

fn to_py_err(err: AprioriError) -> PyErr {
    match err {
        AprioriError::InvalidMinSupport(_) => PyValueError::new_err(err.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

fn level_to_array(level: &FrequentLevel) -> PyResult<Array2<usize>> {
    let itemset_size = level.itemset_size;
    let mut data = Vec::with_capacity(level.len() * itemset_size);
    for itemset in level.iter_itemsets() {
        data.extend_from_slice(itemset);
    }
    Array2::from_shape_vec((level.len(), itemset_size), data)
        .map_err(|_| PyValueError::new_err("Failed to create array"))
}

/// Mines a binary transaction matrix. Returns one `(n_itemsets, k)` array
/// per non-empty level.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_len = None))]
fn apriori<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let database = Database::from_dense(transactions.as_array());
    let config = MiningConfig::new(min_support)
        .map_err(to_py_err)?
        .with_max_itemset_size(max_len)
        .with_parallel(true);

    let frequent = py
        .allow_threads(|| apriori_algorithm(&database, &config))
        .map_err(to_py_err)?;

    frequent
        .levels()
        .iter()
        .map(|level| Ok(level_to_array(level)?.into_pyarray(py)))
        .collect()
}

#[pymodule]
#[pyo3(name = "apriori")]
fn apriori_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    Ok(())
}
