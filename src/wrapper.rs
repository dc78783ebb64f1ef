use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};

use crate::{
    config::{AprioriConfig, MinSupport},
    itemsets::driver::Apriori,
    preprocess::Tokenizer,
    result::FrequentItemsets,
};

/// `{k: {frozenset(itemset): support}}`
pub fn convert_itemset_counts(
    py: Python<'_>,
    frequent_itemsets: &FrequentItemsets<String>,
) -> PyResult<Py<PyDict>> {
    let py_levels = PyDict::new_bound(py);
    for level in frequent_itemsets {
        let py_itemset_counts = PyDict::new_bound(py);
        for (itemset, count) in level.sorted() {
            let key = PyFrozenSet::new_bound(py, itemset.items())?;
            py_itemset_counts.set_item(key, count)?;
        }
        py_levels.set_item(level.k(), py_itemset_counts)?;
    }
    Ok(py_levels.unbind())
}

/// Mine frequent itemsets with an absolute minimum support count.
#[pyfunction]
#[pyo3(name = "apriori", signature = (transactions, min_support, max_len = None))]
fn mine(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: i64,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let mut config = AprioriConfig::new(MinSupport::from_signed(min_support)?);
    config.max_len = max_len;

    let frequent_itemsets = py.allow_threads(|| Apriori::new(config).mine(transactions))?;
    convert_itemset_counts(py, &frequent_itemsets)
}

/// Split delimited text fields into normalized transactions.
#[pyfunction]
fn tokenize(rows: Vec<String>, delimiters: Vec<String>) -> PyResult<Vec<Vec<String>>> {
    let tokenizer = Tokenizer::new(delimiters.as_slice())?;
    Ok(tokenizer.tokenize_all(rows))
}

#[pymodule]
#[pyo3(name = "apriori")]
fn apriori_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine, m)?)?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    Ok(())
}
