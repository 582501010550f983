use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::contiguous_slice;

use glacierflow_core::massbalance::{LinearMassBalance, ShiftingMassBalance};
use glacierflow_core::traits::MassBalance;

/// Evaluate a linear-gradient mass balance over an array of elevations.
///
/// Returns annual ice-equivalent rates [m yr^-1]. `ela_trend` (m yr^-1) and
/// `final_ela` switch to the time-shifting variant evaluated at `year`.
#[pyfunction]
#[pyo3(signature = (elevations, ela, grad, year=0.0, ela_trend=None, final_ela=None))]
fn annual_mass_balance<'py>(
    py: Python<'py>,
    elevations: PyReadonlyArray1<'py, f64>,
    ela: f64,
    grad: f64,
    year: f64,
    ela_trend: Option<f64>,
    final_ela: Option<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let elev_slice = contiguous_slice(&elevations)?;
    let time_s = year * glacierflow_core::constants::SEC_IN_YEAR;

    let rates: Vec<f64> = match ela_trend {
        Some(trend) => {
            let mb = ShiftingMassBalance::new(ela, grad, trend, final_ela)
                .map_err(pyo3::exceptions::PyValueError::new_err)?;
            elev_slice
                .iter()
                .map(|&z| mb.annual_mass_balance(z, time_s))
                .collect()
        }
        None => {
            let mb = LinearMassBalance::new(ela, grad)
                .map_err(pyo3::exceptions::PyValueError::new_err)?;
            elev_slice
                .iter()
                .map(|&z| mb.annual_mass_balance(z, time_s))
                .collect()
        }
    };

    Ok(PyArray1::from_vec(py, rates))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "massbalance")?;
    m.add_function(wrap_pyfunction!(annual_mass_balance, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
