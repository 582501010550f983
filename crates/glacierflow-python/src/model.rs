use numpy::{PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{checked_slice, contiguous_slice};

use glacierflow_core::constants::{FS_DEFAULT, GLEN_A_DEFAULT};
use glacierflow_core::flowline::{BedShape, Flowline};
use glacierflow_core::massbalance::{LinearMassBalance, ShiftingMassBalance};
use glacierflow_core::model::{FlowlineModel, PhysicsParams};
use glacierflow_core::traits::MassBalance;

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_timeseries_result! {
    /// Evolution-run diagnostics with typed numpy array attributes.
    pub struct RunResult from glacierflow_core::model::DiagnosticsTimeseries {
        time_yr, length_m, area_km2, volume_km3, max_thickness_m, max_velocity_myr,
    }
}

define_step_result! {
    /// Single-state glacier diagnostics.
    pub struct StateDiagnostics from glacierflow_core::model::Diagnostics {
        time_yr, length_m, area_km2, volume_km3, max_thickness_m, max_velocity_myr,
    }
}

fn value_err(e: String) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e)
}

fn parse_shape(shape: &str, lambda_: f64) -> PyResult<BedShape> {
    match shape {
        "rectangular" => Ok(BedShape::Rectangular),
        "trapezoidal" => Ok(BedShape::Trapezoidal { lambda: lambda_ }),
        "parabolic" => Ok(BedShape::Parabolic),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown shape '{}' (expected rectangular, trapezoidal or parabolic)",
            other
        ))),
    }
}

fn build_mass_balance(
    ela: f64,
    grad: f64,
    ela_trend: Option<f64>,
    final_ela: Option<f64>,
) -> PyResult<Box<dyn MassBalance>> {
    match ela_trend {
        Some(trend) => Ok(Box::new(
            ShiftingMassBalance::new(ela, grad, trend, final_ela).map_err(value_err)?,
        )),
        None => Ok(Box::new(LinearMassBalance::new(ela, grad).map_err(value_err)?)),
    }
}

#[allow(clippy::too_many_arguments)]
fn build_model(
    bed_h: &PyReadonlyArray1<'_, f64>,
    surface_h: Option<&PyReadonlyArray1<'_, f64>>,
    widths: &PyReadonlyArray1<'_, f64>,
    dx: f64,
    shape: &str,
    lambda_: f64,
    ela: f64,
    grad: f64,
    glen_a: Option<f64>,
    fs: f64,
    y0: f64,
    ela_trend: Option<f64>,
    final_ela: Option<f64>,
) -> PyResult<FlowlineModel> {
    let bed_slice = contiguous_slice(bed_h)?;
    let widths_slice = checked_slice(widths, bed_slice.len(), "widths")?;
    let bed_shape = parse_shape(shape, lambda_)?;

    let flowline = match surface_h {
        Some(s) => {
            let s_slice = checked_slice(s, bed_slice.len(), "surface_h")?;
            Flowline::new(
                bed_slice.to_vec(),
                s_slice.to_vec(),
                widths_slice.to_vec(),
                dx,
                bed_shape,
            )
        }
        None => Flowline::ice_free(bed_slice.to_vec(), widths_slice.to_vec(), dx, bed_shape),
    }
    .map_err(value_err)?;

    let mb = build_mass_balance(ela, grad, ela_trend, final_ela)?;
    let params = PhysicsParams::new(glen_a.unwrap_or(GLEN_A_DEFAULT), fs).map_err(value_err)?;
    FlowlineModel::new(flowline, mb, params, y0).map_err(value_err)
}

/// Run a flowline glacier model, storing diagnostics at each output year.
///
/// Returns (RunResult, surfaces) where `surfaces` is a 2-D numpy array of
/// surface elevations, one row per stored output year.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    bed_h,
    widths,
    dx,
    ela,
    grad,
    output_years,
    surface_h=None,
    shape="rectangular",
    lambda_=1.0,
    glen_a=None,
    fs=FS_DEFAULT,
    y0=0.0,
    ela_trend=None,
    final_ela=None,
))]
fn flowline_run<'py>(
    py: Python<'py>,
    bed_h: PyReadonlyArray1<'py, f64>,
    widths: PyReadonlyArray1<'py, f64>,
    dx: f64,
    ela: f64,
    grad: f64,
    output_years: PyReadonlyArray1<'py, f64>,
    surface_h: Option<PyReadonlyArray1<'py, f64>>,
    shape: &str,
    lambda_: f64,
    glen_a: Option<f64>,
    fs: f64,
    y0: f64,
    ela_trend: Option<f64>,
    final_ela: Option<f64>,
) -> PyResult<(RunResult, Bound<'py, PyArray2<f64>>)> {
    let mut model = build_model(
        &bed_h,
        surface_h.as_ref(),
        &widths,
        dx,
        shape,
        lambda_,
        ela,
        grad,
        glen_a,
        fs,
        y0,
        ela_trend,
        final_ela,
    )?;

    let years = contiguous_slice(&output_years)?;
    let out = model.run_until_and_store(years).map_err(value_err)?;

    let surfaces = PyArray2::from_vec2(py, &out.surfaces)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok((RunResult::from_timeseries(py, out.diagnostics), surfaces))
}

/// Run a flowline glacier model to a single target year.
///
/// Returns (surface_h, StateDiagnostics) at the target year.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    bed_h,
    widths,
    dx,
    ela,
    grad,
    year,
    surface_h=None,
    shape="rectangular",
    lambda_=1.0,
    glen_a=None,
    fs=FS_DEFAULT,
    y0=0.0,
    ela_trend=None,
    final_ela=None,
))]
fn flowline_run_until<'py>(
    py: Python<'py>,
    bed_h: PyReadonlyArray1<'py, f64>,
    widths: PyReadonlyArray1<'py, f64>,
    dx: f64,
    ela: f64,
    grad: f64,
    year: f64,
    surface_h: Option<PyReadonlyArray1<'py, f64>>,
    shape: &str,
    lambda_: f64,
    glen_a: Option<f64>,
    fs: f64,
    y0: f64,
    ela_trend: Option<f64>,
    final_ela: Option<f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, StateDiagnostics)> {
    let mut model = build_model(
        &bed_h,
        surface_h.as_ref(),
        &widths,
        dx,
        shape,
        lambda_,
        ela,
        grad,
        glen_a,
        fs,
        y0,
        ela_trend,
        final_ela,
    )?;

    model.run_until(year).map_err(value_err)?;

    let surface = PyArray1::from_vec(py, model.flowline().surface_h().to_vec());
    let diagnostics = StateDiagnostics::from_diagnostics(&model.diagnostics());
    Ok((surface, diagnostics))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "model")?;
    m.add_function(wrap_pyfunction!(flowline_run, &m)?)?;
    m.add_function(wrap_pyfunction!(flowline_run_until, &m)?)?;
    m.add_class::<RunResult>()?;
    m.add_class::<StateDiagnostics>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
