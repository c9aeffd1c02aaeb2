use crate::interpolate::{interpolate, InterpolationError};
use crate::tables::{HUNTER_FLUSH_VALVE, HUNTER_TANK_FED};
use serde::Serialize;

/// Probable simultaneous demand for a fixture-unit count, one value per
/// supply system type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbableFlow {
    /// Demand for a tank-fed system [l/s].
    pub tank_fed_lps: f64,
    /// Demand for a flush-valve (fluxómetro) system [l/s].
    pub flush_valve_lps: f64,
}

/// Probable flow for `units` Hunter units from both shipped demand curves.
pub fn probable_flow(units: f64) -> Result<ProbableFlow, InterpolationError> {
    Ok(ProbableFlow {
        tank_fed_lps: interpolate(HUNTER_TANK_FED, units)?,
        flush_valve_lps: interpolate(HUNTER_FLUSH_VALVE, units)?,
    })
}
