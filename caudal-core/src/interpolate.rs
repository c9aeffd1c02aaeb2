use crate::tables::HunterDataPoint;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("the demand table is empty")]
    EmptyTable,
}

/// Interpolate the probable flow rate for `x` fixture units from a demand
/// curve.
///
/// Queries outside the table range clamp to the first or last point. The
/// table must be sorted ascending by `units` with no duplicate abscissae;
/// this holds for the shipped tables and is not re-checked here.
pub fn interpolate(table: &[HunterDataPoint], x: f64) -> Result<f64, InterpolationError> {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(InterpolationError::EmptyTable),
    };

    if x <= first.units {
        return Ok(first.caudal);
    }
    if x >= last.units {
        return Ok(last.caudal);
    }

    for pts in table.windows(2) {
        let p1 = &pts[0];
        let p2 = &pts[1];

        // Exact knot hits skip the division at segment boundaries.
        if x == p1.units {
            return Ok(p1.caudal);
        }
        if x == p2.units {
            return Ok(p2.caudal);
        }

        if x > p1.units && x < p2.units {
            return Ok(p1.caudal + (x - p1.units) * (p2.caudal - p1.caudal) / (p2.units - p1.units));
        }
    }

    // Unreachable for a table sorted ascending by units; clamp rather than
    // fault if that precondition is ever violated.
    Ok(last.caudal)
}
