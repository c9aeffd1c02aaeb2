//! Static reference tables consumed by the sizing calculations.
//!
//! All tables are process-wide constants, sorted ascending on their lookup
//! key, and never mutated.

use serde::Serialize;

/// A point on a probable-demand curve: Hunter fixture units against the
/// probable flow rate (caudal) in l/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HunterDataPoint {
    /// Hunter fixture-unit count.
    pub units: f64,
    /// Probable flow rate in l/s.
    pub caudal: f64,
}

/// A commercial pipe size for pressurized potable water.
///
/// `id_mm` is the effective hydraulic diameter; `nominal_mm` is a label only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PotablePipe {
    /// Trade designation, e.g. `1/2"`.
    pub nominal: &'static str,
    /// Nominal diameter [mm].
    pub nominal_mm: f64,
    /// Internal diameter [mm].
    pub id_mm: f64,
}

/// Probable-demand curve for tank-fed fixtures (Hunter method, RNE IS.010
/// annex tabulation). Strictly increasing in `units`.
pub const HUNTER_TANK_FED: &[HunterDataPoint] = &[
    HunterDataPoint { units: 10.0, caudal: 0.34 },
    HunterDataPoint { units: 20.0, caudal: 0.54 },
    HunterDataPoint { units: 30.0, caudal: 0.75 },
    HunterDataPoint { units: 40.0, caudal: 0.91 },
    HunterDataPoint { units: 50.0, caudal: 1.13 },
    HunterDataPoint { units: 75.0, caudal: 1.41 },
    HunterDataPoint { units: 100.0, caudal: 1.67 },
    HunterDataPoint { units: 150.0, caudal: 2.06 },
    HunterDataPoint { units: 200.0, caudal: 2.45 },
    HunterDataPoint { units: 300.0, caudal: 2.85 },
    HunterDataPoint { units: 500.0, caudal: 4.01 },
    HunterDataPoint { units: 1000.0, caudal: 6.88 },
];

/// Probable-demand curve for flush-valve (fluxómetro) fixtures.
pub const HUNTER_FLUSH_VALVE: &[HunterDataPoint] = &[
    HunterDataPoint { units: 10.0, caudal: 1.06 },
    HunterDataPoint { units: 20.0, caudal: 1.33 },
    HunterDataPoint { units: 30.0, caudal: 1.55 },
    HunterDataPoint { units: 40.0, caudal: 1.74 },
    HunterDataPoint { units: 50.0, caudal: 1.97 },
    HunterDataPoint { units: 75.0, caudal: 2.29 },
    HunterDataPoint { units: 100.0, caudal: 2.55 },
    HunterDataPoint { units: 150.0, caudal: 2.95 },
    HunterDataPoint { units: 200.0, caudal: 3.36 },
    HunterDataPoint { units: 300.0, caudal: 3.65 },
    HunterDataPoint { units: 500.0, caudal: 4.60 },
    HunterDataPoint { units: 1000.0, caudal: 7.34 },
];

/// Commercial schedule for pressurized potable water (PVC SCH40), ascending
/// by internal diameter.
pub const POTABLE_SCHEDULE: &[PotablePipe] = &[
    PotablePipe { nominal: "1/2\"", nominal_mm: 15.0, id_mm: 15.7 },
    PotablePipe { nominal: "3/4\"", nominal_mm: 20.0, id_mm: 20.9 },
    PotablePipe { nominal: "1\"", nominal_mm: 25.0, id_mm: 26.6 },
    PotablePipe { nominal: "1 1/4\"", nominal_mm: 32.0, id_mm: 35.0 },
    PotablePipe { nominal: "1 1/2\"", nominal_mm: 40.0, id_mm: 40.8 },
    PotablePipe { nominal: "2\"", nominal_mm: 50.0, id_mm: 52.4 },
    PotablePipe { nominal: "2 1/2\"", nominal_mm: 65.0, id_mm: 62.6 },
    PotablePipe { nominal: "3\"", nominal_mm: 80.0, id_mm: 77.9 },
    PotablePipe { nominal: "4\"", nominal_mm: 100.0, id_mm: 102.2 },
];

/// Stocked diameters for gravity sanitary drainage (PVC sanitario) [mm].
pub const SANITARY_DIAMETERS_MM: &[f64] = &[40.0, 50.0, 75.0, 110.0, 160.0, 200.0];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strictly_increasing_units(table: &[HunterDataPoint]) {
        for pts in table.windows(2) {
            assert!(
                pts[0].units < pts[1].units,
                "units {} and {} are not strictly increasing",
                pts[0].units,
                pts[1].units
            );
        }
    }

    #[test]
    fn test_hunter_tables_sorted() {
        assert_strictly_increasing_units(HUNTER_TANK_FED);
        assert_strictly_increasing_units(HUNTER_FLUSH_VALVE);
    }

    #[test]
    fn test_hunter_tables_monotonic_caudal() {
        for table in [HUNTER_TANK_FED, HUNTER_FLUSH_VALVE] {
            assert!(table.iter().all(|p| p.caudal >= 0.0));
            for pts in table.windows(2) {
                assert!(pts[0].caudal <= pts[1].caudal);
            }
        }
    }

    #[test]
    fn test_flush_valve_demand_exceeds_tank_fed() {
        // A flush-valve system always draws more than a tank-fed one for the
        // same fixture count.
        for (tank, flush) in HUNTER_TANK_FED.iter().zip(HUNTER_FLUSH_VALVE) {
            assert_eq!(tank.units, flush.units);
            assert!(flush.caudal > tank.caudal);
        }
    }

    #[test]
    fn test_potable_schedule_ascending() {
        for pipes in POTABLE_SCHEDULE.windows(2) {
            assert!(pipes[0].id_mm < pipes[1].id_mm);
            assert!(pipes[0].nominal_mm < pipes[1].nominal_mm);
        }
    }

    #[test]
    fn test_sanitary_diameters_ascending() {
        for d in SANITARY_DIAMETERS_MM.windows(2) {
            assert!(d[0] < d[1]);
        }
    }
}
