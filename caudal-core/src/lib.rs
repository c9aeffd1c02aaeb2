//! Hydraulic sizing calculations for building plumbing design.
//!
//! Three independent, stateless calculations over static reference tables:
//!
//! - probable flow rate from Hunter fixture units, by piecewise-linear
//!   interpolation over the tank-fed and flush-valve demand curves;
//! - minimum commercial pipe diameter for pressurized potable water, from
//!   the continuity equation and the SCH40 schedule;
//! - minimum commercial pipe diameter for gravity sanitary drainage, by
//!   iterating the Manning equation over partially filled circular sections.
//!
//! Every function is pure and deterministic; the tables are immutable
//! process-wide constants, so concurrent use needs no coordination. Expected
//! no-result outcomes (an empty table, no stocked pipe large enough) are
//! typed errors the caller turns into guidance, not faults.

pub mod drainage;
pub mod hunter;
pub mod interpolate;
pub mod potable;
pub mod tables;

pub use drainage::{manning_capacity, size_drainage, wetted_section, DrainageResult, DrainageSizingError, WettedSection};
pub use hunter::{probable_flow, ProbableFlow};
pub use interpolate::{interpolate, InterpolationError};
pub use potable::{size_potable_water, PotableSizingError, PotableWaterResult};
pub use tables::{
    HunterDataPoint, PotablePipe, HUNTER_FLUSH_VALVE, HUNTER_TANK_FED, POTABLE_SCHEDULE, SANITARY_DIAMETERS_MM,
};
