// aero-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, MassDensity as UomMassDensity, Pressure as UomPressure,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn to_rad(a: Angle) -> f64 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

/// Freestream dynamic pressure q = ½ρV².
pub fn dynamic_pressure(rho: Density, v: Velocity) -> Pressure {
    rho * v * v * 0.5
}

pub mod constants {
    /// Sea-level ISA air density (kg/m³)
    pub const RHO_SEA_LEVEL: f64 = 1.225;
}
