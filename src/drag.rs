//! Drag coefficient of a sphere as a function of Reynolds number.
//!
//! Low Mach number is assumed so wave drag is neglected. The curve follows
//! Chow, "Computational Aerodynamics".

/// Flow regime bands of the sphere drag curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRegime {
    /// Re <= 0, no flow
    Still,
    /// 0 < Re <= 1, Stokes flow
    Stokes,
    /// 1 < Re <= 400
    Intermediate,
    /// 400 < Re <= 3e5, Newton plateau
    Newton,
    /// 3e5 < Re <= 2e6, drag crisis recovery
    Critical,
    /// Re > 2e6
    Supercritical,
}

impl DragRegime {
    /// Classify a Reynolds number. Band edges belong to the lower band.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds <= 0.0 {
            DragRegime::Still
        } else if reynolds <= 1.0 {
            DragRegime::Stokes
        } else if reynolds <= 400.0 {
            DragRegime::Intermediate
        } else if reynolds <= 3e5 {
            DragRegime::Newton
        } else if reynolds <= 2e6 {
            DragRegime::Critical
        } else {
            DragRegime::Supercritical
        }
    }
}

/// Calculate the drag coefficient of a sphere
///
/// # Arguments
/// * `reynolds` - Reynolds number, computed upstream as ρ·v·d/μ
///
/// # Returns
/// Drag coefficient based on cross-section area
pub fn cd_sphere(reynolds: f64) -> f64 {
    match DragRegime::classify(reynolds) {
        DragRegime::Still => 0.0,
        DragRegime::Stokes => 24.0 / reynolds,
        DragRegime::Intermediate => 24.0 * reynolds.powf(-0.646),
        DragRegime::Newton => 0.5,
        DragRegime::Critical => 3.66e-4 * reynolds.powf(0.4275),
        DragRegime::Supercritical => 0.18,
    }
}
