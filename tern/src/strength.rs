//! Constraint strength arithmetic.
//!
//! A strength is a plain `f64` packed from three bands: strong (millions),
//! medium (thousands), and weak (units). Each band saturates at 1000, so
//! no amount of weak constraints can outweigh a single medium one.

/// Combine strong, medium, and weak components into a single strength.
///
/// Each component is scaled by `weight` and clamped to `[0, 1000]` before
/// being packed into its band.
pub fn create(strong: f64, medium: f64, weak: f64, weight: f64) -> f64 {
    let mut result = 0.0;
    result += (strong * weight).clamp(0.0, 1000.0) * 1_000_000.0;
    result += (medium * weight).clamp(0.0, 1000.0) * 1_000.0;
    result += (weak * weight).clamp(0.0, 1000.0);
    result
}

/// Clip a strength into the representable range `[0, REQUIRED]`.
pub fn clip(value: f64) -> f64 {
    value.clamp(0.0, REQUIRED)
}

/// The strength of a constraint the solver may never violate;
/// `create(1000.0, 1000.0, 1000.0, 1.0)`.
pub const REQUIRED: f64 = 1_001_001_000.0;

/// A strongly preferred constraint; `create(1.0, 0.0, 0.0, 1.0)`.
pub const STRONG: f64 = 1_000_000.0;

/// A moderately preferred constraint; `create(0.0, 1.0, 0.0, 1.0)`.
pub const MEDIUM: f64 = 1_000.0;

/// A weakly preferred constraint; `create(0.0, 0.0, 1.0, 1.0)`.
pub const WEAK: f64 = 1.0;
