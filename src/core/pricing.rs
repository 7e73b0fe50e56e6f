//! Escalating shop prices.

/// Returns the cost of the next copy of an upgrade given how many are
/// already owned.
///
/// The growth factor itself creeps up with `owned`, and a quadratic
/// accelerator is layered on top, so late copies get expensive fast.
/// Strictly increasing in `owned` for a fixed base, and increasing in
/// `base` for a fixed count.
pub fn price_of(base: f64, owned: u32) -> u64 {
    let owned_f = owned as f64;
    let growth = 1.18 + 0.015 * owned_f;
    let accel = 1.0 + 0.05 * owned_f + 0.0015 * owned_f * owned_f;
    (base * growth.powi(owned as i32) * accel).ceil() as u64
}
