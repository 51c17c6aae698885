use std::f64::consts::PI;

pub use crate::utils::consts::TABLE_SIZE;

/// One full sine period sampled at `size` evenly spaced phases.
///
/// Element `i` is `sin(2π·i / size)`. A zero size yields an empty table.
pub fn generate_table(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let phase = i as f64 / size as f64;
            (2.0 * PI * phase).sin()
        })
        .collect()
}
