use log::debug;

use super::{PixelBuffer, BLUE, WHITE};
use crate::expr::ScalarField;

/// Plot `y = f(x)` for x in \[0, 1) as blue pixels on a white canvas.
///
/// x is sampled `width * oversampling` times so neighbouring columns stay
/// connected. Results outside \[0, 1), including NaN, are dropped.
pub fn rasterise_curve<F: ScalarField>(
    field: &F,
    width: u32,
    height: u32,
    oversampling: u32,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height, WHITE);
    let samples = width as u64 * oversampling as u64;
    let last_row = height as usize - 1;
    let last_column = width as usize - 1;

    let mut plotted = 0usize;
    for k in 0..samples {
        let x = k as f64 / samples as f64;
        let result = field.value_at(x, 0.0);
        if !(0.0..1.0).contains(&result) {
            continue;
        }

        let column = ((x * width as f64).floor() as usize).min(last_column);
        let pixel_y = ((result * height as f64).floor() as usize).min(last_row);
        buffer.put(last_row - pixel_y, column, BLUE);
        plotted += 1;
    }

    debug!("curve: {} of {} samples on canvas", plotted, samples);
    buffer
}
