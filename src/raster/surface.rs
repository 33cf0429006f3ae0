use image::Rgb;
use log::debug;

use super::{PixelBuffer, BLACK};
use crate::expr::ScalarField;

/// Sampled values of an N×N surface, indexed by `(x_index, y_index)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    size: usize,
    values: Vec<f64>,
}

impl SampleGrid {
    /// Sample `field` at `(x_index / size, y_index / size)` for every cell.
    pub fn sample<F: ScalarField>(field: &F, size: usize) -> Self {
        let mut values = Vec::with_capacity(size * size);
        for x_index in 0..size {
            let x = x_index as f64 / size as f64;
            for y_index in 0..size {
                let y = y_index as f64 / size as f64;
                values.push(field.value_at(x, y));
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x_index: usize, y_index: usize) -> f64 {
        self.values[x_index * self.size + y_index]
    }

    /// Observed range of the finite samples, seeded from the first one.
    pub fn range(&self) -> Option<ValueRange> {
        let mut finite = self.values.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        Some(finite.fold(
            ValueRange {
                min: first,
                max: first,
            },
            |range, v| ValueRange {
                min: range.min.min(v),
                max: range.max.max(v),
            },
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }

    /// Position of `z` in the range, 0.5 everywhere for a flat range.
    pub fn normalise(&self, z: f64) -> f64 {
        if self.is_flat() {
            return 0.5;
        }
        let span = self.max - self.min;
        if span.is_finite() {
            (z - self.min) / span
        } else {
            // span overflows f64; halved operands keep it finite
            (z / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

/// Blue-to-red gradient: 0 is pure red, 1 is pure blue.
pub fn heat_colour(p: f64) -> Rgb<u8> {
    Rgb([(255.0 * (1.0 - p)) as u8, 0, (255.0 * p) as u8])
}

/// Plot `z = f(x, y)` over \[0, 1)² as a heatmap on an N×N canvas.
///
/// x grows upwards and y grows to the right. Non-finite samples are black.
pub fn rasterise_surface<F: ScalarField>(field: &F, size: u32) -> PixelBuffer {
    let grid = SampleGrid::sample(field, size as usize);
    let n = grid.size();
    let mut buffer = PixelBuffer::new(size, size, BLACK);

    let Some(range) = grid.range() else {
        debug!("surface: no finite samples");
        return buffer;
    };
    debug!(
        "surface: range [{}, {}]{}",
        range.min,
        range.max,
        if range.is_flat() { " (flat)" } else { "" }
    );

    for x_index in 0..n {
        for y_index in 0..n {
            let z = grid.get(x_index, y_index);
            if !z.is_finite() {
                continue;
            }
            buffer.put(n - 1 - x_index, y_index, heat_colour(range.normalise(z)));
        }
    }

    buffer
}
