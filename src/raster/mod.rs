use image::{Rgb, RgbImage};
use log::info;

use crate::{error::Result, expr::ScalarField, PlotConfig, PlotError, PlotMode};

pub mod curve;
pub mod surface;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Rows of RGB pixels, row 0 being the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rows: Vec<Vec<Rgb<u8>>>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Rgb<u8>) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![fill; width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Panics if `row` or `column` is outside the buffer.
    pub fn get(&self, row: usize, column: usize) -> Rgb<u8> {
        self.rows[row][column]
    }

    /// Panics if `row` or `column` is outside the buffer.
    pub fn put(&mut self, row: usize, column: usize, colour: Rgb<u8>) {
        self.rows[row][column] = colour;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb<u8>]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn pixels(&self) -> impl Iterator<Item = &Rgb<u8>> {
        self.rows.iter().flatten()
    }

    pub fn into_image(self) -> RgbImage {
        let mut image_buf = RgbImage::new(self.width, self.height);
        for (iy, row) in self.rows.into_iter().enumerate() {
            for (ix, colour) in row.into_iter().enumerate() {
                image_buf.put_pixel(ix as u32, iy as u32, colour);
            }
        }
        image_buf
    }
}

/// Fill a buffer of the configured size by sampling `field` in `mode`.
///
/// The dimension check happens before the field is sampled.
pub fn rasterise<F: ScalarField>(
    field: &F,
    mode: PlotMode,
    config: &PlotConfig,
) -> Result<PixelBuffer> {
    config.validate()?;
    info!(
        "rasterising {:?} plot at {}x{}",
        mode, config.width, config.height
    );
    match mode {
        PlotMode::Curve => Ok(curve::rasterise_curve(
            field,
            config.width,
            config.height,
            config.oversampling,
        )),
        PlotMode::Surface => {
            if config.width != config.height {
                return Err(PlotError::Dimension {
                    width: config.width,
                    height: config.height,
                });
            }
            Ok(surface::rasterise_surface(field, config.width))
        }
    }
}
