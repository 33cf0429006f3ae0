//! Rasterise a formula in `x` (and optionally `y`) into a PNG image.
//!
//! A formula in `x` alone is drawn as a blue curve `y = f(x)` on a white
//! canvas, and a formula mentioning `y` becomes a red-to-blue heatmap of
//! `z = f(x, y)`. Both variables range over \[0, 1).
//!
//! ```no_run
//! use plotpng::{plot_to_file, PlotConfig, PlotMode};
//!
//! let mode = plot_to_file("x^2", "parabola.png".as_ref(), &PlotConfig::default()).unwrap();
//! assert_eq!(mode, PlotMode::Curve);
//! ```

use std::path::Path;

use log::{debug, info};

pub mod cli;
pub mod error;
pub mod expr;
pub mod png;
pub mod raster;

pub use error::{PlotError, Result};
pub use expr::{Expression, ScalarField};
pub use raster::PixelBuffer;

/// Sizes above this may misbehave and produce a warning.
pub const RECOMMENDED_MAX_DIMENSION: u32 = 1400;

/// Canvas size and curve sampling density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Curve samples taken per pixel column.
    pub oversampling: u32,
}

impl PlotConfig {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "canvas must not be empty, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }

    pub fn with_oversampling(self, oversampling: u32) -> Result<Self> {
        if oversampling == 0 {
            return Err(PlotError::InvalidConfig(
                "oversampling must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            oversampling,
            ..self
        })
    }

    pub fn exceeds_recommended_size(&self) -> bool {
        self.width > RECOMMENDED_MAX_DIMENSION || self.height > RECOMMENDED_MAX_DIMENSION
    }

    fn validate(&self) -> Result<()> {
        Self::new(self.width, self.height)?.with_oversampling(self.oversampling)?;
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            oversampling: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// `y = f(x)` drawn as a line.
    Curve,
    /// `z = f(x, y)` drawn as a heatmap.
    Surface,
}

impl PlotMode {
    /// Pick the mode from the raw text: any `y` means a surface.
    ///
    /// This is a plain character test and deliberately ignores what the
    /// expression actually depends on.
    pub fn detect(expression: &str) -> Self {
        if expression.contains('y') {
            Self::Surface
        } else {
            Self::Curve
        }
    }
}

/// Compile `expression` and rasterise it into a new buffer.
pub fn render(expression: &str, config: &PlotConfig) -> Result<(PlotMode, PixelBuffer)> {
    config.validate()?;
    let compiled = Expression::compile(expression)?;
    let mode = PlotMode::detect(compiled.source());
    debug!("`{}` selects {:?}", compiled.source(), mode);
    let buffer = raster::rasterise(&compiled, mode, config)?;
    Ok((mode, buffer))
}

/// Render `expression` and write it to `path`.
///
/// The file is only opened once rendering has succeeded.
pub fn plot_to_file(expression: &str, path: &Path, config: &PlotConfig) -> Result<PlotMode> {
    let (mode, buffer) = render(expression, config)?;
    png::write_png(buffer, path)?;
    info!("plotted `{}` as {:?}", expression, mode);
    Ok(mode)
}
