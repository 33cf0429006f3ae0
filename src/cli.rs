use std::{fmt, path::PathBuf};

use clap::Parser;
use log::debug;

use crate::{error::Result, plot_to_file, PlotConfig, PlotError, PlotMode};

/// Plot a formula in x (curve) or in x and y (heatmap) to a PNG file.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct Cli {
    /// Output file, e.g. plot.png
    pub output: PathBuf,
    /// Formula in x, or in x and y, e.g. "x^2" or "sin(x*y)"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Non-fatal conditions reported before plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// `y` appears without `x`.
    MissingX,
    /// The canvas is larger than the recommended size.
    LargeCanvas,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::MissingX => write!(
                f,
                "Warning: No x variable provided in expression. Will assume expression is of the form f(x,y).\nUnivariable expression should be given in terms of x. e.g. \"y^2\" should be written \"x^2\", else it will be treated as \"0*x + y^2\"."
            ),
            Warning::LargeCanvas => write!(
                f,
                "Warning: Potential unexpected behaviour at dimensions greater than {}.",
                crate::RECOMMENDED_MAX_DIMENSION
            ),
        }
    }
}

impl Cli {
    /// Check the arguments before anything is computed.
    pub fn validate(&self, config: &PlotConfig) -> Result<Vec<Warning>> {
        if !self.output.to_string_lossy().contains(".png") {
            return Err(PlotError::MissingPngExtension);
        }
        if self.expression.contains('=') {
            return Err(PlotError::EquationSyntax);
        }

        let mut warnings = Vec::new();
        if self.expression.contains('y') && !self.expression.contains('x') {
            warnings.push(Warning::MissingX);
        }
        if config.exceeds_recommended_size() {
            warnings.push(Warning::LargeCanvas);
        }
        for warning in &warnings {
            debug!("{:?}", warning);
        }
        Ok(warnings)
    }

    /// Plot with `config`, handing each warning to `on_warning` first.
    pub fn run(&self, config: &PlotConfig, mut on_warning: impl FnMut(Warning)) -> Result<PlotMode> {
        for warning in self.validate(config)? {
            on_warning(warning);
        }
        plot_to_file(&self.expression, &self.output, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(output: &str, expression: &str) -> Cli {
        Cli::try_parse_from(["plotpng", output, expression]).unwrap()
    }

    #[test]
    fn test_parse() {
        let parsed = cli("out.png", "-x^2");
        assert_eq!(parsed.output, PathBuf::from("out.png"));
        assert_eq!(parsed.expression, "-x^2");
    }

    #[test]
    fn test_argument_count() {
        assert!(Cli::try_parse_from(["plotpng", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["plotpng", "out.png", "x", "y"]).is_err());
    }

    #[test]
    fn test_png_substring() {
        let config = PlotConfig::default();
        assert!(matches!(
            cli("out.jpg", "x").validate(&config),
            Err(PlotError::MissingPngExtension)
        ));
        assert!(cli("out.png", "x").validate(&config).is_ok());
        // substring test, not a suffix test
        assert!(cli("out.png.bak", "x").validate(&config).is_ok());
    }

    #[test]
    fn test_equation_rejected() {
        assert!(matches!(
            cli("out.png", "y=x^2").validate(&PlotConfig::default()),
            Err(PlotError::EquationSyntax)
        ));
    }

    #[test_log::test]
    fn test_warnings() {
        let config = PlotConfig::default();
        assert_eq!(cli("out.png", "x*y").validate(&config).unwrap(), vec![]);
        assert_eq!(
            cli("out.png", "y^2").validate(&config).unwrap(),
            vec![Warning::MissingX]
        );

        let large = PlotConfig::new(1500, 1500).unwrap();
        assert_eq!(
            cli("out.png", "y^2").validate(&large).unwrap(),
            vec![Warning::MissingX, Warning::LargeCanvas]
        );
    }

    #[test]
    fn test_run_reports_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("y.png");
        let parsed = cli(output.to_str().unwrap(), "y^2");

        let mut seen = Vec::new();
        let mode = parsed
            .run(&PlotConfig::default(), |warning| seen.push(warning))
            .unwrap();

        assert_eq!(mode, PlotMode::Surface);
        assert_eq!(seen, vec![Warning::MissingX]);
        assert!(output.exists());
    }

    #[test]
    fn test_run_usage_error_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("eq.png");
        let parsed = cli(output.to_str().unwrap(), "y=x");

        assert!(parsed.run(&PlotConfig::default(), |_| {}).is_err());
        assert!(!output.exists());
    }
}
