use std::path::PathBuf;

/// Errors raised while validating, rasterising or encoding a plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// The output path does not name a PNG file.
    #[error(
        "Error: Invalid file name given as output path.\nValid file names require the \".png\" extension.\ne.g. \"file.png\" rather than \"file\""
    )]
    MissingPngExtension,

    /// The expression was written as an equation.
    #[error(
        "Error: Invalid expression given.\nExpressions of the form y=f(x) or z=f(x,y) should be written f(x) or f(x,y) respectively.\ne.g. to plot y=x^2, provide \"x^2\" as the expression."
    )]
    EquationSyntax,

    /// The evaluator rejected the expression.
    #[error(
        "Fatal error: Failed to compile math expression ({0}).\n\nExpressions should be written in terms of x and y only.\nx should be used for univariable expressions, or both x and y for multivariate expressions.\ne.g. \"k^2\" is invalid, and should be written \"x^2\"."
    )]
    Compile(#[from] meval::Error),

    /// Surface plots need a square canvas.
    #[error(
        "Error: Invalid dimensions {width}x{height}.\n\nExpressions of the form f(x,y) can only be written to PNG files with square dimension.\ne.g. 200x300 is invalid, but 300x300 or 200x200 are valid."
    )]
    Dimension { width: u32, height: u32 },

    /// A file could not be opened.
    #[error("File {} could not be opened for writing: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an opened output file failed.
    #[error("Failed while writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder or decoder failed.
    #[error("PNG codec error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
