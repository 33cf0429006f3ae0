use std::fmt;

use log::debug;
use meval::Expr;

use crate::error::Result;

/// A real-valued function of the plotting domain.
pub trait ScalarField {
    fn value_at(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> ScalarField for F {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A formula compiled against the variables `x` and `y`.
pub struct Expression {
    source: String,
    func: Box<dyn Fn(f64, f64) -> f64>,
}

impl Expression {
    /// Parse `source` and bind its variables.
    ///
    /// Any identifier other than `x`, `y` or a built-in constant or function
    /// makes compilation fail.
    pub fn compile(source: &str) -> Result<Self> {
        let expr: Expr = source.parse()?;
        let func = expr.bind2("x", "y")?;
        debug!("compiled expression `{}`", source);

        Ok(Self {
            source: source.to_string(),
            func: Box::new(func),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ScalarField for Expression {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        (self.func)(x, y)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Expression")
            .field("source", &self.source)
            .finish()
    }
}
