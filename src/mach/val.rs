/// Stack and variable values. Integers and decimals never coerce
/// implicitly; every conversion is written out in `Operation`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i64),
    Decimal(f64),
}

impl Val {
    pub fn is_zero(&self) -> bool {
        match self {
            Val::Integer(n) => *n == 0,
            Val::Decimal(n) => *n == 0.0,
        }
    }
}

impl std::fmt::Display for Val {
    /// A whole-valued decimal renders as an integer, so `PRINT` of
    /// `5.0` emits `5`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Decimal(n) => {
                if n.is_finite()
                    && n.fract() == 0.0
                    && *n >= i64::min_value() as f64
                    && *n <= i64::max_value() as f64
                {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_decimal_prints_as_integer() {
        assert_eq!(Val::Decimal(5.0).to_string(), "5");
        assert_eq!(Val::Decimal(-3.0).to_string(), "-3");
        assert_eq!(Val::Decimal(2.5).to_string(), "2.5");
        assert_eq!(Val::Integer(42).to_string(), "42");
    }
}
