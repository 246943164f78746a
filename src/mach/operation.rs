use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison rules
///
/// Integer/integer stays integer with overflow checked; a decimal on
/// either side promotes the operation to decimal. Division truncates
/// toward zero and the sign of a modulo result follows the divisor.
/// These rules are written out here instead of leaning on whatever the
/// host operators happen to do.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            Decimal(n) => Ok(Decimal(-n)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Decimal(decimal(l) + decimal(r))),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Decimal(decimal(l) - decimal(r))),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Decimal(decimal(l) * decimal(r))),
        }
    }

    /// Truncated-toward-zero quotient, always an integer.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if rhs.is_zero() {
            return Err(error!(DivisionByZero; "Divisão por zero"));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => {
                let quotient = (decimal(l) / decimal(r)).trunc();
                if quotient >= i64::min_value() as f64 && quotient <= i64::max_value() as f64 {
                    Ok(Integer(quotient as i64))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    /// Remainder whose sign follows the divisor, not the dividend.
    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if rhs.is_zero() {
            return Err(error!(DivisionByZero; "Módulo por zero"));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_rem(r) {
                Some(rem) => {
                    if rem != 0 && (rem < 0) != (r < 0) {
                        Ok(Integer(rem + r))
                    } else {
                        Ok(Integer(rem))
                    }
                }
                None => Err(error!(Overflow)),
            },
            (l, r) => {
                let (l, r) = (decimal(l), decimal(r));
                let rem = l % r;
                if rem != 0.0 && (rem < 0.0) != (r < 0.0) {
                    Ok(Decimal(rem + r))
                } else {
                    Ok(Decimal(rem))
                }
            }
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(equal_bool(lhs, rhs)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(!equal_bool(lhs, rhs)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(less_bool(lhs, rhs)))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(less_bool(rhs, lhs)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(!less_bool(rhs, lhs)))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(flag(!less_bool(lhs, rhs)))
    }
}

fn decimal(val: Val) -> f64 {
    match val {
        Val::Integer(n) => n as f64,
        Val::Decimal(n) => n,
    }
}

/// Comparisons push integer 1 for true, 0 for false.
fn flag(b: bool) -> Val {
    if b {
        Val::Integer(1)
    } else {
        Val::Integer(0)
    }
}

fn equal_bool(lhs: Val, rhs: Val) -> bool {
    use Val::*;
    match (lhs, rhs) {
        (Integer(l), Integer(r)) => l == r,
        (l, r) => decimal(l) == decimal(r),
    }
}

fn less_bool(lhs: Val, rhs: Val) -> bool {
    use Val::*;
    match (lhs, rhs) {
        (Integer(l), Integer(r)) => l < r,
        (l, r) => decimal(l) < decimal(r),
    }
}
