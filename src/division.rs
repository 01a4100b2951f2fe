// Pattern 3: Multiple Results Through Output Parameters
use crate::error::{DemoError, DemoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub quotient: i32,
    pub remainder: i32,
}

/// Truncating quotient and remainder of `a / b`.
pub fn div_rem(a: i32, b: i32) -> DemoResult<Division> {
    if b == 0 {
        log::warn!("rejected division of {a} by zero");
        return Err(DemoError::DivisionByZero { dividend: a });
    }
    let quotient = a
        .checked_div(b)
        .ok_or_else(|| DemoError::overflow(format!("{a} / {b}")))?;
    let remainder = a
        .checked_rem(b)
        .ok_or_else(|| DemoError::overflow(format!("{a} % {b}")))?;

    Ok(Division {
        quotient,
        remainder,
    })
}

/// Writes `a / b` into `quotient` and `a % b` into `remainder`.
///
/// Both outputs are left untouched when an error is returned.
pub fn divide(a: i32, b: i32, quotient: &mut i32, remainder: &mut i32) -> DemoResult<()> {
    let Division {
        quotient: q,
        remainder: r,
    } = div_rem(a, b)?;
    *quotient = q;
    *remainder = r;
    Ok(())
}
