// Pattern 1: Call by Value vs Call by Reference
//
// A plain `i32` parameter is a copy: the callee can change it freely and the
// caller never sees the change. A `&mut i32` parameter points at the caller's
// storage, so writes through it land in the caller's variable.

use crate::error::{DemoError, DemoResult};

/// Value the "change" demos write into their argument.
pub const OVERWRITE_VALUE: i32 = 999;

/// Increments a private copy of `n`.
///
/// The return value is the callee-local result, handy for printing
/// "inside the function" state. The caller's variable is untouched.
/// The copy wraps at `i32::MAX`.
pub fn increment_by_value(mut n: i32) -> i32 {
    n = n.wrapping_add(1);
    log::debug!("increment_by_value: local copy is now {n}");
    n
}

/// Increments the caller's integer in place.
///
/// On overflow nothing is written and [`DemoError::Overflow`] is returned.
pub fn increment_by_reference(value: &mut i32) -> DemoResult<()> {
    let next = value
        .checked_add(1)
        .ok_or_else(|| DemoError::overflow(format!("increment of {value}")))?;
    *value = next;
    log::debug!("increment_by_reference: referent is now {next}");
    Ok(())
}

/// Overwrites a copy. The caller keeps its value.
pub fn change_by_value(mut x: i32) -> i32 {
    log::debug!("change_by_value: received a copy of {x}");
    x = OVERWRITE_VALUE;
    x
}

/// Overwrites the caller's integer.
pub fn change_by_reference(x: &mut i32) {
    *x = OVERWRITE_VALUE;
}

/// Stores `value` through the handle and hands back what the referent now holds.
pub fn assign_through(target: &mut i32, value: i32) -> i32 {
    *target = value;
    *target
}
