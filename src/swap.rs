// Pattern 2: Swapping Through References
use crate::error::{DemoError, DemoResult};

/// Exchanges the values behind two handles using a temporary.
///
/// Two `&mut` to the same storage cannot exist at once, so the aliased
/// call is rejected before the program ever runs:
///
/// ```compile_fail
/// let mut x = 5;
/// pointer_concepts::swap::swap(&mut x, &mut x);
/// ```
pub fn swap<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// Index-based swap, where both positions may name the same slot.
///
/// `i == j` leaves the slice as it was. Nothing is written when either
/// index is out of range.
pub fn swap_slots<T>(slots: &mut [T], i: usize, j: usize) -> DemoResult<()> {
    let len = slots.len();
    for index in [i, j] {
        if index >= len {
            return Err(DemoError::OutOfBounds { index, len });
        }
    }
    if i == j {
        log::debug!("swap_slots: self-swap at {i}, nothing to do");
        return Ok(());
    }

    let (low, high) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = slots.split_at_mut(high);
    swap(&mut head[low], &mut tail[0]);
    Ok(())
}
