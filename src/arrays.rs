// Pattern 4: Arrays Seen Through a Pointer
use crate::error::{DemoError, DemoResult};

/// Reads `*(base + offset)`, refusing offsets past the end of the array.
pub fn element_at(values: &[i32], offset: usize) -> DemoResult<i32> {
    values.get(offset).copied().ok_or(DemoError::OutOfBounds {
        index: offset,
        len: values.len(),
    })
}

/// Adds two integers reached only through references.
pub fn sum_through(a: &i32, b: &i32) -> DemoResult<i32> {
    a.checked_add(*b)
        .ok_or_else(|| DemoError::overflow(format!("{a} + {b}")))
}

/// True when `view` starts at the same address as `array`'s first element.
pub fn decays_to_first(array: &[i32], view: &i32) -> bool {
    array
        .first()
        .is_some_and(|first| std::ptr::eq(first, view))
}
