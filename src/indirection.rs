// Pattern 5: Addresses and Pointer-to-Pointer
//
// `&T` is the address-of operator, `*r` is dereference. A `&&i32` is a
// reference to a reference: two dereferences reach the integer.

/// Address of the referent, for display only.
pub fn address_of<T>(value: &T) -> usize {
    value as *const T as usize
}

/// `0x`-prefixed hex form of [`address_of`].
pub fn format_address<T>(value: &T) -> String {
    format!("{:#x}", address_of(value))
}

pub fn read_twice_removed(pptr: &&i32) -> i32 {
    **pptr
}

pub fn write_twice_removed(pptr: &mut &mut i32, value: i32) {
    **pptr = value;
}
