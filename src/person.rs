// Pattern 6: Structures Mutated Through a Reference
use std::fmt;

use crate::error::{DemoError, DemoResult};

/// Storage for a name, terminator included.
pub const NAME_CAPACITY: usize = 20;

/// A name that fits in [`NAME_CAPACITY`] bytes with room for a terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedName {
    bytes: [u8; NAME_CAPACITY],
    len: usize,
}

impl FixedName {
    pub fn new(name: &str) -> DemoResult<Self> {
        if name.len() >= NAME_CAPACITY {
            return Err(DemoError::invalid_input(
                name,
                format!("names hold at most {} bytes", NAME_CAPACITY - 1),
            ));
        }
        if name.contains('\0') {
            return Err(DemoError::invalid_input(name, "names cannot contain NUL"));
        }

        let mut bytes = [0u8; NAME_CAPACITY];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(FixedName {
            bytes,
            len: name.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        // Built from a &str, so the prefix is valid UTF-8.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl fmt::Display for FixedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub age: u32,
    pub name: FixedName,
}

impl Person {
    pub fn new(age: u32, name: &str) -> DemoResult<Self> {
        Ok(Person {
            age,
            name: FixedName::new(name)?,
        })
    }
}

/// Changes the age of whichever record `person` points at.
pub fn set_age(person: &mut Person, age: u32) {
    log::debug!("{}: age {} -> {age}", person.name, person.age);
    person.age = age;
}
