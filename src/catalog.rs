//! The menu of pointer-concept demonstrations.
//!
//! Each [`Selection`] maps to one routine that writes a short before/after
//! report into any [`Write`] sink.

use std::fmt;
use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::arrays::{decays_to_first, element_at};
use crate::buffer::{HeapArena, HeapBuffer};
use crate::division::divide;
use crate::error::{DemoError, DemoResult};
use crate::indirection::{format_address, read_twice_removed};
use crate::mutation::{assign_through, change_by_reference, change_by_value};
use crate::person::{set_age, Person};
use crate::style::Style;
use crate::swap::swap;

// =============================================================================
// Selector
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Exit,
    VariableVsPointer,
    Operators,
    Dereferencing,
    DynamicMemory,
    CallByValue,
    CallByReference,
    Swap,
    MultipleReturns,
    ArraysAndPointers,
    PointerRisks,
    Structures,
    PointerToPointer,
}

type DemoFn = fn(&mut dyn Write, &Style) -> DemoResult<()>;

impl Selection {
    const ALL: [Selection; 13] = [
        Selection::Exit,
        Selection::VariableVsPointer,
        Selection::Operators,
        Selection::Dereferencing,
        Selection::DynamicMemory,
        Selection::CallByValue,
        Selection::CallByReference,
        Selection::Swap,
        Selection::MultipleReturns,
        Selection::ArraysAndPointers,
        Selection::PointerRisks,
        Selection::Structures,
        Selection::PointerToPointer,
    ];

    /// Demonstrations in menu order, `Exit` excluded.
    pub fn demos() -> impl Iterator<Item = Selection> {
        Self::ALL.into_iter().skip(1)
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number)).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Parses one line of menu input.
    pub fn parse(input: &str) -> DemoResult<Self> {
        let trimmed = input.trim();
        let number: u8 = trimmed
            .parse()
            .map_err(|_| DemoError::invalid_input(trimmed, "expected a number from 0 to 12"))?;
        Self::from_number(number)
            .ok_or_else(|| DemoError::invalid_input(trimmed, "no such menu entry"))
    }

    pub fn title(self) -> &'static str {
        match self {
            Selection::Exit => "Exit",
            Selection::VariableVsPointer => "Normal Variable vs Pointer",
            Selection::Operators => "& and * Operators",
            Selection::Dereferencing => "Dereferencing",
            Selection::DynamicMemory => "Dynamic Memory",
            Selection::CallByValue => "Call by Value",
            Selection::CallByReference => "Call by Reference",
            Selection::Swap => "Swap Function",
            Selection::MultipleReturns => "Multiple Returns",
            Selection::ArraysAndPointers => "Arrays and Pointers",
            Selection::PointerRisks => "Pointer Risks",
            Selection::Structures => "Structures",
            Selection::PointerToPointer => "Pointer to Pointer",
        }
    }

    /// Heading printed above a demo's report; the menu uses [`Self::title`].
    pub fn heading(self) -> &'static str {
        match self {
            Selection::DynamicMemory => "Dynamic Memory Allocation",
            Selection::MultipleReturns => "Multiple Return Values",
            Selection::Structures => "Structures with Pointers",
            other => other.title(),
        }
    }

    fn routine(self) -> Option<DemoFn> {
        let demo: DemoFn = match self {
            Selection::Exit => return None,
            Selection::VariableVsPointer => variable_vs_pointer,
            Selection::Operators => operators,
            Selection::Dereferencing => dereferencing,
            Selection::DynamicMemory => dynamic_memory,
            Selection::CallByValue => call_by_value,
            Selection::CallByReference => call_by_reference,
            Selection::Swap => swap_function,
            Selection::MultipleReturns => multiple_returns,
            Selection::ArraysAndPointers => arrays_and_pointers,
            Selection::PointerRisks => pointer_risks,
            Selection::Structures => structures,
            Selection::PointerToPointer => pointer_to_pointer,
        };
        Some(demo)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Writes the numbered menu, `0. Exit` last.
pub fn render_menu(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    writeln!(out, "\n{}", style.banner("POINTER CONCEPTS"))?;
    for selection in Selection::demos() {
        writeln!(out, "{selection}")?;
    }
    writeln!(out, "{}", Selection::Exit)?;
    Ok(())
}

/// Runs the routine behind `selection`. `Exit` writes nothing.
pub fn run(selection: Selection, out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let Some(demo) = selection.routine() else {
        return Ok(());
    };
    log::debug!("running demo {selection}");
    writeln!(out, "\n{}", style.heading(selection.heading()))?;
    demo(out, style)?;
    writeln!(out)?;
    Ok(())
}

/// Menu loop: prompt, read a line, dispatch. Ends on `0` or end of input.
///
/// Invalid selections are reported and the menu is shown again. Returns the
/// number of demos that ran.
pub fn session(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    style: &Style,
    pause: bool,
) -> DemoResult<usize> {
    let mut ran = 0;
    let mut line = String::new();
    loop {
        render_menu(out, style)?;
        write!(out, "Choice: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let selection = match Selection::parse(&line) {
            Ok(Selection::Exit) => break,
            Ok(selection) => selection,
            Err(err) => {
                log::warn!("{err}");
                writeln!(out, "{}", style.error("Invalid choice"))?;
                continue;
            }
        };

        run(selection, out, style)?;
        ran += 1;

        if pause {
            write!(out, "Press ENTER...")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
        }
    }
    Ok(ran)
}

// =============================================================================
// Demonstrations
// =============================================================================

fn variable_vs_pointer(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    let x = 25;
    let ptr = &x;

    writeln!(out, "Variable x = {x}")?;
    writeln!(out, "Address of x = {}", format_address(&x))?;
    writeln!(out, "Pointer ptr = {}", format_address(ptr))?;
    writeln!(out, "Value via *ptr = {}", *ptr)?;
    Ok(())
}

fn operators(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    let num = 50;
    let p = &num;

    writeln!(out, "& operator: &num = {}", format_address(&num))?;
    writeln!(out, "* operator: *p = {}", *p)?;
    Ok(())
}

fn dereferencing(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut val = 100;
    writeln!(out, "Before: val = {val}")?;
    let ptr = &mut val;
    assign_through(ptr, 200);
    writeln!(out, "After *ptr = 200: val = {}", style.changed(&val.to_string()))?;
    Ok(())
}

fn dynamic_memory(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut buffer = HeapBuffer::allocate(3)?;
    buffer.fill_from(&[10, 20, 30])?;
    writeln!(out, "Array: {}", buffer.values()?.iter().join(" "))?;
    let freed = buffer.release();
    writeln!(out, "Memory freed ({freed} slots)")?;

    let mut arena = HeapArena::new();
    let id = arena.allocate(3)?;
    arena.write(id, 0, 10)?;
    arena.release(id)?;
    match arena.read(id, 0) {
        Ok(stale) => writeln!(out, "Read after free returned {stale}")?,
        Err(err) => writeln!(out, "Read after free rejected: {}", style.error(&err.to_string()))?,
    }
    Ok(())
}

fn call_by_value(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let num = 10;
    writeln!(out, "Before: num = {num}")?;
    change_by_value(num);
    writeln!(out, "After: num = {num} {}", style.unchanged("(unchanged)"))?;
    Ok(())
}

fn call_by_reference(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut num = 10;
    writeln!(out, "Before: num = {num}")?;
    change_by_reference(&mut num);
    writeln!(out, "After: num = {num} {}", style.changed("(changed)"))?;
    Ok(())
}

fn swap_function(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    let (mut x, mut y) = (5, 10);
    writeln!(out, "Before: x = {x}, y = {y}")?;
    swap(&mut x, &mut y);
    writeln!(out, "After: x = {x}, y = {y}")?;
    Ok(())
}

fn multiple_returns(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let (mut quotient, mut remainder) = (0, 0);
    divide(17, 5, &mut quotient, &mut remainder)?;
    writeln!(out, "17 / 5 = {quotient} remainder {remainder}")?;

    if let Err(err) = divide(17, 0, &mut quotient, &mut remainder) {
        writeln!(out, "17 / 0 rejected: {}", style.error(&err.to_string()))?;
    }
    Ok(())
}

fn arrays_and_pointers(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    let arr = [1, 2, 3, 4, 5];
    let ptr = &arr[..];

    writeln!(out, "arr[0] = {}, *ptr = {}", arr[0], element_at(ptr, 0)?)?;
    writeln!(out, "arr[2] = {}, *(ptr+2) = {}", arr[2], element_at(ptr, 2)?)?;
    writeln!(out, "ptr starts at arr[0]: {}", decays_to_first(&arr, &ptr[0]))?;
    if let Err(err) = element_at(ptr, arr.len()) {
        writeln!(out, "*(ptr+{}) rejected: {err}", arr.len())?;
    }
    Ok(())
}

fn pointer_risks(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    writeln!(out, "1. NULL Pointer: absence is an Option, never a null reference")?;
    writeln!(out, "2. Memory Leak: owned buffers are released when dropped")?;
    writeln!(out, "3. Dangling: a released buffer cannot be used again")?;
    writeln!(out, "4. Uninitialized: reading an unwritten slot is an error")?;

    let buffer = HeapBuffer::allocate(1)?;
    if let Err(err) = buffer.read(0) {
        writeln!(out, "   e.g. {err}")?;
    }
    Ok(())
}

fn structures(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut p = Person::new(25, "Alice")?;
    let ptr = &mut p;

    writeln!(out, "Name: {}, Age: {}", ptr.name, ptr.age)?;
    set_age(ptr, 26);
    writeln!(out, "Updated Age: {}", style.changed(&p.age.to_string()))?;
    Ok(())
}

fn pointer_to_pointer(out: &mut dyn Write, _style: &Style) -> DemoResult<()> {
    let x = 100;
    let ptr = &x;
    let pptr = &ptr;

    writeln!(out, "x = {x}")?;
    writeln!(out, "*ptr = {}", *ptr)?;
    writeln!(out, "**pptr = {}", read_twice_removed(pptr))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(selection: Selection) -> String {
        let mut out = Vec::new();
        run(selection, &mut out, &Style::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_valid_selections() {
        assert_eq!(Selection::parse("0").unwrap(), Selection::Exit);
        assert_eq!(Selection::parse(" 7\n").unwrap(), Selection::Swap);
        assert_eq!(Selection::parse("12").unwrap(), Selection::PointerToPointer);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["13", "-1", "abc", "", "3.5"] {
            assert!(
                matches!(Selection::parse(input), Err(DemoError::InvalidInput { .. })),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_numbers_round_trip_in_menu_order() {
        for (expected, selection) in Selection::demos().enumerate() {
            assert_eq!(usize::from(selection.number()), expected + 1);
            assert_eq!(Selection::from_number(selection.number()), Some(selection));
        }
        assert_eq!(Selection::demos().count(), 12);
    }

    #[test]
    fn test_render_menu() {
        let mut out = Vec::new();
        render_menu(&mut out, &Style::plain()).unwrap();
        let menu = String::from_utf8(out).unwrap();
        assert!(menu.contains("=== POINTER CONCEPTS ==="));
        assert!(menu.contains("1. Normal Variable vs Pointer"));
        assert!(menu.contains("12. Pointer to Pointer"));
        assert!(menu.trim_end().ends_with("0. Exit"));
    }

    #[test]
    fn test_exit_writes_nothing() {
        assert!(report(Selection::Exit).is_empty());
    }

    #[test]
    fn test_every_demo_runs() {
        for selection in Selection::demos() {
            let text = report(selection);
            let heading = format!("--- {} ---", selection.heading());
            assert!(text.contains(&heading), "{selection} missing heading");
        }
    }

    #[test]
    fn test_call_by_value_and_reference_reports() {
        assert!(report(Selection::CallByValue).contains("After: num = 10 (unchanged)"));
        assert!(report(Selection::CallByReference).contains("After: num = 999 (changed)"));
    }

    #[test]
    fn test_report_headings_differ_from_menu_titles() {
        assert!(report(Selection::DynamicMemory).contains("--- Dynamic Memory Allocation ---"));
        assert!(report(Selection::MultipleReturns).contains("--- Multiple Return Values ---"));
        assert!(report(Selection::Structures).contains("--- Structures with Pointers ---"));
        assert!(report(Selection::Swap).contains("--- Swap Function ---"));
        assert_eq!(Selection::Structures.title(), "Structures");
    }

    #[test]
    fn test_swap_report() {
        let text = report(Selection::Swap);
        assert!(text.contains("Before: x = 5, y = 10"));
        assert!(text.contains("After: x = 10, y = 5"));
    }

    #[test]
    fn test_multiple_returns_report() {
        let text = report(Selection::MultipleReturns);
        assert!(text.contains("17 / 5 = 3 remainder 2"));
        assert!(text.contains("17 / 0 rejected"));
    }

    #[test]
    fn test_dynamic_memory_report() {
        let text = report(Selection::DynamicMemory);
        assert!(text.contains("Array: 10 20 30"));
        assert!(text.contains("Memory freed (3 slots)"));
        assert!(text.contains("Read after free rejected"));
    }

    #[test]
    fn test_structures_report() {
        let text = report(Selection::Structures);
        assert!(text.contains("Name: Alice, Age: 25"));
        assert!(text.contains("Updated Age: 26"));
    }

    #[test]
    fn test_session_runs_until_exit() {
        let mut input = "7\n\n99\nabc\n8\n\n0\n".as_bytes();
        let mut out = Vec::new();
        let ran = session(&mut input, &mut out, &Style::plain(), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(ran, 2);
        assert_eq!(text.matches("Invalid choice").count(), 2);
        assert!(text.contains("After: x = 10, y = 5"));
        assert!(text.contains("17 / 5 = 3 remainder 2"));
        assert_eq!(text.matches("Press ENTER...").count(), 2);
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let mut input = "11\n".as_bytes();
        let mut out = Vec::new();
        let ran = session(&mut input, &mut out, &Style::plain(), false).unwrap();
        assert_eq!(ran, 1);
        assert!(String::from_utf8(out).unwrap().contains("Updated Age: 26"));
    }

    #[test]
    fn test_pointer_to_pointer_report() {
        let text = report(Selection::PointerToPointer);
        assert!(text.contains("**pptr = 100"));
    }
}
