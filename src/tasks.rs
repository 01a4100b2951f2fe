// Assignment tasks: variables, pointers & functions.
use std::io::Write;

use clap::ValueEnum;

use crate::arrays::sum_through;
use crate::error::DemoResult;
use crate::indirection::format_address;
use crate::mutation::{assign_through, increment_by_reference, increment_by_value};
use crate::style::Style;
use crate::swap::swap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Store a variable's address in a pointer
    Task1,
    /// Modify a variable through a pointer
    Task2,
    /// Add two values through pointers
    Task3,
    /// Swap two numbers through pointers
    Task4,
    /// Increment by value and by reference
    Task5,
}

impl Task {
    pub fn run(self, out: &mut dyn Write, style: &Style) -> DemoResult<()> {
        log::debug!("running {self:?}");
        match self {
            Task::Task1 => address_of_variable(out),
            Task::Task2 => modify_through_pointer(out, style),
            Task::Task3 => sum_of_pointees(out),
            Task::Task4 => swap_numbers(out),
            Task::Task5 => increments(out, style),
        }
    }
}

fn address_of_variable(out: &mut dyn Write) -> DemoResult<()> {
    let num = 10;
    let ptr = &num;

    writeln!(out, "Value of num: {num}")?;
    writeln!(out, "Value stored in ptr (address of num): {}", format_address(ptr))?;
    writeln!(out, "Address of num: {}", format_address(&num))?;
    writeln!(out, "Value accessed using *ptr: {}", *ptr)?;
    Ok(())
}

fn modify_through_pointer(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut count = 10;
    writeln!(out, "Initial value of count: {count}")?;
    writeln!(out, "Address of count: {}", format_address(&count))?;

    let p_count = &mut count;
    let via_pointer = assign_through(p_count, 25);

    writeln!(out, "Updated value of count: {}", style.changed(&count.to_string()))?;
    writeln!(out, "Value via pointer *pCount: {via_pointer}")?;
    Ok(())
}

fn sum_of_pointees(out: &mut dyn Write) -> DemoResult<()> {
    let num1 = 15;
    let num2 = 25;
    writeln!(out, "num1: {num1}")?;
    writeln!(out, "num2: {num2}")?;

    let (ptr1, ptr2) = (&num1, &num2);
    writeln!(out, "Sum: {}", sum_through(ptr1, ptr2)?)?;
    Ok(())
}

fn swap_numbers(out: &mut dyn Write) -> DemoResult<()> {
    let mut a = 10;
    let mut b = 20;

    writeln!(out, "Before swapping:\na = {a}\nb = {b}")?;
    swap(&mut a, &mut b);
    writeln!(out, "\nAfter swapping:\na = {a}\nb = {b}")?;
    Ok(())
}

fn increments(out: &mut dyn Write, style: &Style) -> DemoResult<()> {
    let mut value = 5;
    writeln!(out, "Initial value: {value}\n")?;

    writeln!(out, "{}", style.heading("Pass by Value"))?;
    let inside = increment_by_value(value);
    writeln!(out, "Inside incrementByValue: {inside}")?;
    writeln!(out, "After incrementByValue: {value}")?;
    writeln!(out, "{}\n", style.unchanged("(Value unchanged - copy was modified)"))?;

    writeln!(out, "{}", style.heading("Pass by Reference"))?;
    increment_by_reference(&mut value)?;
    writeln!(out, "Inside incrementByReference: {value}")?;
    writeln!(out, "After incrementByReference: {value}")?;
    writeln!(out, "{}", style.changed("(Value changed - original was modified)"))?;
    Ok(())
}
