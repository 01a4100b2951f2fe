//! Sphere surface area calculator.

use crate::error::{DemoError, DemoResult};

/// The calculator's fixed approximation of pi.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f32 = 3.14159;

pub fn surface_area(radius: f32) -> DemoResult<f32> {
    if !radius.is_finite() {
        return Err(DemoError::invalid_input(
            radius.to_string(),
            "radius must be a finite number",
        ));
    }
    if radius < 0.0 {
        return Err(DemoError::invalid_input(
            radius.to_string(),
            "radius cannot be negative",
        ));
    }
    Ok(4.0 * PI_APPROX * radius * radius)
}

pub fn parse_radius(input: &str) -> DemoResult<f32> {
    let trimmed = input.trim();
    trimmed
        .parse::<f32>()
        .map_err(|err| DemoError::invalid_input(trimmed, err.to_string()))
}

pub fn format_report(radius: f32, area: f32) -> String {
    format!("Radius: {radius:.2}\nSurface Area: {area:.2} square units\n")
}
