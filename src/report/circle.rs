//! Circle measurement table for a single radius

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};

use crate::formulas::CircleMeasurements;
use crate::menu::DisplayConfig;
use crate::utils::{format_fixed, Marker};

/// Build the measurement table
pub fn circle_table(m: &CircleMeasurements, precision: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Measurement").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let rows = [
        ("Area of the circle", m.area),
        ("Circumference of the circle", m.circumference),
        ("Surface area of the sphere", m.surface_area),
        ("Volume of the sphere", m.volume),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_fixed(value, precision)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Write the radius line followed by the measurement table
pub fn write_circle_report<W: Write>(
    out: &mut W,
    m: &CircleMeasurements,
    display: DisplayConfig,
) -> io::Result<()> {
    writeln!(
        out,
        "{} Radius: {}",
        Marker::Info.styled(display.color),
        format_fixed(m.radius, display.precision)
    )?;
    writeln!(out, "{}", circle_table(m, display.precision))
}
