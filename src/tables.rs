use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use sunbeam::{
    core::Point,
    quantity::{energy::WattHours, power::Watts},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

/// Timestamped values, zeroes dimmed.
pub fn build_series_table<'a, V>(header: &str, points: impl IntoIterator<Item = &'a Point<V>>) -> Table
where
    V: Display + Default + PartialEq + 'a,
{
    let mut table = new_table();
    table.set_header(vec!["Time", header]);
    for (timestamp, value) in points {
        let cell = Cell::new(value).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(timestamp.format("%Y-%m-%d %H:%M %Z")),
            if *value == V::default() { cell.add_attribute(Attribute::Dim) } else { cell },
        ]);
    }
    table
}

pub fn build_forecast_table(forecast: &[Point<Watts>]) -> Table {
    let peak = forecast.iter().map(|(_, power)| *power).max().unwrap_or(Watts::ZERO);
    let mut table = new_table();
    table.set_header(vec!["Time", "Power"]);
    for (timestamp, power) in forecast {
        table.add_row(vec![
            Cell::new(timestamp.format("%H:%M")),
            Cell::new(power).set_alignment(CellAlignment::Right).fg(if *power <= Watts::ZERO {
                Color::Reset
            } else if *power >= peak {
                Color::Green
            } else {
                Color::DarkYellow
            }),
        ]);
    }
    table
}

pub fn build_sensors_table(
    power_now: Watts,
    power_in_15_minutes: Watts,
    power_in_30_minutes: Watts,
    hours_ahead: u32,
    energy_ahead: WattHours,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Sensor", "Value"]);
    table.add_row(vec![
        Cell::new("Power now"),
        Cell::new(power_now).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Power in 15 minutes"),
        Cell::new(power_in_15_minutes).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Power in 30 minutes"),
        Cell::new(power_in_30_minutes).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Energy in the next {hours_ahead} hours")),
        Cell::new(energy_ahead).set_alignment(CellAlignment::Right),
    ]);
    table
}
