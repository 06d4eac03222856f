use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{estimate::Estimate, quantity::cost::Cost};

pub fn build_estimates_table(estimates: &[Estimate]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Package", "Discount", "Total", "ETA", "Vehicle", "Start"]);
    for estimate in estimates {
        let assignment = estimate.assignment;
        table.add_row(vec![
            Cell::new(&estimate.package_id),
            Cell::new(estimate.discount).set_alignment(CellAlignment::Right).fg(
                if estimate.discount > Cost::ZERO { Color::Green } else { Color::Reset },
            ),
            Cell::new(estimate.total).set_alignment(CellAlignment::Right),
            match assignment {
                Some(assignment) => Cell::new(format!("{:.2}", assignment.eta.0))
                    .set_alignment(CellAlignment::Right),
                None => Cell::new("unreachable").fg(Color::Red),
            },
            assignment.map_or_else(
                || Cell::new(""),
                |assignment| Cell::new(format!("#{}", assignment.vehicle_id)),
            ),
            assignment.map_or_else(
                || Cell::new(""),
                |assignment| {
                    Cell::new(assignment.start)
                        .set_alignment(CellAlignment::Right)
                        .add_attribute(Attribute::Dim)
                },
            ),
        ]);
    }
    table
}

/// `id discount total [eta]`, the ETA is omitted for an unreachable package.
pub fn format_plain_line(estimate: &Estimate) -> String {
    let line = format!("{} {} {}", estimate.package_id, estimate.discount, estimate.total);
    match estimate.eta() {
        Some(eta) => format!("{line} {:.2}", eta.0),
        None => line,
    }
}
