// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column-labelled projection of placements for tabular display.

use super::SpokePlacement;
use crate::geometry::SideConvention;
use serde::Serialize;

/// A column a method may include in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Spoke,
    Order,
    Step,
    Side,
    OddEvenSet,
    K,
    HubHole,
    Heads,
    RimHole,
    CrossesDescribed,
    Notes,
}

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Spoke => "Spoke",
            Column::Order => "Order",
            Column::Step => "Step",
            Column::Side => "Side",
            Column::OddEvenSet => "Odd/Even set",
            Column::K => "k",
            Column::HubHole => "Hub hole",
            Column::Heads => "Heads",
            Column::RimHole => "Rim hole",
            Column::CrossesDescribed => "Crosses described",
            Column::Notes => "Notes",
        }
    }

    fn cell(self, placement: &SpokePlacement, convention: SideConvention) -> String {
        match self {
            Column::Spoke => placement.spoke.clone(),
            Column::Order => placement.order.to_string(),
            Column::Step => placement.step.clone(),
            Column::Side => placement.side.label(convention).to_string(),
            Column::OddEvenSet => placement
                .odd_even_set
                .map(|set| set.to_string())
                .unwrap_or_default(),
            Column::K => placement.k.map(|k| k.to_string()).unwrap_or_default(),
            Column::HubHole => placement.hub_hole.to_string(),
            Column::Heads => placement.heads.to_string(),
            Column::RimHole => placement.rim_hole.to_string(),
            Column::CrossesDescribed => placement.crosses_described.clone(),
            Column::Notes => placement.notes.clone(),
        }
    }
}

/// Rows of display strings under a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Project placements onto the given columns, keeping install order.
    pub fn project(
        placements: &[SpokePlacement],
        columns: &[Column],
        convention: SideConvention,
    ) -> Self {
        Self {
            columns: columns.iter().map(|c| c.label()).collect(),
            rows: placements
                .iter()
                .map(|p| columns.iter().map(|c| c.cell(p, convention)).collect())
                .collect(),
        }
    }

    /// Position of a column by label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == label)
    }

    /// Plain-text rendering with left-aligned, space-padded columns.
    pub fn render_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
