use std::fmt;

use crate::memory::{PartitionRow, PartitionStatus};

const HEADER: [&str; 3] = ["Address", "Size", "Allocation"];

/// ASCII rendering of the partition table, with addresses in
/// hexadecimal.
pub struct TableView {
    rows: Vec<[String; 3]>,
}

impl TableView {
    pub fn new(rows: &[PartitionRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                let allocation = match (row.status, row.occupant) {
                    (PartitionStatus::Allocated, Some(id)) => format!("P{id}"),
                    _ => String::from("free"),
                };
                [format!("{:04X}", row.address), row.size.to_string(), allocation]
            })
            .collect();

        Self { rows }
    }

    fn widths(&self) -> [usize; 3] {
        let mut widths = HEADER.map(str::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        // Separator lines pad each column with one space on both
        // sides, like the cells themselves.
        let separator = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let separator = format!("+{separator}+");

        writeln!(f, "{separator}")?;
        write_line(f, HEADER, widths)?;
        writeln!(f, "{separator}")?;
        for row in &self.rows {
            write_line(f, [row[0].as_str(), row[1].as_str(), row[2].as_str()], widths)?;
        }
        write!(f, "{separator}")
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: [&str; 3], widths: [usize; 3]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, width) in cells.into_iter().zip(widths) {
        write!(f, " {cell:<width$} |")?;
    }
    writeln!(f)
}
