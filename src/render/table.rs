use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color,
    ContentArrangement, Table,
};

/// Builder for creating consistently styled tables across the application
#[derive(Clone)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    pub fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    /// Set table headers with bold styling
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a row to the table
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row_cells: Vec<Cell> = cells
            .into_iter()
            .map(|cell| Cell::new(cell.into()))
            .collect();

        self.table.add_row(row_cells);
        self
    }

    /// Add a row with custom styled cells
    pub fn styled_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.table.add_row(cells);
        self
    }

    /// Build and return the formatted table as a string
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for creating styled cells
pub mod cells {
    use super::*;

    /// Create a bold cell
    pub fn bold<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).add_attribute(Attribute::Bold)
    }

    /// Create a green cell for favorable values
    pub fn favorable<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::Green)
    }

    /// Create a red cell for unfavorable values
    pub fn unfavorable<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::Red)
    }
}
