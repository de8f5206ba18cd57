//! Renders sheet specifications into an .xlsx workbook.

use crate::error::ModelResult;
use crate::layout::{FY_LABELS, HIST_START, MAX_COL, Period, UNIT_COL};
use crate::types::{CellContent, RowKind, SheetSpec, Statement};
use rust_xlsxwriter::{Color, Workbook};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::styles;

/// Writes the five-sheet model workbook.
///
/// Worksheets are created up front in display order so the tab order is
/// fixed regardless of the order the sheets are populated in, which
/// follows the statement dependency chain instead.
pub struct ModelWriter {
    workbook: Workbook,
}

impl ModelWriter {
    pub fn new() -> ModelResult<Self> {
        let mut workbook = Workbook::new();
        for statement in Statement::ALL {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(statement.sheet_name())?;
            worksheet.set_tab_color(Color::RGB(statement.tab_color()));
            worksheet.set_screen_gridlines(false);
        }
        Ok(Self { workbook })
    }

    pub fn write_sheets(&mut self, sheets: &[SheetSpec]) -> ModelResult<()> {
        for sheet in sheets {
            self.write_sheet(sheet)?;
        }
        Ok(())
    }

    fn write_sheet(&mut self, spec: &SheetSpec) -> ModelResult<()> {
        let worksheet = self
            .workbook
            .worksheet_from_name(spec.statement.sheet_name())?;

        worksheet.merge_range(0, 0, 0, MAX_COL, &spec.title, &styles::title())?;
        worksheet.set_row_height(0, 30)?;
        worksheet.merge_range(1, 0, 1, MAX_COL, spec.subtitle, &styles::subtitle())?;

        let header_format = styles::header();
        let header_row = spec.header_row - 1;
        worksheet.write_string_with_format(header_row, 0, spec.header_label, &header_format)?;
        match spec.unit_header {
            Some(label) => {
                worksheet.write_string_with_format(header_row, UNIT_COL, label, &header_format)?;
            }
            None => {
                worksheet.write_blank(header_row, UNIT_COL, &header_format)?;
            }
        }
        for (i, label) in FY_LABELS.iter().enumerate() {
            worksheet.write_string_with_format(
                header_row,
                HIST_START + i as u16,
                *label,
                &header_format,
            )?;
        }

        let kinds: HashMap<u32, RowKind> = spec.rows.iter().map(|r| (r.row, r.kind)).collect();
        let occupied: HashSet<(u32, u16)> =
            spec.cells.iter().map(|c| (c.row, c.col)).collect();

        let section_format = styles::section();
        for row in &spec.rows {
            let r = row.row - 1;
            match row.kind {
                RowKind::Section => {
                    worksheet.write_string_with_format(r, 0, row.label, &section_format)?;
                    for col in 1..=MAX_COL {
                        worksheet.write_blank(r, col, &section_format)?;
                    }
                }
                RowKind::Blank => {
                    for p in Period::forecast() {
                        worksheet.write_blank(r, p.col, &styles::filler(RowKind::Blank, true))?;
                    }
                }
                kind => {
                    if !row.label.is_empty() {
                        worksheet.write_string_with_format(r, 0, row.label, &styles::label(kind))?;
                    }
                    if let Some(unit) = row.unit {
                        worksheet.write_string_with_format(
                            r,
                            UNIT_COL,
                            unit,
                            &styles::unit(kind),
                        )?;
                    }
                    // Fill the gaps so subtotal borders and the forecast
                    // wash run across the whole row
                    for p in Period::all() {
                        let bordered = matches!(kind, RowKind::Subtotal | RowKind::Check);
                        if !occupied.contains(&(row.row, p.col))
                            && (p.is_forecast() || bordered)
                        {
                            worksheet.write_blank(
                                r,
                                p.col,
                                &styles::filler(kind, p.is_forecast()),
                            )?;
                        }
                    }
                }
            }
        }

        for cell in &spec.cells {
            let kind = kinds.get(&cell.row).copied().unwrap_or(RowKind::Detail);
            let format = styles::data(cell.fmt, kind, cell.col >= crate::layout::FC_START, cell.style);
            let r = cell.row - 1;
            match &cell.content {
                CellContent::Number(value) => {
                    worksheet.write_number_with_format(r, cell.col, *value, &format)?;
                }
                CellContent::Formula(expr) => {
                    worksheet.write_formula_with_format(
                        r,
                        cell.col,
                        expr.render().as_str(),
                        &format,
                    )?;
                }
                CellContent::Text(value) => {
                    worksheet.write_string_with_format(r, cell.col, *value, &format)?;
                }
            }
        }

        worksheet.set_column_width(0, spec.label_width)?;
        worksheet.set_column_width(UNIT_COL, 10)?;
        for col in HIST_START..=MAX_COL {
            worksheet.set_column_width(col, spec.data_width)?;
        }
        worksheet.set_freeze_panes(spec.freeze.0, spec.freeze.1)?;

        Ok(())
    }

    /// Save the workbook to disk.
    pub fn save(&mut self, path: &Path) -> ModelResult<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_sheets;
    use tempfile::TempDir;

    #[test]
    fn test_writes_a_workbook_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.xlsx");

        let sheets = build_sheets().unwrap();
        let mut writer = ModelWriter::new().unwrap();
        writer.write_sheets(&sheets).unwrap();
        writer.save(&path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("model.xlsx");

        let mut writer = ModelWriter::new().unwrap();
        writer.write_sheets(&build_sheets().unwrap()).unwrap();
        assert!(writer.save(&path).is_err());
    }
}
