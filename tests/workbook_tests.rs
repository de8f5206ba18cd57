//! End-to-end tests: build the workbook, save it, and read it back.

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;
use tempfile::TempDir;
use threeway::layout::{FC_START, HIST_START};
use threeway::model::{assumptions, balance, cashflow, income, notes};
use threeway::{build_sheets, ModelWriter};

fn generate(path: &Path) {
    let sheets = build_sheets().unwrap();
    let mut writer = ModelWriter::new().unwrap();
    writer.write_sheets(&sheets).unwrap();
    writer.save(path).unwrap();
}

fn value_at(range: &calamine::Range<Data>, row: u32, col: u16) -> f64 {
    match range.get_value(((row - 1), col as u32)) {
        Some(Data::Float(v)) => *v,
        Some(Data::Int(v)) => *v as f64,
        other => panic!("expected number at ({}, {}), got {:?}", row, col, other),
    }
}

fn formula_at(range: &calamine::Range<String>, row: u32, col: u16) -> String {
    range
        .get_value(((row - 1), col as u32))
        .cloned()
        .unwrap_or_else(|| panic!("expected formula at ({}, {})", row, col))
}

#[test]
fn workbook_has_five_sheets_in_display_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let names: Vec<String> = workbook.sheet_names().to_vec();
    assert_eq!(
        names,
        vec![
            "Assumptions",
            "Income Statement",
            "Balance Sheet",
            "Cash Flow Statement",
            "Notes"
        ]
    );
}

#[test]
fn income_statement_historicals_are_literals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range("Income Statement").unwrap();
    let (_, ir) = income::layout();

    // FY21 toll revenue and FY25 NPAT, A$ millions
    assert_eq!(value_at(&range, ir.toll_rev, HIST_START), 2_459.0);
    assert_eq!(
        value_at(&range, ir.npat, HIST_START + 4),
        income::hist_npat(4)
    );
}

#[test]
fn forecast_columns_carry_live_formulas() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let formulas = workbook.worksheet_formula("Income Statement").unwrap();
    let (_, ir) = income::layout();
    let (_, d) = assumptions::layout();

    assert_eq!(
        formula_at(&formulas, ir.toll_rev, FC_START),
        format!("G{}*(1+Assumptions!H{})", ir.toll_rev, d.toll_growth)
    );
    assert_eq!(
        formula_at(&formulas, ir.total_rev, FC_START),
        format!("H{}+H{}", ir.toll_rev, ir.other_rev)
    );
}

#[test]
fn balance_sheet_cash_links_to_cash_flow_closing_balance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let formulas = workbook.worksheet_formula("Balance Sheet").unwrap();
    let (_, br) = balance::layout();
    let (_, cf) = cashflow::layout();

    assert_eq!(
        formula_at(&formulas, br.cash, FC_START),
        format!("'Cash Flow Statement'!H{}", cf.close_cash)
    );
}

#[test]
fn historical_balance_sheet_balances_in_the_saved_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range("Balance Sheet").unwrap();
    let (_, br) = balance::layout();

    for i in 0..5u16 {
        let col = HIST_START + i;
        assert_eq!(
            value_at(&range, br.total_assets, col),
            value_at(&range, br.total_le, col),
            "column {} must balance",
            col
        );
    }
}

#[test]
fn notes_link_back_into_the_statements() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.xlsx");
    generate(&path);

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let formulas = workbook.worksheet_formula("Notes").unwrap();
    let (_, nr) = notes::layout();
    let (_, ir) = income::layout();
    let (_, br) = balance::layout();

    assert_eq!(
        formula_at(&formulas, nr.toll, HIST_START),
        format!("'Income Statement'!C{}", ir.toll_rev)
    );
    assert_eq!(
        formula_at(&formulas, nr.intang_check, FC_START),
        format!("'Balance Sheet'!H{}", br.intang)
    );
}

#[test]
fn generation_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.xlsx");
    let second = dir.path().join("second.xlsx");
    generate(&first);
    generate(&second);

    let mut workbook_a: Xlsx<_> = open_workbook(&first).unwrap();
    let mut workbook_b: Xlsx<_> = open_workbook(&second).unwrap();
    let names: Vec<String> = workbook_a.sheet_names().to_vec();
    assert_eq!(names, workbook_b.sheet_names().to_vec());

    for name in &names {
        let formulas_a = workbook_a.worksheet_formula(name).unwrap();
        let formulas_b = workbook_b.worksheet_formula(name).unwrap();
        assert_eq!(
            formulas_a.cells().collect::<Vec<_>>(),
            formulas_b.cells().collect::<Vec<_>>(),
            "formulas differ on {}",
            name
        );

        let values_a = workbook_a.worksheet_range(name).unwrap();
        let values_b = workbook_b.worksheet_range(name).unwrap();
        assert_eq!(
            values_a.cells().collect::<Vec<_>>(),
            values_b.cells().collect::<Vec<_>>(),
            "values differ on {}",
            name
        );
    }
}
