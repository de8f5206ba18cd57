//! Income Statement sheet.

use crate::formula::cell;
use crate::layout::{Period, HIST_YEARS};
use crate::model::assumptions::DriverRows;
use crate::model::balance::BalanceRows;
use crate::model::{assum, growth, on_prev, COMPANY};
use crate::types::{CellSpec, NumFmt, RowBuilder, RowSpec, SheetSpec, Statement};

#[derive(Debug, Clone)]
pub struct IncomeRows {
    pub toll_rev: u32,
    pub other_rev: u32,
    pub total_rev: u32,
    pub emp: u32,
    pub road: u32,
    pub corp: u32,
    pub total_opex: u32,
    pub ebitda: u32,
    pub da: u32,
    pub ebit: u32,
    pub net_finance: u32,
    pub pbt: u32,
    pub tax: u32,
    pub npat: u32,
}

// Historical figures FY21-FY25, A$ millions. Costs are carried as
// negatives so every subtotal is a plain sum.
pub const HIST_TOLL_REV: [f64; HIST_YEARS] = [2_459.0, 2_830.0, 3_455.0, 3_756.0, 3_990.0];
pub const HIST_OTHER_REV: [f64; HIST_YEARS] = [319.0, 311.0, 332.0, 326.0, 360.0];
pub const HIST_EMPLOYEE: [f64; HIST_YEARS] = [-236.0, -251.0, -280.0, -298.0, -313.0];
pub const HIST_ROAD_OPS: [f64; HIST_YEARS] = [-340.0, -333.0, -380.0, -395.0, -418.0];
pub const HIST_CORP_ADMIN: [f64; HIST_YEARS] = [-401.0, -436.0, -535.0, -562.0, -608.0];
pub const HIST_DA: [f64; HIST_YEARS] = [-856.0, -880.0, -905.0, -930.0, -958.0];
pub const HIST_NET_FINANCE: [f64; HIST_YEARS] = [-907.0, -821.0, -963.0, -1_093.0, -1_150.0];
pub const HIST_TAX: [f64; HIST_YEARS] = [7.0, -141.0, -270.0, -249.0, -282.0];

pub fn hist_total_rev(i: usize) -> f64 {
    HIST_TOLL_REV[i] + HIST_OTHER_REV[i]
}

pub fn hist_total_opex(i: usize) -> f64 {
    HIST_EMPLOYEE[i] + HIST_ROAD_OPS[i] + HIST_CORP_ADMIN[i]
}

pub fn hist_ebitda(i: usize) -> f64 {
    hist_total_rev(i) + hist_total_opex(i)
}

pub fn hist_ebit(i: usize) -> f64 {
    hist_ebitda(i) + HIST_DA[i]
}

pub fn hist_pbt(i: usize) -> f64 {
    hist_ebit(i) + HIST_NET_FINANCE[i]
}

pub fn hist_npat(i: usize) -> f64 {
    hist_pbt(i) + HIST_TAX[i]
}

pub fn layout() -> (Vec<RowSpec>, IncomeRows) {
    let mut rows = RowBuilder::new(5);

    rows.section("Revenue");
    let toll_rev = rows.detail("Toll revenue", Some("A$m"));
    let other_rev = rows.detail("Other revenue", Some("A$m"));
    let total_rev = rows.subtotal("Total Revenue", Some("A$m"));
    rows.blank();

    rows.section("Operating Expenses");
    let emp = rows.detail("Employee costs", Some("A$m"));
    let road = rows.detail("Road operating costs", Some("A$m"));
    let corp = rows.detail("Corporate & admin costs", Some("A$m"));
    let total_opex = rows.subtotal("Total Operating Expenses", Some("A$m"));
    rows.blank();

    let ebitda = rows.subtotal("EBITDA", Some("A$m"));
    let da = rows.detail("Depreciation & amortisation", Some("A$m"));
    let ebit = rows.subtotal("EBIT", Some("A$m"));
    rows.blank();

    let net_finance = rows.detail("Net finance costs", Some("A$m"));
    let pbt = rows.subtotal("Profit / (Loss) before tax", Some("A$m"));
    let tax = rows.detail("Income tax (expense) / benefit", Some("A$m"));
    let npat = rows.subtotal("Net Profit / (Loss) After Tax", Some("A$m"));

    let income_rows = IncomeRows {
        toll_rev,
        other_rev,
        total_rev,
        emp,
        road,
        corp,
        total_opex,
        ebitda,
        da,
        ebit,
        net_finance,
        pbt,
        tax,
        npat,
    };

    (rows.finish(), income_rows)
}

fn hist_row(cells: &mut Vec<CellSpec>, row: u32, values: &[f64; HIST_YEARS]) {
    for p in Period::historical() {
        cells.push(CellSpec::number(
            row,
            p.col,
            values[p.index()],
            NumFmt::Accounting,
        ));
    }
}

fn hist_derived(cells: &mut Vec<CellSpec>, row: u32, f: impl Fn(usize) -> f64) {
    for p in Period::historical() {
        cells.push(CellSpec::number(row, p.col, f(p.index()), NumFmt::Accounting));
    }
}

pub fn sheet(rows: Vec<RowSpec>, ir: &IncomeRows, d: &DriverRows, bs: &BalanceRows) -> SheetSpec {
    let mut cells = Vec::new();

    hist_row(&mut cells, ir.toll_rev, &HIST_TOLL_REV);
    hist_row(&mut cells, ir.other_rev, &HIST_OTHER_REV);
    hist_derived(&mut cells, ir.total_rev, hist_total_rev);
    hist_row(&mut cells, ir.emp, &HIST_EMPLOYEE);
    hist_row(&mut cells, ir.road, &HIST_ROAD_OPS);
    hist_row(&mut cells, ir.corp, &HIST_CORP_ADMIN);
    hist_derived(&mut cells, ir.total_opex, hist_total_opex);
    hist_derived(&mut cells, ir.ebitda, hist_ebitda);
    hist_row(&mut cells, ir.da, &HIST_DA);
    hist_derived(&mut cells, ir.ebit, hist_ebit);
    hist_row(&mut cells, ir.net_finance, &HIST_NET_FINANCE);
    hist_derived(&mut cells, ir.pbt, hist_pbt);
    hist_row(&mut cells, ir.tax, &HIST_TAX);
    hist_derived(&mut cells, ir.npat, hist_npat);

    for p in Period::forecast() {
        let mut push = |row: u32, expr| {
            cells.push(CellSpec::formula(row, p.col, expr, NumFmt::Accounting));
        };

        // Revenue lines grow off the prior year at the active driver rate
        push(ir.toll_rev, growth(ir.toll_rev, d.toll_growth, p));
        push(ir.other_rev, growth(ir.other_rev, d.other_growth, p));
        push(ir.total_rev, cell(p.col, ir.toll_rev) + cell(p.col, ir.other_rev));

        // Opex splits out of the total opex ratio by cost-share drivers;
        // corporate & admin absorbs the remainder
        let trev = || cell(p.col, ir.total_rev);
        push(
            ir.emp,
            -(trev() * assum(d.opex_pct, p) * assum(d.emp_share, p)),
        );
        push(
            ir.road,
            -(trev() * assum(d.opex_pct, p) * assum(d.road_share, p)),
        );
        push(
            ir.corp,
            -(trev() * assum(d.opex_pct, p)) - cell(p.col, ir.emp) - cell(p.col, ir.road),
        );
        push(
            ir.total_opex,
            cell(p.col, ir.emp) + cell(p.col, ir.road) + cell(p.col, ir.corp),
        );

        push(ir.ebitda, cell(p.col, ir.total_rev) + cell(p.col, ir.total_opex));

        // D&A and finance costs accrue on opening balances (prior-year
        // Balance Sheet column) to avoid circular references
        push(
            ir.da,
            -(on_prev(Statement::BalanceSheet, bs.total_nca, p) * assum(d.da_pct, p)),
        );
        push(ir.ebit, cell(p.col, ir.ebitda) + cell(p.col, ir.da));
        push(
            ir.net_finance,
            -(on_prev(Statement::BalanceSheet, bs.total_borrow, p) * assum(d.cost_of_debt, p)),
        );

        push(ir.pbt, cell(p.col, ir.ebit) + cell(p.col, ir.net_finance));
        push(ir.tax, -(cell(p.col, ir.pbt) * assum(d.tax_rate, p)));
        push(ir.npat, cell(p.col, ir.pbt) + cell(p.col, ir.tax));
    }

    SheetSpec {
        statement: Statement::IncomeStatement,
        title: format!("{} \u{2013} Income Statement", COMPANY),
        subtitle: "A$ millions  |  Fiscal year ends 30 June",
        header_row: 4,
        header_label: "Income Statement",
        unit_header: None,
        rows,
        cells,
        freeze: (4, 2),
        label_width: 36.0,
        data_width: 15.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FC_START;
    use crate::model::{assumptions, balance};
    use crate::types::CellContent;
    use pretty_assertions::assert_eq;

    fn build() -> (SheetSpec, IncomeRows, assumptions::DriverRows) {
        let (_, d) = assumptions::layout();
        let (_, bs) = balance::layout();
        let (rows, ir) = layout();
        let spec = sheet(rows, &ir, &d, &bs);
        (spec, ir, d)
    }

    fn formula_at(spec: &SheetSpec, row: u32, col: u16) -> String {
        match &spec
            .cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .unwrap()
            .content
        {
            CellContent::Formula(expr) => expr.render(),
            other => panic!("expected formula at ({}, {}), got {:?}", row, col, other),
        }
    }

    #[test]
    fn test_historical_subtotals_sum_their_details() {
        for i in 0..HIST_YEARS {
            assert_eq!(hist_total_rev(i), HIST_TOLL_REV[i] + HIST_OTHER_REV[i]);
            assert_eq!(
                hist_total_opex(i),
                HIST_EMPLOYEE[i] + HIST_ROAD_OPS[i] + HIST_CORP_ADMIN[i]
            );
            assert_eq!(hist_npat(i), hist_pbt(i) + HIST_TAX[i]);
        }
    }

    #[test]
    fn test_toll_revenue_grows_off_prior_year() {
        let (spec, ir, d) = build();
        let formula = formula_at(&spec, ir.toll_rev, FC_START);
        assert_eq!(
            formula,
            format!("G{}*(1+Assumptions!H{})", ir.toll_rev, d.toll_growth)
        );
    }

    #[test]
    fn test_total_revenue_sums_revenue_details() {
        let (spec, ir, _) = build();
        let formula = formula_at(&spec, ir.total_rev, FC_START);
        assert_eq!(formula, format!("H{}+H{}", ir.toll_rev, ir.other_rev));
    }

    #[test]
    fn test_da_references_opening_balance_sheet_nca() {
        let (spec, ir, d) = build();
        let (_, bs) = balance::layout();
        let formula = formula_at(&spec, ir.da, FC_START);
        assert_eq!(
            formula,
            format!(
                "-'Balance Sheet'!G{}*Assumptions!H{}",
                bs.total_nca, d.da_pct
            )
        );
    }

    #[test]
    fn test_every_line_has_ten_periods() {
        let (spec, ir, _) = build();
        for row in [
            ir.toll_rev,
            ir.other_rev,
            ir.total_rev,
            ir.emp,
            ir.road,
            ir.corp,
            ir.total_opex,
            ir.ebitda,
            ir.da,
            ir.ebit,
            ir.net_finance,
            ir.pbt,
            ir.tax,
            ir.npat,
        ] {
            let count = spec.cells.iter().filter(|c| c.row == row).count();
            assert_eq!(count, 10, "row {} should span ten periods", row);
        }
    }
}
