//! Assumptions & Drivers sheet.
//!
//! Every forecast line in the other statements is driven from here. Growth
//! and margin drivers come in an input/active pair: the input row holds the
//! raw figures, and the active row's forecast cells switch between the
//! input and a trailing 3-year historical average based on the scenario
//! toggle in column B.

use crate::formula::{abs_cell, call, cell, eq, iff, row_range, text};
use crate::layout::{Period, HIST_END, UNIT_COL};
use crate::model::{COMPANY, TICKER};
use crate::types::{CellSpec, CellStyle, NumFmt, RowBuilder, RowSpec, SheetSpec, Statement};

/// Row positions of every driver, for cross-sheet references.
#[derive(Debug, Clone)]
pub struct DriverRows {
    // Scenario toggles (value lives in column B)
    pub toggle_toll: u32,
    pub toggle_other: u32,
    pub toggle_opex: u32,
    pub toggle_da: u32,
    pub toggle_cod: u32,
    pub toggle_tax: u32,

    // Revenue drivers
    pub toll_growth_input: u32,
    pub toll_growth: u32,
    pub other_growth_input: u32,
    pub other_growth: u32,

    // Operating cost drivers
    pub opex_pct_input: u32,
    pub opex_pct: u32,
    pub emp_pct: u32,
    pub emp_share: u32,
    pub road_share: u32,

    // Depreciation & amortisation
    pub da_pct_input: u32,
    pub da_pct: u32,
    pub da_ppe: u32,
    pub da_intang: u32,

    // Financing
    pub cost_of_debt_input: u32,
    pub cost_of_debt: u32,
    pub tax_rate_input: u32,
    pub tax_rate: u32,
    pub stat_tax: u32,
    pub curr_borrow_pct: u32,
    pub drp_rate: u32,

    // Balance sheet drivers
    pub capex: u32,
    pub rec_days: u32,
    pub pay_days: u32,
    pub oca_growth: u32,
    pub jv_growth: u32,
    pub onca_growth: u32,
    pub ocl_growth: u32,
    pub oncl_growth: u32,

    // Cash flow / capital structure
    pub dps: u32,
    pub shares: u32,
    pub net_debt: u32,
    pub other_ops_growth: u32,
    pub equity_iss: u32,

    // Notes assumptions
    pub constr_growth: u32,
    pub mat_1_2: u32,
    pub mat_2_5: u32,
    pub cap_borrow: u32,
    pub non_ded: u32,
    pub tax_conc: u32,
    pub other_perm: u32,
    pub cap_commit: u32,
    pub op_lease_growth: u32,
    pub contingent: u32,
}

/// Row carrying the FY column headers (the driver table starts below it).
pub const HEADER_ROW: u32 = 12;

// Driver values, one entry per fiscal year FY21-FY30. Percentage rows are
// entered in percent points and scaled at write time.
const TOLL_GROWTH: [f64; 10] = [-4.2, 15.1, 22.1, 8.7, 6.2, 5.5, 5.0, 4.5, 4.0, 3.8];
const OTHER_GROWTH: [f64; 10] = [2.0, -2.5, 6.8, -1.8, 10.4, 3.0, 3.0, 3.0, 3.0, 3.0];
const OPEX_PCT: [f64; 10] = [35.2, 32.5, 31.5, 30.7, 30.8, 30.5, 30.0, 29.5, 29.0, 28.8];
const EMP_PCT: [f64; 10] = [8.5, 8.0, 7.4, 7.3, 7.2, 7.2, 7.0, 6.9, 6.8, 6.7];
const EMP_SHARE: [f64; 10] = [24.0, 25.0, 24.0, 24.0, 23.0, 25.0, 25.0, 25.0, 25.0, 25.0];
const ROAD_SHARE: [f64; 10] = [34.0, 33.0, 33.0, 32.0, 31.0, 33.0, 33.0, 33.0, 33.0, 33.0];
const DA_PCT: [f64; 10] = [2.7, 2.7, 2.7, 2.7, 2.8, 2.8, 2.8, 2.8, 2.8, 2.8];
const DA_PPE: [f64; 10] = [40.0; 10];
const DA_INTANG: [f64; 10] = [60.0; 10];
const COST_OF_DEBT: [f64; 10] = [4.6, 4.0, 4.2, 4.5, 4.6, 4.7, 4.7, 4.8, 4.8, 4.8];
const TAX_RATE: [f64; 10] = [-1.5, 14.0, 14.3, 14.4, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0];
const STAT_TAX: [f64; 10] = [30.0; 10];
const CURR_BORROW_PCT: [f64; 10] = [6.0, 5.5, 5.5, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0];
const DRP_RATE: [f64; 10] = [1.0; 10];
const CAPEX: [f64; 10] = [
    628.0, 1_092.0, 1_805.0, 1_420.0, 1_200.0, 1_300.0, 1_350.0, 1_400.0, 1_250.0, 1_200.0,
];
const REC_DAYS: [f64; 10] = [28.0, 26.0, 25.0, 24.0, 24.0, 24.0, 24.0, 24.0, 24.0, 24.0];
const PAY_DAYS: [f64; 10] = [55.0, 52.0, 50.0, 48.0, 48.0, 48.0, 48.0, 48.0, 48.0, 48.0];
const OCA_GROWTH: [f64; 10] = [3.0; 10];
const JV_GROWTH: [f64; 10] = [-2.0; 10];
const ONCA_GROWTH: [f64; 10] = [2.0; 10];
const OCL_GROWTH: [f64; 10] = [3.0; 10];
const ONCL_GROWTH: [f64; 10] = [2.0; 10];
const DPS: [f64; 10] = [41.0, 53.0, 62.0, 64.5, 66.0, 68.0, 70.0, 72.0, 74.0, 76.0];
const SHARES: [f64; 10] = [
    1_932.0, 1_948.0, 1_964.0, 1_978.0, 1_990.0, 2_000.0, 2_010.0, 2_020.0, 2_025.0, 2_030.0,
];
const NET_DEBT: [f64; 10] = [
    1_200.0, 2_050.0, 2_800.0, 600.0, 300.0, 400.0, 350.0, 300.0, 200.0, 100.0,
];
const OTHER_OPS_GROWTH: [f64; 10] = [2.0; 10];
const EQUITY_ISS: [f64; 10] = [1.0; 10];
const CONSTR_GROWTH: [f64; 10] = [3.0; 10];
const MAT_1_2: [f64; 10] = [5.3, 4.9, 4.8, 4.7, 4.2, 5.0, 5.0, 5.0, 5.0, 5.0];
const MAT_2_5: [f64; 10] = [25.0, 22.0, 22.0, 26.0, 26.0, 26.0, 26.0, 26.0, 26.0, 26.0];
const CAP_BORROW: [f64; 10] = [15.0; 10];
const NON_DED: [f64; 10] = [190.0; 10];
const TAX_CONC: [f64; 10] = [-40.0; 10];
const OTHER_PERM: [f64; 10] = [8.0; 10];
const CAP_COMMIT: [f64; 10] = [1.2; 10];
const OP_LEASE_GROWTH: [f64; 10] = [3.0; 10];
const CONTINGENT: [f64; 10] = [170.0; 10];

pub fn layout() -> (Vec<RowSpec>, DriverRows) {
    let mut rows = RowBuilder::new(4);

    rows.section("SCENARIO TOGGLES");
    let toggle_toll = rows.detail("Toll revenue growth method", None);
    let toggle_other = rows.detail("Other revenue growth method", None);
    let toggle_opex = rows.detail("Opex % method", None);
    let toggle_da = rows.detail("D&A % method", None);
    let toggle_cod = rows.detail("Cost of debt method", None);
    let toggle_tax = rows.detail("Tax rate method", None);
    rows.blank();
    rows.skip(2); // FY header row + gap

    rows.section("REVENUE DRIVERS");
    let toll_growth_input = rows.detail("Toll revenue growth (input)", Some("%"));
    let toll_growth = rows.detail("Toll revenue growth (active)", Some("%"));
    let other_growth_input = rows.detail("Other revenue growth (input)", Some("%"));
    let other_growth = rows.detail("Other revenue growth (active)", Some("%"));
    rows.blank();

    rows.section("OPERATING COST DRIVERS");
    let opex_pct_input = rows.detail("Opex as % of revenue (input)", Some("%"));
    let opex_pct = rows.detail("Opex as % of revenue (active)", Some("%"));
    let emp_pct = rows.detail("Employee costs as % of revenue", Some("%"));
    let emp_share = rows.detail("Employee costs share of total opex", Some("%"));
    let road_share = rows.detail("Road ops share of total opex", Some("%"));
    rows.blank();

    rows.section("DEPRECIATION & AMORTISATION");
    let da_pct_input = rows.detail("D&A as % of NCA (input)", Some("%"));
    let da_pct = rows.detail("D&A as % of NCA (active)", Some("%"));
    let da_ppe = rows.detail("D&A allocation to PP&E", Some("%"));
    let da_intang = rows.detail("D&A allocation to intangibles", Some("%"));
    rows.blank();

    rows.section("FINANCING ASSUMPTIONS");
    let cost_of_debt_input = rows.detail("Average cost of debt (input)", Some("%"));
    let cost_of_debt = rows.detail("Average cost of debt (active)", Some("%"));
    let tax_rate_input = rows.detail("Effective tax rate (input)", Some("%"));
    let tax_rate = rows.detail("Effective tax rate (active)", Some("%"));
    let stat_tax = rows.detail("Statutory tax rate", Some("%"));
    let curr_borrow_pct = rows.detail("Current borrowings as % of total debt", Some("%"));
    let drp_rate = rows.detail("DRP / dilution rate", Some("%"));
    rows.blank();

    rows.section("BALANCE SHEET DRIVERS");
    let capex = rows.detail("Capex (maintenance + growth)", Some("A$m"));
    let rec_days = rows.detail("Trade receivables days", Some("days"));
    let pay_days = rows.detail("Trade payables days", Some("days"));
    let oca_growth = rows.detail("Other current assets growth rate", Some("%"));
    let jv_growth = rows.detail("JV investments growth rate", Some("%"));
    let onca_growth = rows.detail("Other NCA growth rate", Some("%"));
    let ocl_growth = rows.detail("Other current liabilities growth rate", Some("%"));
    let oncl_growth = rows.detail("Other NCL growth rate", Some("%"));
    rows.blank();

    rows.section("CASH FLOW / CAPITAL STRUCTURE");
    let dps = rows.detail("Dividend per security (DPS)", Some("A\u{a2}"));
    let shares = rows.detail("Securities on issue (approx)", Some("m"));
    let net_debt = rows.detail("Net debt issuance / (repayment)", Some("A$m"));
    let other_ops_growth = rows.detail("Other operating adj. growth rate", Some("%"));
    let equity_iss = rows.detail("Equity issuance rate (DRP)", Some("%"));
    rows.blank();

    rows.section("NOTES ASSUMPTIONS");
    let constr_growth = rows.detail("Construction revenue growth", Some("%"));
    let mat_1_2 = rows.detail("Debt maturity 1-2yr as % of total", Some("%"));
    let mat_2_5 = rows.detail("Debt maturity 2-5yr as % of total", Some("%"));
    let cap_borrow = rows.detail("Capitalised borrowing costs factor", Some("%"));
    let non_ded = rows.detail("Forecast non-deductible amortisation", Some("A$m"));
    let tax_conc = rows.detail("Forecast tax concessions", Some("A$m"));
    let other_perm = rows.detail("Forecast other perm. differences", Some("A$m"));
    let cap_commit = rows.detail("Capital commitments multiple of capex", Some("x"));
    let op_lease_growth = rows.detail("Operating lease growth rate", Some("%"));
    let contingent = rows.detail("Forecast contingent liabilities", Some("A$m"));

    let driver_rows = DriverRows {
        toggle_toll,
        toggle_other,
        toggle_opex,
        toggle_da,
        toggle_cod,
        toggle_tax,
        toll_growth_input,
        toll_growth,
        other_growth_input,
        other_growth,
        opex_pct_input,
        opex_pct,
        emp_pct,
        emp_share,
        road_share,
        da_pct_input,
        da_pct,
        da_ppe,
        da_intang,
        cost_of_debt_input,
        cost_of_debt,
        tax_rate_input,
        tax_rate,
        stat_tax,
        curr_borrow_pct,
        drp_rate,
        capex,
        rec_days,
        pay_days,
        oca_growth,
        jv_growth,
        onca_growth,
        ocl_growth,
        oncl_growth,
        dps,
        shares,
        net_debt,
        other_ops_growth,
        equity_iss,
        constr_growth,
        mat_1_2,
        mat_2_5,
        cap_borrow,
        non_ded,
        tax_conc,
        other_perm,
        cap_commit,
        op_lease_growth,
        contingent,
    };

    (rows.finish(), driver_rows)
}

/// Write a driver row entered in percent points (stored as fractions).
fn pct_row(cells: &mut Vec<CellSpec>, row: u32, values: &[f64; 10]) {
    for p in Period::all() {
        let style = if p.is_forecast() {
            CellStyle::Input
        } else {
            CellStyle::Auto
        };
        cells.push(
            CellSpec::number(row, p.col, values[p.index()] / 100.0, NumFmt::Percent)
                .with_style(style),
        );
    }
}

/// Write a driver row of plain numbers.
fn num_row(cells: &mut Vec<CellSpec>, row: u32, values: &[f64; 10], fmt: NumFmt) {
    for p in Period::all() {
        let style = if p.is_forecast() {
            CellStyle::Input
        } else {
            CellStyle::Auto
        };
        cells.push(CellSpec::number(row, p.col, values[p.index()], fmt).with_style(style));
    }
}

/// Write an active driver row: historical columns mirror the input row,
/// forecast columns switch on the scenario toggle between the raw input
/// and the trailing 3-year historical average.
fn active_row(cells: &mut Vec<CellSpec>, active: u32, input: u32, toggle: u32) {
    for p in Period::historical() {
        cells.push(CellSpec::formula(
            active,
            p.col,
            cell(p.col, input),
            NumFmt::Percent,
        ));
    }
    for p in Period::forecast() {
        let expr = iff(
            eq(abs_cell(UNIT_COL, toggle), text("3yr Avg")),
            call("AVERAGE", vec![row_range(HIST_END - 2, HIST_END, input)]),
            cell(p.col, input),
        );
        cells.push(
            CellSpec::formula(active, p.col, expr, NumFmt::Percent).with_style(CellStyle::Input),
        );
    }
}

pub fn sheet(rows: Vec<RowSpec>, d: &DriverRows) -> SheetSpec {
    let mut cells = Vec::new();

    for toggle in [
        d.toggle_toll,
        d.toggle_other,
        d.toggle_opex,
        d.toggle_da,
        d.toggle_cod,
        d.toggle_tax,
    ] {
        cells.push(CellSpec::text(toggle, UNIT_COL, "Forecast").with_style(CellStyle::Toggle));
    }

    pct_row(&mut cells, d.toll_growth_input, &TOLL_GROWTH);
    active_row(&mut cells, d.toll_growth, d.toll_growth_input, d.toggle_toll);
    pct_row(&mut cells, d.other_growth_input, &OTHER_GROWTH);
    active_row(
        &mut cells,
        d.other_growth,
        d.other_growth_input,
        d.toggle_other,
    );

    pct_row(&mut cells, d.opex_pct_input, &OPEX_PCT);
    active_row(&mut cells, d.opex_pct, d.opex_pct_input, d.toggle_opex);
    pct_row(&mut cells, d.emp_pct, &EMP_PCT);
    pct_row(&mut cells, d.emp_share, &EMP_SHARE);
    pct_row(&mut cells, d.road_share, &ROAD_SHARE);

    pct_row(&mut cells, d.da_pct_input, &DA_PCT);
    active_row(&mut cells, d.da_pct, d.da_pct_input, d.toggle_da);
    pct_row(&mut cells, d.da_ppe, &DA_PPE);
    pct_row(&mut cells, d.da_intang, &DA_INTANG);

    pct_row(&mut cells, d.cost_of_debt_input, &COST_OF_DEBT);
    active_row(
        &mut cells,
        d.cost_of_debt,
        d.cost_of_debt_input,
        d.toggle_cod,
    );
    pct_row(&mut cells, d.tax_rate_input, &TAX_RATE);
    active_row(&mut cells, d.tax_rate, d.tax_rate_input, d.toggle_tax);
    pct_row(&mut cells, d.stat_tax, &STAT_TAX);
    pct_row(&mut cells, d.curr_borrow_pct, &CURR_BORROW_PCT);
    pct_row(&mut cells, d.drp_rate, &DRP_RATE);

    num_row(&mut cells, d.capex, &CAPEX, NumFmt::Number);
    num_row(&mut cells, d.rec_days, &REC_DAYS, NumFmt::Number);
    num_row(&mut cells, d.pay_days, &PAY_DAYS, NumFmt::Number);
    pct_row(&mut cells, d.oca_growth, &OCA_GROWTH);
    pct_row(&mut cells, d.jv_growth, &JV_GROWTH);
    pct_row(&mut cells, d.onca_growth, &ONCA_GROWTH);
    pct_row(&mut cells, d.ocl_growth, &OCL_GROWTH);
    pct_row(&mut cells, d.oncl_growth, &ONCL_GROWTH);

    num_row(&mut cells, d.dps, &DPS, NumFmt::Number1dp);
    num_row(&mut cells, d.shares, &SHARES, NumFmt::Number);
    num_row(&mut cells, d.net_debt, &NET_DEBT, NumFmt::Number);
    pct_row(&mut cells, d.other_ops_growth, &OTHER_OPS_GROWTH);
    pct_row(&mut cells, d.equity_iss, &EQUITY_ISS);

    pct_row(&mut cells, d.constr_growth, &CONSTR_GROWTH);
    pct_row(&mut cells, d.mat_1_2, &MAT_1_2);
    pct_row(&mut cells, d.mat_2_5, &MAT_2_5);
    pct_row(&mut cells, d.cap_borrow, &CAP_BORROW);
    num_row(&mut cells, d.non_ded, &NON_DED, NumFmt::Number);
    num_row(&mut cells, d.tax_conc, &TAX_CONC, NumFmt::Number);
    num_row(&mut cells, d.other_perm, &OTHER_PERM, NumFmt::Number);
    num_row(&mut cells, d.cap_commit, &CAP_COMMIT, NumFmt::Number1dp);
    pct_row(&mut cells, d.op_lease_growth, &OP_LEASE_GROWTH);
    num_row(&mut cells, d.contingent, &CONTINGENT, NumFmt::Number);

    SheetSpec {
        statement: Statement::Assumptions,
        title: format!("{} ({}) \u{2013} Forecast Assumptions & Key Drivers", COMPANY, TICKER),
        subtitle: "All figures in A$ millions unless otherwise stated.  Fiscal year ends 30 June.",
        header_row: HEADER_ROW,
        header_label: "Assumption / Driver",
        unit_header: Some("Unit"),
        rows,
        cells,
        freeze: (HEADER_ROW, 2),
        label_width: 40.0,
        data_width: 14.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FC_START;
    use crate::types::CellContent;

    #[test]
    fn test_layout_matches_expected_grid() {
        let (_, d) = layout();
        assert_eq!(d.toggle_toll, 5);
        assert_eq!(d.toggle_tax, 10);
        // Driver table resumes below the header row
        assert_eq!(d.toll_growth_input, 15);
        assert_eq!(d.toll_growth, 16);
        assert_eq!(d.contingent, 69);
    }

    #[test]
    fn test_active_forecast_cells_reference_the_toggle() {
        let (rows, d) = layout();
        let spec = sheet(rows, &d);

        let active = spec
            .cells
            .iter()
            .find(|c| c.row == d.toll_growth && c.col == FC_START)
            .unwrap();
        match &active.content {
            CellContent::Formula(expr) => {
                let rendered = expr.render();
                assert_eq!(
                    rendered,
                    format!(
                        "IF($B${}=\"3yr Avg\",AVERAGE(E{}:G{}),H{})",
                        d.toggle_toll, d.toll_growth_input, d.toll_growth_input, d.toll_growth_input
                    )
                );
            }
            other => panic!("expected formula, got {:?}", other),
        }
    }

    #[test]
    fn test_percent_inputs_are_scaled_to_fractions() {
        let (rows, d) = layout();
        let spec = sheet(rows, &d);

        let first = spec
            .cells
            .iter()
            .find(|c| c.row == d.toll_growth_input && c.col == crate::layout::HIST_START)
            .unwrap();
        match first.content {
            CellContent::Number(v) => assert!((v - (-0.042)).abs() < 1e-12),
            _ => panic!("expected literal"),
        }
        assert_eq!(first.fmt, NumFmt::Percent);
    }

    #[test]
    fn test_every_driver_row_is_fully_populated() {
        let (rows, d) = layout();
        let spec = sheet(rows, &d);
        for row in [d.capex, d.dps, d.stat_tax, d.contingent] {
            let count = spec.cells.iter().filter(|c| c.row == row).count();
            assert_eq!(count, 10, "driver row {} must span all ten periods", row);
        }
    }
}
