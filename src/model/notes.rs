//! Notes to the Financial Statements sheet.
//!
//! Seven notes: revenue breakdown, segment reporting, intangible assets,
//! borrowings, income tax, distributions, and commitments. Most lines
//! link back into the three statements so the notes stay live when a
//! driver changes; segment reporting is historical disclosure only.

use crate::formula::{cell, Expr};
use crate::layout::{Period, HIST_START, HIST_YEARS};
use crate::model::assumptions::DriverRows;
use crate::model::balance::BalanceRows;
use crate::model::cashflow::CashflowRows;
use crate::model::income::IncomeRows;
use crate::model::{assum, growth, on, prior, COMPANY};
use crate::types::{CellSpec, NumFmt, RowBuilder, RowSpec, SheetSpec, Statement};

#[derive(Debug, Clone)]
pub struct NotesRows {
    // Note 1: revenue breakdown
    pub toll: u32,
    pub construction: u32,
    pub other_rev: u32,
    pub total_rev: u32,

    // Note 2: segment reporting (historical disclosure)
    pub melb_rev: u32,
    pub melb_ebitda: u32,
    pub syd_rev: u32,
    pub syd_ebitda: u32,
    pub bris_rev: u32,
    pub bris_ebitda: u32,
    pub na_rev: u32,
    pub na_ebitda: u32,
    pub total_seg_rev: u32,
    pub total_seg_ebitda: u32,
    pub recon_ebitda: u32,

    // Note 3: intangible assets roll-forward
    pub intang_open: u32,
    pub intang_add: u32,
    pub intang_amort: u32,
    pub intang_close: u32,
    pub intang_check: u32,

    // Note 4: borrowings
    pub curr_debt: u32,
    pub nc_debt: u32,
    pub total_debt: u32,
    pub mat_within_1: u32,
    pub mat_1_2: u32,
    pub mat_2_5: u32,
    pub mat_over_5: u32,
    pub mat_total: u32,
    pub interest: u32,
    pub cap_costs: u32,
    pub eff_rate: u32,

    // Note 5: income tax reconciliation
    pub pbt: u32,
    pub tax_stat: u32,
    pub non_ded: u32,
    pub tax_conc: u32,
    pub other_perm: u32,
    pub total_adj: u32,
    pub tax_exp: u32,
    pub etr: u32,
    pub etr_assum: u32,

    // Note 6: distributions
    pub dps: u32,
    pub shares: u32,
    pub dist_paid: u32,
    pub payout: u32,
    pub franking: u32,

    // Note 7: commitments & contingencies
    pub cap_commit: u32,
    pub op_lease: u32,
    pub contingent: u32,
}

// Historical disclosures FY21-FY25, A$ millions unless noted.
pub const HIST_CONSTRUCTION_REV: [f64; HIST_YEARS] = [180.0, 320.0, 540.0, 420.0, 350.0];
pub const HIST_MELB_REV: [f64; HIST_YEARS] = [820.0, 920.0, 1_080.0, 1_150.0, 1_220.0];
pub const HIST_MELB_EBITDA: [f64; HIST_YEARS] = [620.0, 710.0, 840.0, 900.0, 960.0];
pub const HIST_SYD_REV: [f64; HIST_YEARS] = [1_050.0, 1_220.0, 1_520.0, 1_680.0, 1_800.0];
pub const HIST_SYD_EBITDA: [f64; HIST_YEARS] = [750.0, 890.0, 1_120.0, 1_250.0, 1_350.0];
pub const HIST_BRIS_REV: [f64; HIST_YEARS] = [430.0, 480.0, 560.0, 600.0, 640.0];
pub const HIST_BRIS_EBITDA: [f64; HIST_YEARS] = [310.0, 350.0, 410.0, 440.0, 470.0];
pub const HIST_NA_REV: [f64; HIST_YEARS] = [478.0, 521.0, 627.0, 652.0, 690.0];
pub const HIST_NA_EBITDA: [f64; HIST_YEARS] = [120.0, 150.0, 205.0, 230.0, 260.0];
pub const HIST_INTANG_OPENING: f64 = 22_100.0;
pub const HIST_INTANG_ADDITIONS: [f64; HIST_YEARS] = [530.0, 680.0, 1_150.0, 880.0, 720.0];
pub const HIST_MATURITY_1_2: [f64; HIST_YEARS] = [1_100.0, 1_250.0, 1_400.0, 1_150.0, 1_050.0];
pub const HIST_MATURITY_2_5: [f64; HIST_YEARS] = [5_200.0, 5_650.0, 6_300.0, 6_400.0, 6_500.0];
pub const HIST_CAP_BORROW_COSTS: [f64; HIST_YEARS] = [45.0, 78.0, 125.0, 95.0, 80.0];
pub const HIST_NON_DED_AMORT: [f64; HIST_YEARS] = [215.0, 210.0, 205.0, 195.0, 190.0];
pub const HIST_TAX_CONCESSIONS: [f64; HIST_YEARS] = [-50.0, -48.0, -45.0, -42.0, -40.0];
pub const HIST_OTHER_PERM_DIFF: [f64; HIST_YEARS] = [25.0, 20.0, 15.0, 10.0, 8.0];
pub const HIST_CAP_COMMIT: [f64; HIST_YEARS] = [2_800.0, 3_200.0, 2_500.0, 1_800.0, 1_500.0];
pub const HIST_OP_LEASE_COMMIT: [f64; HIST_YEARS] = [85.0, 90.0, 95.0, 100.0, 105.0];
pub const HIST_CONTINGENT_LIAB: [f64; HIST_YEARS] = [150.0, 150.0, 160.0, 160.0, 170.0];

pub fn layout() -> (Vec<RowSpec>, NotesRows) {
    let mut rows = RowBuilder::new(5);

    rows.section("REVENUE BREAKDOWN");
    let toll = rows.detail("Toll revenue", Some("A$m"));
    let construction = rows.detail("Construction revenue", Some("A$m"));
    let other_rev = rows.detail("Other revenue", Some("A$m"));
    let total_rev = rows.subtotal("Total Revenue", Some("A$m"));
    rows.blank();

    rows.section("SEGMENT REPORTING");
    rows.detail("Melbourne (CityLink)", None);
    let melb_rev = rows.detail("  Revenue", Some("A$m"));
    let melb_ebitda = rows.detail("  EBITDA", Some("A$m"));
    rows.detail("Sydney", None);
    let syd_rev = rows.detail("  Revenue", Some("A$m"));
    let syd_ebitda = rows.detail("  EBITDA", Some("A$m"));
    rows.detail("Brisbane", None);
    let bris_rev = rows.detail("  Revenue", Some("A$m"));
    let bris_ebitda = rows.detail("  EBITDA", Some("A$m"));
    rows.detail("North America", None);
    let na_rev = rows.detail("  Revenue", Some("A$m"));
    let na_ebitda = rows.detail("  EBITDA", Some("A$m"));
    let total_seg_rev = rows.subtotal("Total segment revenue", Some("A$m"));
    let total_seg_ebitda = rows.subtotal("Total segment EBITDA", Some("A$m"));
    let recon_ebitda = rows.subtotal("Reconciliation to IS EBITDA", Some("A$m"));
    rows.blank();

    rows.section("INTANGIBLE ASSETS (CONCESSION RIGHTS)");
    let intang_open = rows.detail("Opening balance", Some("A$m"));
    let intang_add = rows.detail("Additions (capitalised construction)", Some("A$m"));
    let intang_amort = rows.detail("Amortisation charge", Some("A$m"));
    let intang_close = rows.subtotal("Closing balance", Some("A$m"));
    let intang_check = rows.check("Cross-check to BS", Some("A$m"));
    rows.blank();

    rows.section("BORROWINGS");
    let curr_debt = rows.detail("Current borrowings", Some("A$m"));
    let nc_debt = rows.detail("Non-current borrowings", Some("A$m"));
    let total_debt = rows.subtotal("Total borrowings", Some("A$m"));
    rows.blank();
    rows.detail("Maturity Profile", None);
    let mat_within_1 = rows.detail("  Within 1 year", Some("A$m"));
    let mat_1_2 = rows.detail("  1-2 years", Some("A$m"));
    let mat_2_5 = rows.detail("  2-5 years", Some("A$m"));
    let mat_over_5 = rows.detail("  Over 5 years", Some("A$m"));
    let mat_total = rows.check("  Total (maturity check)", Some("A$m"));
    rows.blank();
    rows.detail("Borrowing Costs", None);
    let interest = rows.detail("  Interest expense", Some("A$m"));
    let cap_costs = rows.detail("  Capitalised borrowing costs", Some("A$m"));
    let eff_rate = rows.detail("  Effective interest rate", Some("%"));
    rows.blank();

    rows.section("INCOME TAX");
    let pbt = rows.detail("Profit before tax", Some("A$m"));
    let tax_stat = rows.detail("Tax at statutory rate (30%)", Some("A$m"));
    rows.detail("Tax effect adjustments:", None);
    let non_ded = rows.detail("  Non-deductible amortisation", Some("A$m"));
    let tax_conc = rows.detail("  Tax concessions & offsets", Some("A$m"));
    let other_perm = rows.detail("  Other permanent differences", Some("A$m"));
    let total_adj = rows.subtotal("Total tax adjustments", Some("A$m"));
    let tax_exp = rows.subtotal("Income tax expense", Some("A$m"));
    let etr = rows.detail("Effective tax rate", Some("%"));
    let etr_assum = rows.check("ETR per Assumptions", Some("%"));
    rows.blank();

    rows.section("DIVIDENDS / DISTRIBUTIONS");
    let dps = rows.detail("DPS (cents per security)", Some("A\u{a2}"));
    let shares = rows.detail("Securities on issue (m)", Some("m"));
    let dist_paid = rows.detail("Total distributions paid", Some("A$m"));
    let payout = rows.detail("Payout ratio (% of NPAT)", Some("%"));
    let franking = rows.detail("Franking credits", Some("A$m"));
    rows.blank();

    rows.section("COMMITMENTS & CONTINGENCIES");
    let cap_commit = rows.detail("Capital commitments", Some("A$m"));
    let op_lease = rows.detail("Operating lease commitments", Some("A$m"));
    let contingent = rows.detail("Contingent liabilities", Some("A$m"));

    let notes_rows = NotesRows {
        toll,
        construction,
        other_rev,
        total_rev,
        melb_rev,
        melb_ebitda,
        syd_rev,
        syd_ebitda,
        bris_rev,
        bris_ebitda,
        na_rev,
        na_ebitda,
        total_seg_rev,
        total_seg_ebitda,
        recon_ebitda,
        intang_open,
        intang_add,
        intang_amort,
        intang_close,
        intang_check,
        curr_debt,
        nc_debt,
        total_debt,
        mat_within_1,
        mat_1_2,
        mat_2_5,
        mat_over_5,
        mat_total,
        interest,
        cap_costs,
        eff_rate,
        pbt,
        tax_stat,
        non_ded,
        tax_conc,
        other_perm,
        total_adj,
        tax_exp,
        etr,
        etr_assum,
        dps,
        shares,
        dist_paid,
        payout,
        franking,
        cap_commit,
        op_lease,
        contingent,
    };

    (rows.finish(), notes_rows)
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

/// A row carrying the same formula shape in all ten columns.
fn all_periods(
    cells: &mut Vec<CellSpec>,
    row: u32,
    fmt: NumFmt,
    f: impl Fn(Period) -> Expr,
) {
    for p in Period::all() {
        cells.push(CellSpec::formula(row, p.col, f(p), fmt));
    }
}

pub fn sheet(
    rows: Vec<RowSpec>,
    nr: &NotesRows,
    d: &DriverRows,
    ir: &IncomeRows,
    br: &BalanceRows,
    cf: &CashflowRows,
) -> SheetSpec {
    use Statement::{BalanceSheet, CashFlow, IncomeStatement};

    let mut cells = Vec::new();

    // Note 1: revenue breakdown
    all_periods(&mut cells, nr.toll, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.toll_rev, p)
    });
    hist_row(&mut cells, nr.construction, &HIST_CONSTRUCTION_REV);
    all_periods(&mut cells, nr.other_rev, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.other_rev, p)
    });
    all_periods(&mut cells, nr.total_rev, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.total_rev, p)
    });

    // Note 2: segment reporting, historical disclosure only
    hist_row(&mut cells, nr.melb_rev, &HIST_MELB_REV);
    hist_row(&mut cells, nr.melb_ebitda, &HIST_MELB_EBITDA);
    hist_row(&mut cells, nr.syd_rev, &HIST_SYD_REV);
    hist_row(&mut cells, nr.syd_ebitda, &HIST_SYD_EBITDA);
    hist_row(&mut cells, nr.bris_rev, &HIST_BRIS_REV);
    hist_row(&mut cells, nr.bris_ebitda, &HIST_BRIS_EBITDA);
    hist_row(&mut cells, nr.na_rev, &HIST_NA_REV);
    hist_row(&mut cells, nr.na_ebitda, &HIST_NA_EBITDA);
    for p in Period::historical() {
        cells.push(CellSpec::formula(
            nr.total_seg_rev,
            p.col,
            cell(p.col, nr.melb_rev)
                + cell(p.col, nr.syd_rev)
                + cell(p.col, nr.bris_rev)
                + cell(p.col, nr.na_rev),
            NumFmt::Accounting,
        ));
        cells.push(CellSpec::formula(
            nr.total_seg_ebitda,
            p.col,
            cell(p.col, nr.melb_ebitda)
                + cell(p.col, nr.syd_ebitda)
                + cell(p.col, nr.bris_ebitda)
                + cell(p.col, nr.na_ebitda),
            NumFmt::Accounting,
        ));
        cells.push(CellSpec::formula(
            nr.recon_ebitda,
            p.col,
            on(IncomeStatement, ir.ebitda, p),
            NumFmt::Accounting,
        ));
    }

    // Note 3: intangibles roll-forward. FY21 opens on the pre-history
    // balance; every later year opens on the prior closing balance.
    cells.push(CellSpec::number(
        nr.intang_open,
        HIST_START,
        HIST_INTANG_OPENING,
        NumFmt::Accounting,
    ));
    hist_row(&mut cells, nr.intang_add, &HIST_INTANG_ADDITIONS);
    for p in Period::all().skip(1) {
        cells.push(CellSpec::formula(
            nr.intang_open,
            p.col,
            prior(nr.intang_close, p),
            NumFmt::Accounting,
        ));
    }
    all_periods(&mut cells, nr.intang_amort, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.da, p) * assum(d.da_intang, p)
    });
    all_periods(&mut cells, nr.intang_close, NumFmt::Accounting, |p| {
        cell(p.col, nr.intang_open) + cell(p.col, nr.intang_add) + cell(p.col, nr.intang_amort)
    });
    all_periods(&mut cells, nr.intang_check, NumFmt::Accounting, |p| {
        on(BalanceSheet, br.intang, p)
    });

    // Note 4: borrowings and maturity profile
    all_periods(&mut cells, nr.curr_debt, NumFmt::Accounting, |p| {
        on(BalanceSheet, br.cur_debt, p)
    });
    all_periods(&mut cells, nr.nc_debt, NumFmt::Accounting, |p| {
        on(BalanceSheet, br.nc_debt, p)
    });
    all_periods(&mut cells, nr.total_debt, NumFmt::Accounting, |p| {
        on(BalanceSheet, br.total_borrow, p)
    });
    all_periods(&mut cells, nr.mat_within_1, NumFmt::Accounting, |p| {
        cell(p.col, nr.curr_debt)
    });
    hist_row(&mut cells, nr.mat_1_2, &HIST_MATURITY_1_2);
    hist_row(&mut cells, nr.mat_2_5, &HIST_MATURITY_2_5);
    for p in Period::forecast() {
        cells.push(CellSpec::formula(
            nr.mat_1_2,
            p.col,
            cell(p.col, nr.total_debt) * assum(d.mat_1_2, p),
            NumFmt::Accounting,
        ));
        cells.push(CellSpec::formula(
            nr.mat_2_5,
            p.col,
            cell(p.col, nr.total_debt) * assum(d.mat_2_5, p),
            NumFmt::Accounting,
        ));
    }
    all_periods(&mut cells, nr.mat_over_5, NumFmt::Accounting, |p| {
        cell(p.col, nr.total_debt)
            - cell(p.col, nr.mat_within_1)
            - cell(p.col, nr.mat_1_2)
            - cell(p.col, nr.mat_2_5)
    });
    all_periods(&mut cells, nr.mat_total, NumFmt::Accounting, |p| {
        cell(p.col, nr.mat_within_1)
            + cell(p.col, nr.mat_1_2)
            + cell(p.col, nr.mat_2_5)
            + cell(p.col, nr.mat_over_5)
    });
    all_periods(&mut cells, nr.interest, NumFmt::Accounting, |p| {
        -on(IncomeStatement, ir.net_finance, p)
    });
    hist_row(&mut cells, nr.cap_costs, &HIST_CAP_BORROW_COSTS);
    for p in Period::forecast() {
        cells.push(CellSpec::formula(
            nr.cap_costs,
            p.col,
            assum(d.capex, p) * assum(d.cost_of_debt, p) * assum(d.cap_borrow, p),
            NumFmt::Accounting,
        ));
    }
    all_periods(&mut cells, nr.eff_rate, NumFmt::Percent, |p| {
        assum(d.cost_of_debt, p)
    });

    // Note 5: income tax reconciliation
    all_periods(&mut cells, nr.pbt, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.pbt, p)
    });
    all_periods(&mut cells, nr.tax_stat, NumFmt::Accounting, |p| {
        cell(p.col, nr.pbt) * -assum(d.stat_tax, p)
    });
    hist_row(&mut cells, nr.non_ded, &HIST_NON_DED_AMORT);
    hist_row(&mut cells, nr.tax_conc, &HIST_TAX_CONCESSIONS);
    hist_row(&mut cells, nr.other_perm, &HIST_OTHER_PERM_DIFF);
    for p in Period::forecast() {
        for (row, driver) in [
            (nr.non_ded, d.non_ded),
            (nr.tax_conc, d.tax_conc),
            (nr.other_perm, d.other_perm),
        ] {
            cells.push(CellSpec::formula(
                row,
                p.col,
                assum(driver, p),
                NumFmt::Accounting,
            ));
        }
    }
    all_periods(&mut cells, nr.total_adj, NumFmt::Accounting, |p| {
        cell(p.col, nr.non_ded) + cell(p.col, nr.tax_conc) + cell(p.col, nr.other_perm)
    });
    all_periods(&mut cells, nr.tax_exp, NumFmt::Accounting, |p| {
        on(IncomeStatement, ir.tax, p)
    });
    all_periods(&mut cells, nr.etr, NumFmt::Percent, |p| {
        cell(p.col, nr.tax_exp) / cell(p.col, nr.pbt)
    });
    all_periods(&mut cells, nr.etr_assum, NumFmt::Percent, |p| {
        assum(d.tax_rate, p)
    });

    // Note 6: distributions
    all_periods(&mut cells, nr.dps, NumFmt::Number1dp, |p| assum(d.dps, p));
    all_periods(&mut cells, nr.shares, NumFmt::Number, |p| {
        assum(d.shares, p)
    });
    all_periods(&mut cells, nr.dist_paid, NumFmt::Accounting, |p| {
        on(CashFlow, cf.div_paid, p)
    });
    all_periods(&mut cells, nr.payout, NumFmt::Percent, |p| {
        -cell(p.col, nr.dist_paid) / on(IncomeStatement, ir.npat, p)
    });
    for p in Period::all() {
        cells.push(CellSpec::number(nr.franking, p.col, 0.0, NumFmt::Accounting));
    }

    // Note 7: commitments & contingencies
    hist_row(&mut cells, nr.cap_commit, &HIST_CAP_COMMIT);
    hist_row(&mut cells, nr.op_lease, &HIST_OP_LEASE_COMMIT);
    hist_row(&mut cells, nr.contingent, &HIST_CONTINGENT_LIAB);
    for p in Period::forecast() {
        cells.push(CellSpec::formula(
            nr.cap_commit,
            p.col,
            assum(d.capex, p) * assum(d.cap_commit, p),
            NumFmt::Accounting,
        ));
        cells.push(CellSpec::formula(
            nr.op_lease,
            p.col,
            growth(nr.op_lease, d.op_lease_growth, p),
            NumFmt::Accounting,
        ));
        cells.push(CellSpec::formula(
            nr.contingent,
            p.col,
            assum(d.contingent, p),
            NumFmt::Accounting,
        ));
    }

    // Construction revenue forecast rolls the prior year forward
    for p in Period::forecast() {
        cells.push(CellSpec::formula(
            nr.construction,
            p.col,
            growth(nr.construction, d.constr_growth, p),
            NumFmt::Accounting,
        ));
        // Forecast additions capitalise the construction programme
        cells.push(CellSpec::formula(
            nr.intang_add,
            p.col,
            cell(p.col, nr.construction),
            NumFmt::Accounting,
        ));
    }

    SheetSpec {
        statement: Statement::Notes,
        title: format!("{} \u{2013} Notes to the Financial Statements", COMPANY),
        subtitle: "A$ millions  |  Fiscal year ends 30 June",
        header_row: 4,
        header_label: "Notes",
        unit_header: None,
        rows,
        cells,
        freeze: (4, 2),
        label_width: 40.0,
        data_width: 15.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FC_START, HIST_START};
    use crate::model::{assumptions, balance, cashflow, income};
    use crate::types::CellContent;
    use pretty_assertions::assert_eq;

    fn build() -> (SheetSpec, NotesRows) {
        let (_, d) = assumptions::layout();
        let (_, ir) = income::layout();
        let (_, br) = balance::layout();
        let (_, cf) = cashflow::layout();
        let (rows, nr) = layout();
        let spec = sheet(rows, &nr, &d, &ir, &br, &cf);
        (spec, nr)
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
    fn test_toll_revenue_links_to_income_statement_in_every_column() {
        let (spec, nr) = build();
        let (_, ir) = income::layout();
        assert_eq!(
            formula_at(&spec, nr.toll, HIST_START),
            format!("'Income Statement'!C{}", ir.toll_rev)
        );
        assert_eq!(
            formula_at(&spec, nr.toll, FC_START),
            format!("'Income Statement'!H{}", ir.toll_rev)
        );
    }

    #[test]
    fn test_segment_totals_are_historical_only() {
        let (spec, nr) = build();
        let count = spec
            .cells
            .iter()
            .filter(|c| c.row == nr.total_seg_rev)
            .count();
        assert_eq!(count, HIST_YEARS);
    }

    #[test]
    fn test_intangibles_open_on_prior_year_closing() {
        let (spec, nr) = build();
        let formula = formula_at(&spec, nr.intang_open, HIST_START + 1);
        assert_eq!(formula, format!("C{}", nr.intang_close));
    }

    #[test]
    fn test_statutory_tax_line_negates_the_statutory_rate() {
        let (spec, nr) = build();
        let (_, d) = assumptions::layout();
        let formula = formula_at(&spec, nr.tax_stat, FC_START);
        assert_eq!(
            formula,
            format!("H{}*-Assumptions!H{}", nr.pbt, d.stat_tax)
        );
    }

    #[test]
    fn test_maturity_check_sums_the_profile() {
        let (spec, nr) = build();
        let formula = formula_at(&spec, nr.mat_total, FC_START);
        assert_eq!(
            formula,
            format!(
                "H{}+H{}+H{}+H{}",
                nr.mat_within_1, nr.mat_1_2, nr.mat_2_5, nr.mat_over_5
            )
        );
    }

    #[test]
    fn test_capitalised_borrowing_costs_formula() {
        let (spec, nr) = build();
        let (_, d) = assumptions::layout();
        let formula = formula_at(&spec, nr.cap_costs, FC_START);
        assert_eq!(
            formula,
            format!(
                "Assumptions!H{}*Assumptions!H{}*Assumptions!H{}",
                d.capex, d.cost_of_debt, d.cap_borrow
            )
        );
    }
}
