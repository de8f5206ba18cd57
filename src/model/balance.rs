//! Balance Sheet sheet.
//!
//! Retained earnings is the balancing plug in the historical columns so
//! that Assets = Liabilities + Equity holds exactly; the check row at the
//! bottom carries the Assets - L&E formula in every column.

use crate::formula::{cell, num};
use crate::layout::{Period, HIST_YEARS};
use crate::model::assumptions::DriverRows;
use crate::model::cashflow::CashflowRows;
use crate::model::income::IncomeRows;
use crate::model::{assum, growth, on, prior, COMPANY};
use crate::types::{CellSpec, NumFmt, RowBuilder, RowSpec, SheetSpec, Statement};

#[derive(Debug, Clone)]
pub struct BalanceRows {
    pub cash: u32,
    pub recv: u32,
    pub oca: u32,
    pub total_ca: u32,
    pub ppe: u32,
    pub intang: u32,
    pub jv: u32,
    pub onca: u32,
    pub total_nca: u32,
    pub total_assets: u32,
    pub pay: u32,
    pub cur_debt: u32,
    pub ocl: u32,
    pub total_cl: u32,
    pub nc_debt: u32,
    pub oncl: u32,
    pub total_ncl: u32,
    pub total_borrow: u32,
    pub total_liab: u32,
    pub share_cap: u32,
    pub retained: u32,
    pub reserves: u32,
    pub total_eq: u32,
    pub total_le: u32,
    pub check: u32,
}

// Historical balances FY21-FY25, A$ millions.
pub const HIST_CASH: [f64; HIST_YEARS] = [2_548.0, 3_145.0, 2_780.0, 2_350.0, 2_520.0];
pub const HIST_RECV: [f64; HIST_YEARS] = [213.0, 224.0, 260.0, 269.0, 286.0];
pub const HIST_OTHER_CA: [f64; HIST_YEARS] = [195.0, 210.0, 225.0, 230.0, 240.0];
pub const HIST_PPE: [f64; HIST_YEARS] = [6_125.0, 6_850.0, 7_900.0, 8_100.0, 8_050.0];
pub const HIST_INTANGIBLES: [f64; HIST_YEARS] =
    [22_450.0, 23_100.0, 24_200.0, 24_650.0, 24_800.0];
pub const HIST_INVEST_JV: [f64; HIST_YEARS] = [1_820.0, 1_750.0, 1_680.0, 1_620.0, 1_580.0];
pub const HIST_OTHER_NCA: [f64; HIST_YEARS] = [1_250.0, 1_380.0, 1_520.0, 1_580.0, 1_620.0];
pub const HIST_PAYABLES: [f64; HIST_YEARS] = [485.0, 510.0, 555.0, 530.0, 550.0];
pub const HIST_CURRENT_DEBT: [f64; HIST_YEARS] = [1_250.0, 1_400.0, 1_600.0, 1_300.0, 1_200.0];
pub const HIST_OTHER_CL: [f64; HIST_YEARS] = [580.0, 620.0, 680.0, 710.0, 740.0];
pub const HIST_NC_DEBT: [f64; HIST_YEARS] = [19_580.0, 21_230.0, 23_430.0, 23_730.0, 23_830.0];
pub const HIST_OTHER_NCL: [f64; HIST_YEARS] = [2_350.0, 2_480.0, 2_620.0, 2_700.0, 2_780.0];
pub const HIST_SHARE_CAP: [f64; HIST_YEARS] = [13_845.0, 14_250.0, 14_680.0, 15_020.0, 15_310.0];
pub const HIST_RESERVES: [f64; HIST_YEARS] = [358.0, 380.0, 380.0, 400.0, 412.0];

pub fn hist_total_ca(i: usize) -> f64 {
    HIST_CASH[i] + HIST_RECV[i] + HIST_OTHER_CA[i]
}

pub fn hist_total_nca(i: usize) -> f64 {
    HIST_PPE[i] + HIST_INTANGIBLES[i] + HIST_INVEST_JV[i] + HIST_OTHER_NCA[i]
}

pub fn hist_total_assets(i: usize) -> f64 {
    hist_total_ca(i) + hist_total_nca(i)
}

pub fn hist_total_cl(i: usize) -> f64 {
    HIST_PAYABLES[i] + HIST_CURRENT_DEBT[i] + HIST_OTHER_CL[i]
}

pub fn hist_total_ncl(i: usize) -> f64 {
    HIST_NC_DEBT[i] + HIST_OTHER_NCL[i]
}

pub fn hist_total_borrow(i: usize) -> f64 {
    HIST_CURRENT_DEBT[i] + HIST_NC_DEBT[i]
}

pub fn hist_total_liab(i: usize) -> f64 {
    hist_total_cl(i) + hist_total_ncl(i)
}

/// Retained earnings is the plug so that Assets = Liabilities + Equity.
pub fn hist_retained(i: usize) -> f64 {
    hist_total_assets(i) - hist_total_liab(i) - HIST_SHARE_CAP[i] - HIST_RESERVES[i]
}

pub fn hist_total_eq(i: usize) -> f64 {
    HIST_SHARE_CAP[i] + hist_retained(i) + HIST_RESERVES[i]
}

pub fn hist_total_le(i: usize) -> f64 {
    hist_total_liab(i) + hist_total_eq(i)
}

pub fn layout() -> (Vec<RowSpec>, BalanceRows) {
    let mut rows = RowBuilder::new(5);

    rows.section("ASSETS");
    rows.section("Current Assets");
    let cash = rows.detail("Cash & cash equivalents", Some("A$m"));
    let recv = rows.detail("Trade & other receivables", Some("A$m"));
    let oca = rows.detail("Other current assets", Some("A$m"));
    let total_ca = rows.subtotal("Total Current Assets", Some("A$m"));
    rows.blank();

    rows.section("Non-Current Assets");
    let ppe = rows.detail("Property, plant & equipment", Some("A$m"));
    let intang = rows.detail("Intangible assets (concessions)", Some("A$m"));
    let jv = rows.detail("Investments in joint ventures", Some("A$m"));
    let onca = rows.detail("Other non-current assets", Some("A$m"));
    let total_nca = rows.subtotal("Total Non-Current Assets", Some("A$m"));
    rows.blank();

    let total_assets = rows.subtotal("Total Assets", Some("A$m"));
    rows.blank();

    rows.section("LIABILITIES");
    rows.section("Current Liabilities");
    let pay = rows.detail("Trade & other payables", Some("A$m"));
    let cur_debt = rows.detail("Current borrowings", Some("A$m"));
    let ocl = rows.detail("Other current liabilities", Some("A$m"));
    let total_cl = rows.subtotal("Total Current Liabilities", Some("A$m"));
    rows.blank();

    rows.section("Non-Current Liabilities");
    let nc_debt = rows.detail("Non-current borrowings", Some("A$m"));
    let oncl = rows.detail("Other non-current liabilities", Some("A$m"));
    let total_ncl = rows.subtotal("Total Non-Current Liabilities", Some("A$m"));
    let total_borrow = rows.subtotal("Total Borrowings (current + non-current)", Some("A$m"));
    rows.blank();

    let total_liab = rows.subtotal("Total Liabilities", Some("A$m"));
    rows.blank();

    rows.section("EQUITY");
    let share_cap = rows.detail("Share capital", Some("A$m"));
    let retained = rows.detail("Retained earnings / (losses)", Some("A$m"));
    let reserves = rows.detail("Reserves", Some("A$m"));
    let total_eq = rows.subtotal("Total Equity", Some("A$m"));
    rows.blank();

    let total_le = rows.subtotal("Total Liabilities & Equity", Some("A$m"));
    rows.blank();

    let check = rows.check("Balance Sheet Check (Assets - L&E)", Some("A$m"));

    let balance_rows = BalanceRows {
        cash,
        recv,
        oca,
        total_ca,
        ppe,
        intang,
        jv,
        onca,
        total_nca,
        total_assets,
        pay,
        cur_debt,
        ocl,
        total_cl,
        nc_debt,
        oncl,
        total_ncl,
        total_borrow,
        total_liab,
        share_cap,
        retained,
        reserves,
        total_eq,
        total_le,
        check,
    };

    (rows.finish(), balance_rows)
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

pub fn sheet(
    rows: Vec<RowSpec>,
    br: &BalanceRows,
    d: &DriverRows,
    ir: &IncomeRows,
    cf: &CashflowRows,
) -> SheetSpec {
    let mut cells = Vec::new();

    hist_row(&mut cells, br.cash, &HIST_CASH);
    hist_row(&mut cells, br.recv, &HIST_RECV);
    hist_row(&mut cells, br.oca, &HIST_OTHER_CA);
    hist_derived(&mut cells, br.total_ca, hist_total_ca);
    hist_row(&mut cells, br.ppe, &HIST_PPE);
    hist_row(&mut cells, br.intang, &HIST_INTANGIBLES);
    hist_row(&mut cells, br.jv, &HIST_INVEST_JV);
    hist_row(&mut cells, br.onca, &HIST_OTHER_NCA);
    hist_derived(&mut cells, br.total_nca, hist_total_nca);
    hist_derived(&mut cells, br.total_assets, hist_total_assets);
    hist_row(&mut cells, br.pay, &HIST_PAYABLES);
    hist_row(&mut cells, br.cur_debt, &HIST_CURRENT_DEBT);
    hist_row(&mut cells, br.ocl, &HIST_OTHER_CL);
    hist_derived(&mut cells, br.total_cl, hist_total_cl);
    hist_row(&mut cells, br.nc_debt, &HIST_NC_DEBT);
    hist_row(&mut cells, br.oncl, &HIST_OTHER_NCL);
    hist_derived(&mut cells, br.total_ncl, hist_total_ncl);
    hist_derived(&mut cells, br.total_borrow, hist_total_borrow);
    hist_derived(&mut cells, br.total_liab, hist_total_liab);
    hist_row(&mut cells, br.share_cap, &HIST_SHARE_CAP);
    hist_derived(&mut cells, br.retained, hist_retained);
    hist_row(&mut cells, br.reserves, &HIST_RESERVES);
    hist_derived(&mut cells, br.total_eq, hist_total_eq);
    hist_derived(&mut cells, br.total_le, hist_total_le);

    // Check row carries the Assets - L&E formula in every column,
    // historical included
    for p in Period::all() {
        cells.push(CellSpec::formula(
            br.check,
            p.col,
            cell(p.col, br.total_assets) - cell(p.col, br.total_le),
            NumFmt::Accounting,
        ));
    }

    for p in Period::forecast() {
        let mut push = |row: u32, expr| {
            cells.push(CellSpec::formula(row, p.col, expr, NumFmt::Accounting));
        };

        // Assets
        push(br.cash, on(Statement::CashFlow, cf.close_cash, p));
        push(
            br.recv,
            on(Statement::IncomeStatement, ir.total_rev, p) / num(365.0) * assum(d.rec_days, p),
        );
        push(br.oca, growth(br.oca, d.oca_growth, p));
        push(
            br.total_ca,
            cell(p.col, br.cash) + cell(p.col, br.recv) + cell(p.col, br.oca),
        );

        // PP&E rolls forward: opening + capex + allocated D&A (negative)
        push(
            br.ppe,
            prior(br.ppe, p)
                + assum(d.capex, p)
                + on(Statement::IncomeStatement, ir.da, p) * assum(d.da_ppe, p),
        );
        push(
            br.intang,
            prior(br.intang, p)
                + on(Statement::IncomeStatement, ir.da, p) * assum(d.da_intang, p),
        );
        push(br.jv, growth(br.jv, d.jv_growth, p));
        push(br.onca, growth(br.onca, d.onca_growth, p));
        push(
            br.total_nca,
            cell(p.col, br.ppe)
                + cell(p.col, br.intang)
                + cell(p.col, br.jv)
                + cell(p.col, br.onca),
        );
        push(
            br.total_assets,
            cell(p.col, br.total_ca) + cell(p.col, br.total_nca),
        );

        // Liabilities
        push(
            br.pay,
            -on(Statement::IncomeStatement, ir.total_opex, p) / num(365.0)
                * assum(d.pay_days, p),
        );
        push(
            br.cur_debt,
            (prior(br.total_borrow, p) + assum(d.net_debt, p)) * assum(d.curr_borrow_pct, p),
        );
        push(br.ocl, growth(br.ocl, d.ocl_growth, p));
        push(
            br.total_cl,
            cell(p.col, br.pay) + cell(p.col, br.cur_debt) + cell(p.col, br.ocl),
        );
        push(
            br.nc_debt,
            prior(br.total_borrow, p) + assum(d.net_debt, p) - cell(p.col, br.cur_debt),
        );
        push(br.oncl, growth(br.oncl, d.oncl_growth, p));
        push(
            br.total_ncl,
            cell(p.col, br.nc_debt) + cell(p.col, br.oncl),
        );
        push(
            br.total_borrow,
            cell(p.col, br.cur_debt) + cell(p.col, br.nc_debt),
        );
        push(
            br.total_liab,
            cell(p.col, br.total_cl) + cell(p.col, br.total_ncl),
        );

        // Equity
        push(
            br.share_cap,
            prior(br.share_cap, p) * (num(1.0) + assum(d.drp_rate, p)),
        );
        push(
            br.retained,
            prior(br.retained, p) + on(Statement::IncomeStatement, ir.npat, p)
                - assum(d.dps, p) * assum(d.shares, p) / num(100.0),
        );
        push(br.reserves, prior(br.reserves, p));
        push(
            br.total_eq,
            cell(p.col, br.share_cap) + cell(p.col, br.retained) + cell(p.col, br.reserves),
        );
        push(
            br.total_le,
            cell(p.col, br.total_liab) + cell(p.col, br.total_eq),
        );
    }

    SheetSpec {
        statement: Statement::BalanceSheet,
        title: format!("{} \u{2013} Balance Sheet", COMPANY),
        subtitle: "A$ millions  |  As at 30 June",
        header_row: 4,
        header_label: "Balance Sheet",
        unit_header: None,
        rows,
        cells,
        freeze: (4, 2),
        label_width: 40.0,
        data_width: 15.0,
    }
}
