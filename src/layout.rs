//! Fixed column grid shared by every worksheet.
//!
//! Column A holds row labels, column B units, columns C-G the five
//! historical fiscal years (FY21-FY25) and columns H-L the five forecast
//! years (FY26F-FY30F). Ten data columns total, historical always to the
//! left of forecast.

/// Label column (A).
pub const LABEL_COL: u16 = 0;
/// Unit column (B).
pub const UNIT_COL: u16 = 1;
/// First historical data column (C = FY21).
pub const HIST_START: u16 = 2;
/// Last historical data column (G = FY25).
pub const HIST_END: u16 = 6;
/// First forecast data column (H = FY26F).
pub const FC_START: u16 = 7;
/// Last forecast data column (L = FY30F).
pub const FC_END: u16 = 11;
/// Rightmost column used on any sheet.
pub const MAX_COL: u16 = FC_END;

pub const HIST_YEARS: usize = 5;
pub const FC_YEARS: usize = 5;

/// Column headers for the ten data columns, left to right.
pub const FY_LABELS: [&str; 10] = [
    "FY21", "FY22", "FY23", "FY24", "FY25", "FY26F", "FY27F", "FY28F", "FY29F", "FY30F",
];

/// One fiscal-year column of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub col: u16,
}

impl Period {
    /// All ten periods in chronological order.
    pub fn all() -> impl Iterator<Item = Period> {
        (HIST_START..=FC_END).map(|col| Period { col })
    }

    /// The five historical periods (FY21-FY25).
    pub fn historical() -> impl Iterator<Item = Period> {
        (HIST_START..=HIST_END).map(|col| Period { col })
    }

    /// The five forecast periods (FY26F-FY30F).
    pub fn forecast() -> impl Iterator<Item = Period> {
        (FC_START..=FC_END).map(|col| Period { col })
    }

    pub fn is_forecast(self) -> bool {
        self.col >= FC_START
    }

    /// Zero-based index into the ten-column data range.
    pub fn index(self) -> usize {
        (self.col - HIST_START) as usize
    }

    pub fn label(self) -> &'static str {
        FY_LABELS[self.index()]
    }

    /// The column immediately to the left (prior fiscal year).
    pub fn prev_col(self) -> u16 {
        self.col - 1
    }
}

/// Convert a zero-based column index to an Excel column letter.
///
/// Examples: 0 -> A, 1 -> B, 25 -> Z, 26 -> AA.
pub fn column_letter(index: u16) -> String {
    let mut result = String::new();
    let mut idx = index as usize;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}
