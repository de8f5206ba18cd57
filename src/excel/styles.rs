//! Cell formats for the workbook.
//!
//! One palette across all five sheets: dark-blue headers, light-blue
//! section banners, and a light-yellow wash over the forecast columns so
//! hardcoded history and formula-driven forecast read apart at a glance.

use crate::types::{CellStyle, NumFmt, RowKind};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

pub const DARK_BLUE: u32 = 0x1F3864;
pub const MED_BLUE: u32 = 0x2E75B6;
pub const LIGHT_BLUE: u32 = 0xD6E4F0;
pub const FORECAST_BG: u32 = 0xFFF2CC;
pub const GREEN_FONT: u32 = 0x006100;
pub const GREEN_FILL: u32 = 0xE2EFDA;
pub const SUBTITLE_GRAY: u32 = 0x666666;

pub const ACCT_FMT: &str = "#,##0;(#,##0);\"-\"";
pub const PCT_FMT: &str = "0.0%";
pub const NUM_FMT: &str = "#,##0";
pub const NUM_FMT_1DP: &str = "#,##0.0";

pub const FONT: &str = "Calibri";

fn base() -> Format {
    Format::new().set_font_name(FONT).set_font_size(11)
}

pub fn title() -> Format {
    Format::new()
        .set_font_name(FONT)
        .set_bold()
        .set_font_size(14)
        .set_font_color(Color::RGB(DARK_BLUE))
}

pub fn subtitle() -> Format {
    Format::new()
        .set_font_name(FONT)
        .set_italic()
        .set_font_size(10)
        .set_font_color(Color::RGB(SUBTITLE_GRAY))
}

/// White-on-dark-blue FY column header.
pub fn header() -> Format {
    base()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(DARK_BLUE))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Light-blue banner spanning a section header row.
pub fn section() -> Format {
    base()
        .set_bold()
        .set_font_color(Color::RGB(DARK_BLUE))
        .set_background_color(Color::RGB(LIGHT_BLUE))
}

fn num_format_code(fmt: NumFmt) -> &'static str {
    match fmt {
        NumFmt::Accounting => ACCT_FMT,
        NumFmt::Percent => PCT_FMT,
        NumFmt::Number => NUM_FMT,
        NumFmt::Number1dp => NUM_FMT_1DP,
    }
}

fn with_kind(format: Format, kind: RowKind) -> Format {
    match kind {
        RowKind::Subtotal => format
            .set_bold()
            .set_border_bottom(FormatBorder::Medium)
            .set_border_bottom_color(Color::RGB(DARK_BLUE)),
        RowKind::Check => format
            .set_bold()
            .set_border_bottom(FormatBorder::Double)
            .set_border_bottom_color(Color::RGB(DARK_BLUE)),
        _ => format,
    }
}

/// Format for a data cell, derived from its number format, the kind of
/// row it sits on, whether it is in a forecast column, and any explicit
/// style tag.
pub fn data(fmt: NumFmt, kind: RowKind, forecast: bool, style: CellStyle) -> Format {
    let mut format = base().set_num_format(num_format_code(fmt));
    if forecast {
        format = format.set_background_color(Color::RGB(FORECAST_BG));
    }
    match style {
        CellStyle::Input => format = format.set_font_color(Color::RGB(MED_BLUE)),
        CellStyle::Toggle => {
            format = format
                .set_font_color(Color::RGB(GREEN_FONT))
                .set_background_color(Color::RGB(GREEN_FILL));
        }
        CellStyle::Auto => {}
    }
    with_kind(format, kind)
}

/// Row label in column A.
pub fn label(kind: RowKind) -> Format {
    with_kind(base(), kind)
}

/// Unit tag in column B.
pub fn unit(kind: RowKind) -> Format {
    with_kind(base().set_font_size(9).set_font_color(Color::RGB(SUBTITLE_GRAY)), kind)
}

/// Filler for cells with no content: keeps subtotal borders and the
/// forecast wash continuous across the whole row.
pub fn filler(kind: RowKind, forecast: bool) -> Format {
    let mut format = base();
    if forecast {
        format = format.set_background_color(Color::RGB(FORECAST_BG));
    }
    with_kind(format, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format_codes() {
        assert_eq!(num_format_code(NumFmt::Accounting), "#,##0;(#,##0);\"-\"");
        assert_eq!(num_format_code(NumFmt::Percent), "0.0%");
        assert_eq!(num_format_code(NumFmt::Number1dp), "#,##0.0");
    }
}
