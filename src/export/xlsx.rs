// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, record_to_row};
use crate::export::notify_export_success;
use crate::models::record::ActivityRecord;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND_EVEN: Color = Color::RGB(0xEAF3FB);
const BAND_ODD: Color = Color::RGB(0xFFFFFF);
const HIGHLIGHT: Color = Color::RGB(0xFFE4E6);

/// How each column of `record_to_row` is written.
#[derive(Clone, Copy)]
enum CellKind {
    DateOrTime,
    Number,
    Text,
}

const COLUMN_KINDS: [CellKind; 7] = [
    CellKind::DateOrTime,
    CellKind::Text,
    CellKind::Text,
    CellKind::DateOrTime,
    CellKind::DateOrTime,
    CellKind::Text,
    CellKind::Number,
];

/// XLSX export with a styled header, banded rows and auto-sized columns.
/// Rows whose description mentions `highlight` get a pink background.
pub(crate) fn export_xlsx(
    records: &[ActivityRecord],
    path: &Path,
    highlight: Option<&str>,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timesheet").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let highlighted = highlight.is_some_and(|k| !k.trim().is_empty() && record.mentions(k));
        let bg = if highlighted {
            HIGHLIGHT
        } else if row_index % 2 == 0 {
            BAND_EVEN
        } else {
            BAND_ODD
        };

        for (col, value) in record_to_row(record).iter().enumerate() {
            let kind = COLUMN_KINDS.get(col).copied().unwrap_or(CellKind::Text);
            write_xlsx_cell(worksheet, row, col as u16, value, kind, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell, storing dates/times/numbers as native Excel values when
/// the text allows it and falling back to plain text otherwise.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: CellKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let CellKind::DateOrTime = kind
        && let Some((num_format, serial)) = parse_to_excel_date(s)
    {
        worksheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let CellKind::Number = kind
        && let Ok(num) = s.parse::<f64>()
    {
        worksheet
            .write_with_format(
                row,
                col,
                num,
                &base.set_align(FormatAlign::Right).set_num_format("0.00"),
            )
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
