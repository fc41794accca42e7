use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_BG: [u32; 2] = [0xEAF3FB, 0xFFFFFF];

/// Cell formats for one sheet: a header style plus text/number styles per band.
struct Styles {
    header: Format,
    text: [Format; 2],
    number: [Format; 2],
}

impl Styles {
    fn new() -> Self {
        let cell = |bg: u32| {
            Format::new()
                .set_background_color(Color::RGB(bg))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };

        Self {
            header: cell(HEADER_BG)
                .set_bold()
                .set_font_color(Color::White),
            text: BAND_BG.map(|bg| cell(bg)),
            number: BAND_BG.map(|bg| cell(bg).set_align(FormatAlign::Right)),
        }
    }
}

/// Spreadsheet bytes: styled frozen header, banded rows, columns sized to
/// their widest cell. Only cells in `numeric_columns` are stored as numbers;
/// everything else is written verbatim as text.
pub(crate) fn render_xlsx(
    sheet_name: &str,
    headers: &[&str],
    numeric_columns: &[usize],
    rows: &[Vec<String>],
) -> AppResult<Vec<u8>> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).map_err(xlsx_error)?;

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (col, title) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *title, &styles.header)
            .map_err(xlsx_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    for (i, values) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        let band = i % 2;
        for (col, value) in values.iter().enumerate().take(headers.len()) {
            let numeric = numeric_columns.contains(&col);
            write_cell(sheet, &styles, band, row, col as u16, value, numeric)?;
            widths[col] = widths[col].max(value.width());
        }
    }

    for (col, w) in widths.into_iter().enumerate() {
        sheet
            .set_column_width(col as u16, w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_cell(
    sheet: &mut Worksheet,
    styles: &Styles,
    band: usize,
    row: u32,
    col: u16,
    value: &str,
    numeric: bool,
) -> AppResult<()> {
    match value.parse::<f64>() {
        Ok(n) if numeric => sheet.write_with_format(row, col, n, &styles.number[band]),
        _ => sheet.write_string_with_format(row, col, value, &styles.text[band]),
    }
    .map_err(xlsx_error)?;
    Ok(())
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
