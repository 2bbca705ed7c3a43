//! Spreadsheet rendering for scanner inventories.
//!
//! The sheet layout is fixed: a styled header row, one row per component,
//! and a summary block anchored at `E3:F4` holding the component count.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::error::AppError;
use crate::model::Component;

pub const SHEET_NAME: &str = "Components";
pub const HEADERS: [&str; 3] = ["Name", "Version", "Type"];
pub const SUMMARY_TITLE: &str = "Summary of Findings";
pub const SUMMARY_LABEL: &str = "Total Components Found:";

/// Zero-based `(row, column)` positions of the summary block.
pub const SUMMARY_TITLE_CELL: (u32, u16) = (2, 4);
pub const SUMMARY_LABEL_CELL: (u32, u16) = (3, 4);
pub const SUMMARY_TOTAL_CELL: (u32, u16) = (3, 5);

const HEADER_FILL: u32 = 0xFFFF00;
const DATA_FILL: u32 = 0xFFFF99;
const SUMMARY_FILL: u32 = 0xFFD700;
const WIDTH_PADDING: usize = 2;

/// Output path for an image: `<output_dir>/Components_found_in_<name>.xlsx`.
///
/// Path separators in the display name are replaced so the report never
/// escapes `output_dir`.
pub fn report_path(output_dir: &Path, image_name: &str) -> PathBuf {
    let name: String =
        image_name.chars().map(|c| if c == '/' || c == '\\' { '_' } else { c }).collect();
    output_dir.join(format!("Components_found_in_{name}.xlsx"))
}

/// Logical contents of the report sheet, independent of the xlsx encoding.
#[derive(Debug, Clone, Copy)]
pub struct ReportLayout<'a> {
    components: &'a [Component],
}

impl<'a> ReportLayout<'a> {
    pub fn new(components: &'a [Component]) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &'a [Component] {
        self.components
    }

    pub fn total(&self) -> usize {
        self.components.len()
    }

    /// Column widths sized to the longest text in each used column, plus padding.
    pub fn column_widths(&self) -> BTreeMap<u16, usize> {
        let mut longest: BTreeMap<u16, usize> = BTreeMap::new();
        let mut observe = |col: u16, text: &str| {
            let len = text.chars().count();
            let entry = longest.entry(col).or_insert(0);
            *entry = (*entry).max(len);
        };

        for (col, header) in (0u16..).zip(HEADERS) {
            observe(col, header);
        }
        for component in self.components {
            for (col, value) in (0u16..).zip(component.fields()) {
                observe(col, value.unwrap_or_default());
            }
        }
        observe(SUMMARY_TITLE_CELL.1, SUMMARY_TITLE);
        observe(SUMMARY_LABEL_CELL.1, SUMMARY_LABEL);
        observe(SUMMARY_TOTAL_CELL.1, &self.total().to_string());

        longest.into_iter().map(|(col, len)| (col, len + WIDTH_PADDING)).collect()
    }
}

/// Render `layout` to an xlsx file at `path`, replacing any existing file.
pub fn write_report(path: &Path, layout: &ReportLayout<'_>) -> Result<PathBuf, AppError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let data_format =
        Format::new().set_background_color(Color::RGB(DATA_FILL)).set_border(FormatBorder::Thin);
    let summary_title_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(SUMMARY_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let summary_format = summary_title_format.clone().set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (index, component) in layout.components().iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, value) in (0u16..).zip(component.fields()) {
            match value {
                Some(text) => worksheet.write_string_with_format(row, col, text, &data_format)?,
                None => worksheet.write_blank(row, col, &data_format)?,
            };
        }
    }

    let (row, col) = SUMMARY_TITLE_CELL;
    worksheet.write_string_with_format(row, col, SUMMARY_TITLE, &summary_title_format)?;
    let (row, col) = SUMMARY_LABEL_CELL;
    worksheet.write_string_with_format(row, col, SUMMARY_LABEL, &summary_format)?;
    let (row, col) = SUMMARY_TOTAL_CELL;
    worksheet.write_number_with_format(row, col, layout.total() as f64, &summary_format)?;

    for (col, width) in layout.column_widths() {
        worksheet.set_column_width(col, width as f64)?;
    }

    workbook.save(path)?;
    Ok(path.to_path_buf())
}
