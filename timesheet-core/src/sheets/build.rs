//! Compiles grid + summary + profile state into the batch-update sequence.
//!
//! Output order is fixed: column sizing, header merges, then one bulk
//! `updateCells` covering the 7 header rows plus one row per real day.

use crate::calendar::{DayCell, LeaveType, WeekRow, is_weekend_column};
use crate::month::MonthYear;
use crate::profile::ProfileFields;
use crate::summary::Summary;

use super::types::{
    Border, BorderStyle, Borders, CellData, CellFormat, Color, Dimension, DimensionProperties,
    DimensionRange, ExtendedValue, GridRange, HorizontalAlignment, MergeCellsRequest, MergeType,
    Request, RowData, TextFormat, UpdateCellsRequest, UpdateDimensionPropertiesRequest,
};

/// Pixel widths for the four sheet columns (Date, Day, Status, Hours).
pub const COLUMN_WIDTHS: [i64; 4] = [80, 80, 140, 350];

/// Title/metadata rows above the per-day rows.
pub const HEADER_ROW_COUNT: i64 = 7;

const SHEET_COLUMNS: i64 = COLUMN_WIDTHS.len() as i64;

/// Company name printed in the header block.
pub const COMPANY_NAME: &str = "Indecomm";

/// Fill for weekend and holiday rows.
const SHADED_FILL: Color = Color {
    red: 0.85,
    green: 0.85,
    blue: 0.85,
};

/// Build the ordered request sequence for one upload. Pure transform over
/// already-validated in-memory state; it cannot fail.
pub fn construct_requests(
    rows: &[WeekRow],
    summary: &Summary,
    profile: &ProfileFields,
    sheet_id: i64,
    month: MonthYear,
) -> Vec<Request> {
    let mut requests: Vec<Request> = COLUMN_WIDTHS
        .iter()
        .enumerate()
        .map(|(index, width)| {
            Request::UpdateDimensionProperties(UpdateDimensionPropertiesRequest {
                range: DimensionRange {
                    sheet_id,
                    dimension: Dimension::Columns,
                    start_index: index as i64,
                    end_index: index as i64 + 1,
                },
                properties: DimensionProperties { pixel_size: *width },
                fields: "pixelSize".to_string(),
            })
        })
        .collect();

    requests.extend(merge_ranges(sheet_id).into_iter().map(|range| {
        Request::MergeCells(MergeCellsRequest {
            range,
            merge_type: MergeType::MergeAll,
        })
    }));

    let mut data = header_rows(summary, profile, month);
    data.extend(day_rows(rows));
    let end_row_index = data.len() as i64;

    requests.push(Request::UpdateCells(UpdateCellsRequest {
        rows: data,
        fields: "*".to_string(),
        range: GridRange {
            sheet_id,
            start_row_index: 0,
            end_row_index,
            start_column_index: 0,
            end_column_index: SHEET_COLUMNS,
        },
    }));

    requests
}

/// The six fixed header merges: the title across all columns, and the left
/// label block (columns 0-1) of each metadata row.
fn merge_ranges(sheet_id: i64) -> [GridRange; 6] {
    let row = |start_row: i64, end_row: i64, start_col: i64, end_col: i64| GridRange {
        sheet_id,
        start_row_index: start_row,
        end_row_index: end_row,
        start_column_index: start_col,
        end_column_index: end_col,
    };
    [
        row(0, 1, 0, SHEET_COLUMNS),
        row(1, 2, 0, 2),
        row(2, 3, 0, 2),
        row(3, 4, 0, 2),
        row(4, 5, 0, 2),
        row(5, 6, 0, 2),
    ]
}

fn header_rows(summary: &Summary, profile: &ProfileFields, month: MonthYear) -> Vec<RowData> {
    let title = format!("Timesheet for the month of {}", month.label());

    vec![
        RowData {
            values: vec![
                text_cell(title, title_format()),
                blank_cell(),
                blank_cell(),
                blank_cell(),
            ],
        },
        metadata_row(
            format!("Employee Name: {}", profile.employee_name),
            "Employee Id",
            ExtendedValue::StringValue(profile.employee_id.clone()),
        ),
        metadata_row(
            format!("Project Manager: {}", profile.project_manager),
            "Working Days",
            ExtendedValue::NumberValue(f64::from(summary.working)),
        ),
        metadata_row(
            format!("Division: {}", profile.division),
            "Billable Days",
            ExtendedValue::NumberValue(summary.billable),
        ),
        metadata_row(
            format!("Project Name: {}", profile.project_name),
            "Company",
            ExtendedValue::StringValue(COMPANY_NAME.to_string()),
        ),
        RowData {
            values: vec![
                text_cell("Total Leaves".to_string(), base_format()),
                blank_cell(),
                value_cell(ExtendedValue::NumberValue(summary.leaves), base_format()),
                blank_cell(),
            ],
        },
        RowData {
            values: ["Date", "Day", "Status", "Hours"]
                .into_iter()
                .map(|label| text_cell(label.to_string(), column_header_format()))
                .collect(),
        },
    ]
}

/// A metadata row: merged left block with "Label: value" text, then a
/// separate label/value pair on the right half.
fn metadata_row(left: String, right_label: &str, right_value: ExtendedValue) -> RowData {
    RowData {
        values: vec![
            text_cell(left, base_format()),
            blank_cell(),
            text_cell(right_label.to_string(), base_format()),
            value_cell(right_value, base_format()),
        ],
    }
}

fn day_rows(rows: &[WeekRow]) -> Vec<RowData> {
    let mut data = Vec::new();
    for week in rows {
        for (col, cell) in week.iter().enumerate() {
            let Some(date) = cell.date else { continue };
            let shaded = is_weekend_column(col) || cell.is_holiday;
            let format = day_format(shaded);
            data.push(RowData {
                values: vec![
                    text_cell(date.format("%-d-%-m-%Y").to_string(), format.clone()),
                    text_cell(date.format("%A").to_string(), format.clone()),
                    text_cell(status_text(col, cell).to_string(), format.clone()),
                    text_cell(hours_text(col, cell).to_string(), format),
                ],
            });
        }
    }
    data
}

fn status_text(col: usize, cell: &DayCell) -> &'static str {
    if is_weekend_column(col) {
        "Weekly Off"
    } else if cell.is_holiday {
        "Holiday"
    } else {
        match cell.leave_type {
            LeaveType::Half => "Half day leave",
            LeaveType::Full => "Full day leave",
            LeaveType::None => "Present",
        }
    }
}

fn hours_text(col: usize, cell: &DayCell) -> &'static str {
    if is_weekend_column(col) || cell.is_holiday {
        ""
    } else {
        match cell.leave_type {
            LeaveType::Half => "4 Hours",
            LeaveType::Full => "0 Hours",
            LeaveType::None => "8 Hours",
        }
    }
}

fn all_borders() -> Borders {
    let solid = Border {
        style: BorderStyle::Solid,
    };
    Borders {
        top: solid,
        bottom: solid,
        left: solid,
        right: solid,
    }
}

/// Borders on all four sides, applied to every cell unconditionally.
fn base_format() -> CellFormat {
    CellFormat {
        borders: Some(all_borders()),
        ..CellFormat::default()
    }
}

fn title_format() -> CellFormat {
    CellFormat {
        horizontal_alignment: Some(HorizontalAlignment::Center),
        text_format: Some(TextFormat {
            bold: true,
            underline: false,
        }),
        ..base_format()
    }
}

fn column_header_format() -> CellFormat {
    CellFormat {
        horizontal_alignment: Some(HorizontalAlignment::Center),
        text_format: Some(TextFormat {
            bold: true,
            underline: true,
        }),
        ..base_format()
    }
}

fn day_format(shaded: bool) -> CellFormat {
    CellFormat {
        background_color: shaded.then_some(SHADED_FILL),
        ..base_format()
    }
}

fn text_cell(value: String, format: CellFormat) -> CellData {
    value_cell(ExtendedValue::StringValue(value), format)
}

fn value_cell(value: ExtendedValue, format: CellFormat) -> CellData {
    CellData {
        user_entered_value: Some(value),
        user_entered_format: Some(format),
    }
}

fn blank_cell() -> CellData {
    CellData {
        user_entered_value: None,
        user_entered_format: Some(base_format()),
    }
}
