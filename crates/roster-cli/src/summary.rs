use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{
    CellValue, CombinedIssue, CsvValidation, FieldIssue, HeaderValidation, Row, RowIssue,
    SubmissionValidation, UploadValidation, UserError,
};

use crate::cli::ReportFormatArg;
use crate::commands::Report;

/// Print a report to stdout in the requested format.
pub fn print_report(report: &Report, format: ReportFormatArg) -> serde_json::Result<()> {
    match format {
        ReportFormatArg::Json => println!("{}", report.to_json()?),
        ReportFormatArg::Table => print_tables(report),
    }
    Ok(())
}

fn print_tables(report: &Report) {
    match report {
        Report::Upload(result) => print_upload(result),
        Report::AddRows(result) => print_rows(result),
        Report::LinkRows(result) => print_rows(result),
        Report::Submission(result) => print_submission(result),
        Report::Headers(result) => print_headers(result),
    }
}

fn print_upload(result: &UploadValidation) {
    if let Some(errors) = &result.header_errors {
        println!("{}", field_issue_table("Header", errors));
        println!("Upload rejected: {} missing header(s)", errors.len());
        return;
    }
    if !result.errors.is_empty() {
        println!("{}", user_error_table(&result.errors));
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Users"), header_cell("Errors"), header_cell("Sites")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    let sites = if result.unique_sites.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(result.unique_sites.join(", "))
    };
    table.add_row(vec![
        Cell::new(result.data.len()),
        count_cell(result.error_count(), Color::Red),
        sites,
    ]);
    println!("{table}");
    if result.has_multiple_sites {
        println!("Upload references {} sites", result.unique_sites.len());
    }
    println!("{}", verdict(result.success));
}

fn print_rows<T>(result: &CsvValidation<T>) {
    if !result.errors.is_empty() {
        println!("{}", row_issue_table(&result.errors));
    }
    println!(
        "{} valid row(s), {} error(s)",
        result.data.len(),
        result.errors.len()
    );
    println!("{}", verdict(result.success));
}

fn print_submission(result: &SubmissionValidation) {
    if !result.errors.is_empty() {
        println!("{}", combined_issue_table(&result.errors));
    }
    println!("{}", verdict(result.success));
}

fn print_headers(result: &HeaderValidation) {
    if !result.errors.is_empty() {
        println!("{}", field_issue_table("Header", &result.errors));
    }
    println!("Headers: {}", result.data.join(", "));
    println!("{}", verdict(result.success));
}

fn user_error_table(errors: &[UserError]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("User type"),
        header_cell("Error"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors {
        table.add_row(vec![
            Cell::new(error.row),
            user_type_cell(&error.user),
            Cell::new(&error.error).fg(Color::Red),
        ]);
    }
    table
}

fn row_issue_table(errors: &[RowIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in errors {
        table.add_row(vec![
            Cell::new(issue.row),
            field_cell(&issue.field),
            Cell::new(&issue.message),
        ]);
    }
    table
}

fn combined_issue_table(errors: &[CombinedIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Message")]);
    apply_summary_table_style(&mut table);
    for issue in errors {
        table.add_row(vec![field_cell(&issue.field), Cell::new(&issue.message)]);
    }
    table
}

fn field_issue_table(label: &str, errors: &[FieldIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Message")]);
    apply_summary_table_style(&mut table);
    for issue in errors {
        table.add_row(vec![field_cell(&issue.field), Cell::new(&issue.message)]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn verdict(success: bool) -> &'static str {
    if success { "Result: valid" } else { "Result: invalid" }
}

fn user_type_cell(user: &Row) -> Cell {
    match user
        .get_ignore_case("usertype")
        .and_then(CellValue::as_text)
        .filter(|text| !text.trim().is_empty())
    {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn field_cell(field: &str) -> Cell {
    if field.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(field).fg(Color::Blue)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
