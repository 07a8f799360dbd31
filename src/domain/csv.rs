//! CSV export formatting

use crate::domain::ExerciseRecord;

const HEADER: &str = "Name,Date";

/// Render records as `Name,Date` CSV.
///
/// Rows are joined with `\n` and there is no trailing newline. Values are
/// written as-is; names containing commas or newlines are not escaped.
pub fn export_to_csv(records: &[ExerciseRecord]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            records
                .iter()
                .map(|r| format!("{},{}", r.name, r.iso_date())),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
