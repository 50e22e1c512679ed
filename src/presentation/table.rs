use crate::presentation::comparison::StoredComparison;
use crate::presentation::report::StoredReport;
use prettytable::{Table, row};

/// Renders stored reports as a terminal table, one row per report
pub fn reports_table(reports: &[StoredReport]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["MONTH", "YEAR", "ID", "INFOGRAPHIC", "SOURCE", "UPDATED"]);

    for report in reports {
        let infographic = if report.infographic_value().is_some() {
            "yes"
        } else {
            "no"
        };
        table.add_row(row![
            report.month,
            report.year,
            report.id,
            infographic,
            report.source,
            report.updated_at.format("%Y-%m-%d %H:%M")
        ]);
    }

    table
}

/// Renders stored city comparisons, one row per comparison
pub fn comparisons_table(comparisons: &[StoredComparison]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["MONTH", "YEAR", "CITIES", "ID", "UPDATED"]);

    for comparison in comparisons {
        table.add_row(row![
            comparison.month,
            comparison.year,
            comparison.city_names.join(", "),
            comparison.id,
            comparison.updated_at.format("%Y-%m-%d %H:%M")
        ]);
    }

    table
}
