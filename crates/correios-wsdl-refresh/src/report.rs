//! Emitting the run report.

use std::io::Write;

use correios_wsdl_core::RefreshReport;

use crate::settings::ReportFormat;

/// Writes `report` to `writer` in the requested format.
///
/// `ReportFormat::None` writes nothing. `ReportFormat::Json` writes one
/// pretty-printed JSON document followed by a newline, and nothing else, so
/// the stream stays parseable.
pub fn write_report<W: Write>(
    report: &RefreshReport,
    format: ReportFormat,
    mut writer: W,
) -> std::io::Result<()> {
    match format {
        ReportFormat::None => Ok(()),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
            writer.flush()
        },
    }
}
