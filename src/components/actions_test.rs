use super::*;

#[test]
fn export_message_uppercases_format() {
    assert_eq!(export_message("csv"), "Exporting data as CSV...");
    assert_eq!(export_message("pdf"), "Exporting data as PDF...");
    assert_eq!(export_message("Excel"), "Exporting data as EXCEL...");
}

#[test]
fn export_format_parses_known_names() {
    assert_eq!("csv".parse(), Ok(ExportFormat::Csv));
    assert_eq!(" EXCEL ".parse(), Ok(ExportFormat::Excel));
    assert_eq!("xlsx".parse(), Ok(ExportFormat::Excel));
    assert_eq!("pdf".parse(), Ok(ExportFormat::Pdf));
}

#[test]
fn export_format_rejects_unknown_names() {
    let err = "docx".parse::<ExportFormat>().unwrap_err();
    assert_eq!(err, UnknownFormat("docx".to_owned()));
    assert_eq!(err.to_string(), "unknown export format: docx");
}
