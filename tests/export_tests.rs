use chrono::{NaiveDate, NaiveTime};
use rattendance::core::group_messages;
use rattendance::core::preview::render_preview;
use rattendance::export::{
    ExportFormat, ExportLogic, MAX_SHEET_NAME_LEN, ReportOptions, SheetNamer, build_report,
};
use rattendance::models::MessageRecord;
use std::fs;

mod common;
use common::{cell_style, cells_in_row, row_count, sheet_names, sheet_xml, temp_path, xlsx_part};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, mo: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, day).unwrap()
}

fn sample() -> Vec<MessageRecord> {
    vec![
        MessageRecord::new(d(2025, 3, 5), t(9, 0), "Ana", Some(t(8, 58))),
        MessageRecord::new(d(2025, 3, 5), t(12, 0), "Ana", None),
        MessageRecord::new(d(2025, 3, 5), t(13, 0), "Ana", Some(t(12, 59))),
        MessageRecord::new(d(2025, 3, 6), t(9, 0), "Bruno", Some(t(9, 5))),
    ]
}

#[test]
fn test_header_labels_pairs() {
    let opts = ReportOptions::default();
    assert_eq!(opts.header_labels(0), vec!["Date", "Entrance", "Exit"]);
    assert_eq!(opts.header_labels(2), vec!["Date", "Entrance", "Exit"]);
    assert_eq!(
        opts.header_labels(3),
        vec!["Date", "Entrance", "Exit", "Entrance", "Exit"]
    );
}

#[test]
fn test_sheet_names_are_valid_and_unique() {
    let mut namer = SheetNamer::default();

    let long = "Maria Aparecida dos Santos Oliveira";
    let first = namer.unique(long);
    assert_eq!(first.chars().count(), MAX_SHEET_NAME_LEN);
    assert!(long.starts_with(&first));

    let second = namer.unique(long);
    assert!(second.ends_with(" (2)"));
    assert!(second.chars().count() <= MAX_SHEET_NAME_LEN);
    assert_ne!(first, second);

    assert_eq!(namer.unique("Ana/RH [SP]"), "Ana_RH _SP_");
    assert_eq!(namer.unique("ana"), "ana");
    assert_eq!(namer.unique("ANA"), "ANA (2)");
    assert_eq!(namer.unique("'Zé'"), "Zé");
    assert_eq!(namer.unique("History"), "History (2)");
    assert_eq!(namer.unique("''"), "Sheet");
}

#[test]
fn test_xlsx_one_sheet_per_sender_one_row_per_date() {
    let out = temp_path("export_xlsx_basic", "xlsx");
    let grouped = group_messages(&sample());

    let stats =
        ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.cells, 4);
    assert_eq!(stats.adjusted, 1);
    assert_eq!(stats.skipped_dates, 0);

    assert_eq!(sheet_names(&out), vec!["Ana", "Bruno"]);

    let ana = sheet_xml(&out, 1);
    assert_eq!(row_count(&ana), 2);
    // Date + three times, header with two pairs.
    assert_eq!(cells_in_row(&ana, 2), 4);
    assert_eq!(cells_in_row(&ana, 1), 5);
    assert!(ana.contains("45721"));

    let bruno = sheet_xml(&out, 2);
    assert_eq!(row_count(&bruno), 2);
    assert_eq!(cells_in_row(&bruno, 2), 2);
    // 09:00 kept: the later extracted 09:05 is ignored.
    assert!(bruno.contains("0.375"));

    let strings = xlsx_part(&out, "xl/sharedStrings.xml");
    assert!(strings.contains("Entrance"));
    assert!(strings.contains("Exit"));
    assert!(strings.contains("Date"));
}

#[test]
fn test_xlsx_adjusted_cells_have_their_own_style() {
    let out = temp_path("export_xlsx_adjusted_style", "xlsx");
    let grouped = group_messages(&sample());

    ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    let ana = sheet_xml(&out, 1);
    // B2 = 08:58 (adjusted), C2 = 12:00 and D2 = 13:00 (logged times kept).
    let adjusted = cell_style(&ana, "B2").expect("B2 styled");
    let plain = cell_style(&ana, "C2").expect("C2 styled");
    assert_ne!(adjusted, plain);
    assert_eq!(cell_style(&ana, "D2").as_ref(), Some(&plain));
}

#[test]
fn test_xlsx_day_wider_than_excel_skips_extra_cells() {
    let out = temp_path("export_xlsx_wide_day", "xlsx");
    let entries = 16_400;
    let records: Vec<MessageRecord> = (0..entries)
        .map(|_| MessageRecord::new(d(2025, 3, 5), t(8, 0), "Ana", None))
        .collect();
    let grouped = group_messages(&records);

    let stats =
        ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    // Column A holds the date, B..XFD hold 16,383 times.
    assert_eq!(stats.cells, 16_383);
    assert_eq!(stats.skipped_cells, entries - 16_383);
    assert_eq!(stats.rows, 1);
    assert!(out.exists());

    let ana = sheet_xml(&out, 1);
    assert_eq!(row_count(&ana), 2);
    assert_eq!(cells_in_row(&ana, 1), 16_384);
    assert_eq!(cells_in_row(&ana, 2), 16_384);
}

#[test]
fn test_xlsx_custom_labels() {
    let out = temp_path("export_xlsx_labels", "xlsx");
    let grouped = group_messages(&sample());
    let opts = ReportOptions {
        tolerance_minutes: 2,
        entrance_label: "Entrada".to_string(),
        exit_label: "Saída".to_string(),
    };

    ExportLogic::export(&grouped, ExportFormat::Xlsx, &opts, &out).unwrap();

    let strings = xlsx_part(&out, "xl/sharedStrings.xml");
    assert!(strings.contains("Entrada"));
    assert!(strings.contains("Saída"));
}

#[test]
fn test_xlsx_skips_dates_excel_cannot_show() {
    let out = temp_path("export_xlsx_old_date", "xlsx");
    let records = vec![
        MessageRecord::new(d(1899, 12, 31), t(8, 0), "Ana", None),
        MessageRecord::new(d(2025, 3, 5), t(8, 0), "Ana", None),
    ];
    let grouped = group_messages(&records);

    let stats =
        ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    assert_eq!(stats.skipped_dates, 1);
    assert_eq!(stats.rows, 1);
    assert_eq!(row_count(&sheet_xml(&out, 1)), 2);
}

#[test]
fn test_xlsx_creates_missing_directory_and_overwrites() {
    let dir = temp_path("export_xlsx_dir", "d");
    fs::remove_dir_all(&dir).ok();
    let out = dir.join("report.xlsx");
    let grouped = group_messages(&sample());

    ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();
    let only_ana = group_messages(&sample()[..3]);
    ExportLogic::export(&only_ana, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    assert_eq!(sheet_names(&out), vec!["Ana"]);
}

#[test]
fn test_xlsx_empty_dataset() {
    let out = temp_path("export_xlsx_empty", "xlsx");
    let grouped = group_messages(&[]);

    let stats =
        ExportLogic::export(&grouped, ExportFormat::Xlsx, &ReportOptions::default(), &out).unwrap();

    assert_eq!(stats.sheets, 0);
    assert!(out.exists());
}

#[test]
fn test_csv_export_marks_adjusted() {
    let out = temp_path("export_csv", "csv");
    let grouped = group_messages(&sample());

    let stats =
        ExportLogic::export(&grouped, ExportFormat::Csv, &ReportOptions::default(), &out).unwrap();
    assert_eq!(stats.rows, 2);

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Sender,Date,Entrance,Exit,Entrance,Exit");
    assert_eq!(lines[1], "Ana,2025-03-05,08:58*,12:00,13:00,");
    assert_eq!(lines[2], "Bruno,2025-03-06,09:00,,,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_json_export_structure() {
    let out = temp_path("export_json", "json");
    let grouped = group_messages(&sample());

    ExportLogic::export(&grouped, ExportFormat::Json, &ReportOptions::default(), &out).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v[0]["sender"], "Ana");
    assert_eq!(v[0]["days"][0]["date"], "2025-03-05");
    assert_eq!(v[0]["days"][0]["times"][0]["time"], "08:58");
    assert_eq!(v[0]["days"][0]["times"][0]["logged"], "09:00");
    assert_eq!(v[0]["days"][0]["times"][0]["adjusted"], true);
    assert_eq!(v[0]["days"][0]["times"][2]["adjusted"], false);
    assert_eq!(v[1]["sender"], "Bruno");
}

#[test]
fn test_build_report_is_deterministic() {
    let grouped = group_messages(&sample());
    assert_eq!(build_report(&grouped, 2), build_report(&grouped, 2));

    // A wider tolerance drops the 2-minute adjustment.
    let strict = build_report(&grouped, 3);
    assert!(
        strict
            .iter()
            .flat_map(|s| s.days.iter())
            .flat_map(|d| d.times.iter())
            .all(|c| !c.adjusted)
    );
}

#[test]
fn test_preview_without_color() {
    let grouped = group_messages(&sample());
    let text = render_preview(&grouped, &ReportOptions::default(), false);

    assert!(text.contains("== Ana"));
    assert!(text.contains("== Bruno"));
    assert!(text.contains("05/03/2025"));
    assert!(text.contains("08:58*"));
    assert!(text.contains("12:00"));
    assert!(!text.contains("\x1b["));
}
