#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rattendance.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Config path that never exists, so every run starts from defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Writes a chat export with the given lines and returns its path.
pub fn write_chat(name: &str, lines: &[&str]) -> PathBuf {
    let path = temp_path(name, "txt");
    fs::write(&path, lines.join("\n")).expect("write chat");
    path
}

pub fn s(p: &Path) -> String {
    p.to_string_lossy().to_string()
}

/// Reads one XML part of an .xlsx archive.
pub fn xlsx_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut entry = archive.by_name(part).expect("xlsx part present");
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("read xlsx part");
    xml
}

/// Worksheet names in workbook order.
pub fn sheet_names(path: &Path) -> Vec<String> {
    let xml = xlsx_part(path, "xl/workbook.xml");
    xml.split("<sheet ")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("name=\"")? + 6;
            let end = chunk[start..].find('"')? + start;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

/// XML of the n-th worksheet (1-based).
pub fn sheet_xml(path: &Path, n: usize) -> String {
    xlsx_part(path, &format!("xl/worksheets/sheet{n}.xml"))
}

/// Rows present in a worksheet, header included.
pub fn row_count(sheet_xml: &str) -> usize {
    sheet_xml.matches("<row ").count()
}

/// Number of cells written in a worksheet row (1-based row number).
pub fn cells_in_row(sheet_xml: &str, row: usize) -> usize {
    let marker = format!("<row r=\"{row}\"");
    let Some(start) = sheet_xml.find(&marker) else {
        return 0;
    };
    let rest = &sheet_xml[start..];
    let end = rest.find("</row>").unwrap_or(rest.len());
    rest[..end].matches("<c ").count()
}

/// Style index (`s` attribute) of a cell such as `"B2"`.
pub fn cell_style(sheet_xml: &str, cell: &str) -> Option<String> {
    let marker = format!("<c r=\"{cell}\"");
    let start = sheet_xml.find(&marker)? + marker.len();
    let rest = &sheet_xml[start..];
    let tag_end = rest.find('>')?;
    let tag = &rest[..tag_end];
    let s_start = tag.find("s=\"")? + 3;
    let s_end = tag[s_start..].find('"')? + s_start;
    Some(tag[s_start..s_end].to_string())
}
