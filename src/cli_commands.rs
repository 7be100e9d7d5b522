use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use wktparse::{Geometry, ParseOptions, parse_with};

/// Where the geometry text sits in each record of a batch file
pub struct BatchSource {
    /// Column holding the geometry; `None` means each line is a bare geometry
    pub column: Option<usize>,
    pub delimiter: u8,
    pub skip_header: bool,
}

/// One geometry text read from a batch file, with its 1-based line number
type NumberedText = (u64, String);

/// Outcome of a batch run
#[derive(Debug, PartialEq, Eq)]
pub struct BatchSummary {
    pub parsed: usize,
    pub failed: usize,
}

/// One-line summary of a parsed geometry
pub fn describe(geom: &Geometry) -> String {
    format!(
        "{} ({} parts, {} coordinates, {}D)",
        geom.type_name(),
        geom.num_parts(),
        geom.num_coords(),
        geom.dimension()
    )
}

/// Parse an input string and print some details about the shape
pub fn parse_show_detail(input: &str, options: &ParseOptions) -> Result<(), String> {
    let geom = parse_with(input, options).map_err(|e| format!("Failed to parse geometry: {e}"))?;
    println!("Parsed a Geometry of Type {}!", geom.type_name());
    match &geom {
        Geometry::Point(pt) => {
            let c = pt.coord();
            match c.z() {
                Some(z) => println!("The point coordinates are: ({}, {}, {z})", c.x(), c.y()),
                None => println!("The point coordinates are: ({}, {})", c.x(), c.y()),
            }
        }
        Geometry::Polygon(poly) => {
            println!(
                "The polygon has {} exterior vertices and {} holes.",
                poly.exterior().len(),
                poly.interiors().len()
            );
        }
        Geometry::GeometryCollection(gc) => {
            println!("The collection contains {} members:", gc.members().len());
            for member in gc.members() {
                println!("  - {}", describe(member));
            }
        }
        other => println!("Summary: {}", describe(other)),
    }
    println!("Raw value: {geom:?}");
    Ok(())
}

/// Parse every geometry in a file, one per line or one per record
///
/// Lines that fail to parse are logged and counted; with `fail_fast` the first failure
/// stops the run and is returned as an error.
pub fn parse_batch(
    path: &Path,
    source: &BatchSource,
    options: &ParseOptions,
    fail_fast: bool,
) -> Result<BatchSummary, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let texts = match source.column {
        None => read_lines(file, source.skip_header)?,
        Some(column) => read_column(file, column, source)?,
    };
    info!("Read {} geometries from {}", texts.len(), path.display());

    let (mut parsed, mut failed) = (0usize, 0usize);
    for (line, text) in texts {
        match parse_with(&text, options) {
            Ok(geom) => {
                parsed += 1;
                println!("{line}: {}", describe(&geom));
            }
            Err(err) => {
                failed += 1;
                warn!("line {line}: {err}");
                if fail_fast {
                    return Err(format!("Stopped at line {line}: {err}"));
                }
            }
        }
    }
    println!("Parsed {parsed} geometries, {failed} failed");
    Ok(BatchSummary { parsed, failed })
}

// Each non-blank line is a geometry, optionally wrapped in double quotes
fn read_lines<R: Read>(input: R, skip_header: bool) -> Result<Vec<NumberedText>, String> {
    let mut texts = Vec::new();
    for (idx, line) in BufReader::new(input).lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {e}", idx + 1))?;
        if (skip_header && idx == 0) || line.trim().is_empty() {
            continue;
        }
        texts.push((idx as u64 + 1, line.trim().trim_matches('"').to_string()));
    }
    Ok(texts)
}

// Delimited records; the geometry field must be quoted if it contains the delimiter
fn read_column<R: Read>(
    input: R,
    column: usize,
    source: &BatchSource,
) -> Result<Vec<NumberedText>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(source.delimiter)
        .has_headers(source.skip_header)
        .flexible(true)
        .from_reader(input);

    let mut texts = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {e}"))?;
        let line = record.position().map_or(0, |p| p.line());
        match record.get(column) {
            Some(field) => texts.push((line, field.to_string())),
            None => debug!("line {line}: no column {column}, skipping"),
        }
    }
    Ok(texts)
}
