//! Delimited text catalog support
//!
//! A catalog is a table of star systems, one per line:
//! - `x`, `y`, `z` coordinates (required) and an optional `kind` label
//! - comma, tab, semicolon or whitespace delimiters, auto-detected
//! - an optional header line naming the columns
//! - blank lines and lines starting with `#` are ignored
//!
//! The kind label may contain spaces ("Blue Super Giant"). When it is the
//! last column it absorbs every remaining field, so whitespace separated
//! catalogs can carry multi-word labels too.

use starfield_core::{Error, PointSet, Point3d, Result, TaggedPoint3d};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Supported delimiters for catalog files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
    Whitespace,
}

impl Delimiter {
    /// Detect the delimiter used by a line of text
    ///
    /// Whitespace is only chosen when no explicit separator is present, since
    /// labels routinely contain spaces. The most frequent separator wins; on
    /// equal counts tab beats semicolon beats comma, so a semicolon catalog
    /// with comma labels is still split on `;`.
    pub fn detect_from_line(line: &str) -> Self {
        let counts = [
            (line.matches('\t').count(), 2, Delimiter::Tab),
            (line.matches(';').count(), 1, Delimiter::Semicolon),
            (line.matches(',').count(), 0, Delimiter::Comma),
        ];

        counts
            .iter()
            .filter(|(count, _, _)| *count > 0)
            .max_by_key(|(count, rank, _)| (*count, *rank))
            .map(|(_, _, delimiter)| *delimiter)
            .unwrap_or(Delimiter::Whitespace)
    }

    /// Split a line into trimmed fields
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
            Delimiter::Tab => line.split('\t').map(str::trim).collect(),
            Delimiter::Semicolon => line.split(';').map(str::trim).collect(),
            Delimiter::Whitespace => line.split_whitespace().collect(),
        }
    }

    fn joiner(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Semicolon => ";",
            Delimiter::Whitespace => " ",
        }
    }
}

/// Column types that can appear in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    X,
    Y,
    Z,
    Kind,
    Unknown,
}

impl ColumnType {
    /// Parse column type from header name
    pub fn from_header(header: &str) -> Self {
        match header.trim().to_lowercase().as_str() {
            "x" | "px" | "pos_x" | "position_x" => ColumnType::X,
            "y" | "py" | "pos_y" | "position_y" => ColumnType::Y,
            "z" | "pz" | "pos_z" | "position_z" => ColumnType::Z,
            "kind" | "type" | "class" | "category" | "label" => ColumnType::Kind,
            _ => ColumnType::Unknown,
        }
    }
}

/// Layout of a catalog file
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSchema {
    pub columns: Vec<ColumnType>,
    pub has_header: bool,
    pub delimiter: Delimiter,
}

impl CatalogSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnType>, has_header: bool, delimiter: Delimiter) -> Self {
        Self {
            columns,
            has_header,
            delimiter,
        }
    }

    /// Headerless `x,y,z,kind` layout, the one [`write_catalog`] produces minus its header
    pub fn xyz_kind(delimiter: Delimiter) -> Self {
        Self::new(
            vec![ColumnType::X, ColumnType::Y, ColumnType::Z, ColumnType::Kind],
            false,
            delimiter,
        )
    }

    /// Infer the schema from the first significant line of a catalog
    pub fn detect_from_line(line: &str) -> Result<Self> {
        let delimiter = Delimiter::detect_from_line(line);
        let fields = delimiter.split(line);

        if fields.len() < 3 {
            return Err(Error::InvalidData(format!(
                "catalog line has {} fields, expected at least x, y, z",
                fields.len()
            )));
        }

        let has_header = fields.iter().take(3).any(|field| field.parse::<f64>().is_err());
        if has_header {
            let columns: Vec<ColumnType> = fields.iter().map(|f| ColumnType::from_header(f)).collect();
            for required in [ColumnType::X, ColumnType::Y, ColumnType::Z] {
                if !columns.contains(&required) {
                    return Err(Error::InvalidData(
                        "catalog header must name x, y and z columns".to_string(),
                    ));
                }
            }
            return Ok(Self::new(columns, true, delimiter));
        }

        let mut columns = vec![ColumnType::X, ColumnType::Y, ColumnType::Z];
        if fields.len() > 3 {
            columns.push(ColumnType::Kind);
        }
        Ok(Self::new(columns, false, delimiter))
    }

    fn index_of(&self, column: ColumnType) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    /// Parse one data line
    fn parse_row(&self, line: &str, line_number: usize) -> Result<TaggedPoint3d> {
        let fields = self.delimiter.split(line);

        let coordinate = |column: ColumnType, name: &str| -> Result<f64> {
            let index = self.index_of(column).ok_or_else(|| {
                Error::InvalidData(format!("catalog schema has no {name} column"))
            })?;
            let raw = fields.get(index).ok_or_else(|| {
                Error::InvalidData(format!("line {line_number}: missing {name} coordinate"))
            })?;
            let value: f64 = raw.parse().map_err(|_| {
                Error::InvalidData(format!("line {line_number}: invalid {name} coordinate '{raw}'"))
            })?;
            if !value.is_finite() {
                return Err(Error::InvalidData(format!(
                    "line {line_number}: {name} coordinate is not finite"
                )));
            }
            Ok(value)
        };

        let position = Point3d::new(
            coordinate(ColumnType::X, "x")?,
            coordinate(ColumnType::Y, "y")?,
            coordinate(ColumnType::Z, "z")?,
        );

        let kind = self.index_of(ColumnType::Kind).and_then(|index| {
            let label = if index + 1 == self.columns.len() {
                fields.get(index..).map(|rest| rest.join(self.delimiter.joiner()))
            } else {
                fields.get(index).map(|field| field.to_string())
            }?;
            let label = label.trim().to_string();
            (!label.is_empty()).then_some(label)
        });

        Ok(TaggedPoint3d { position, kind })
    }
}

fn is_significant(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Parse a catalog from any buffered reader
///
/// The schema is detected from the first significant line unless one is
/// supplied. An input with no data lines yields an empty set.
pub fn parse_catalog<R: BufRead>(reader: R, schema: Option<&CatalogSchema>) -> Result<PointSet<TaggedPoint3d>> {
    let mut detected = schema.cloned();
    let mut skip_header = schema.is_some_and(|s| s.has_header);
    let mut systems = PointSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if !is_significant(&line) {
            continue;
        }

        if detected.is_none() {
            let schema = CatalogSchema::detect_from_line(&line)?;
            skip_header = schema.has_header;
            detected = Some(schema);
        }

        if skip_header {
            skip_header = false;
            continue;
        }

        if let Some(schema) = &detected {
            systems.push(schema.parse_row(&line, line_number)?);
        }
    }

    if systems.is_empty() {
        warn!("catalog contains no systems");
    }
    Ok(systems)
}

/// Read a delimited catalog from disk
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<PointSet<TaggedPoint3d>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let systems = parse_catalog(BufReader::new(file), None)?;
    debug!(path = %path.display(), systems = systems.len(), "read catalog");
    Ok(systems)
}

/// Check that a system reads back unchanged from a comma separated row
///
/// The reader trims fields and treats an empty kind as unlabeled, so a kind
/// must be non-empty, carry no surrounding whitespace and contain no comma or
/// line break. Coordinates must be finite.
fn validate_row(system: &TaggedPoint3d, row: usize) -> Result<()> {
    let p = system.position;
    if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
        return Err(Error::InvalidData(format!(
            "system {row}: coordinates must be finite"
        )));
    }

    if let Some(kind) = system.kind() {
        if kind.is_empty() || kind.trim() != kind {
            return Err(Error::InvalidData(format!(
                "system {row}: kind {kind:?} is empty or padded with whitespace"
            )));
        }
        if kind.contains([',', '\n', '\r']) {
            return Err(Error::InvalidData(format!(
                "system {row}: kind {kind:?} cannot be written to a comma separated catalog"
            )));
        }
    }
    Ok(())
}

/// Write a catalog as comma separated `x,y,z,kind` with a header line
///
/// Every system is validated before the file is created, so a rejected
/// catalog never leaves a partial file behind.
pub fn write_catalog<P: AsRef<Path>>(path: P, systems: &PointSet<TaggedPoint3d>) -> Result<()> {
    for (row, system) in systems.iter().enumerate() {
        validate_row(system, row)?;
    }

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "x,y,z,kind")?;
    for system in systems {
        let p = system.position;
        writeln!(writer, "{},{},{},{}", p.x, p.y, p.z, system.kind().unwrap_or(""))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<PointSet<TaggedPoint3d>> {
        parse_catalog(Cursor::new(text), None)
    }

    #[test]
    fn test_delimiter_detection_prefers_explicit_separators() {
        assert_eq!(Delimiter::detect_from_line("1,2,3,Blue Super Giant"), Delimiter::Comma);
        assert_eq!(Delimiter::detect_from_line("1\t2\t3"), Delimiter::Tab);
        assert_eq!(Delimiter::detect_from_line("1;2;3;Dense Dust Cloud"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect_from_line("1 2 3"), Delimiter::Whitespace);
    }

    #[test]
    fn test_csv_with_header() {
        let systems = parse("x,y,z,kind\n20,-4,28,Yellow Main Sequence\n18,-3,17,\n").unwrap();
        assert_eq!(systems.len(), 2);
        assert_eq!(systems[0], TaggedPoint3d::new(20.0, -4.0, 28.0, "Yellow Main Sequence"));
        assert_eq!(systems[1].kind(), None);
    }

    #[test]
    fn test_header_columns_in_any_order() {
        let systems = parse("type;z;x;y\nLight Dust Cloud;-2;20;-23\n").unwrap();
        assert_eq!(systems[0], TaggedPoint3d::new(20.0, -23.0, -2.0, "Light Dust Cloud"));
    }

    #[test]
    fn test_whitespace_catalog_with_multi_word_kind() {
        let text = "# sector 0,0,0 is not a header\n\n-25 -23 5 Blue Super Giant\n1.5 2 3\n";
        let systems = parse(text).unwrap();
        assert_eq!(systems[0], TaggedPoint3d::new(-25.0, -23.0, 5.0, "Blue Super Giant"));
        assert_eq!(systems[1], TaggedPoint3d::untagged(1.5, 2.0, 3.0));
    }

    #[test]
    fn test_invalid_coordinate_reports_line() {
        let err = parse("x,y,z\n1,2,3\n1,two,3\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        assert!(matches!(parse("1,2,NaN\n"), Err(Error::InvalidData(_))));
        assert!(matches!(parse("inf 2 3\n"), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_header_without_z_rejected() {
        assert!(matches!(parse("x,y,kind\n1,2,Dust\n"), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_explicit_schema_skips_detection() {
        let schema = CatalogSchema::xyz_kind(Delimiter::Semicolon);
        let systems = parse_catalog(Cursor::new("1;2;3;Blue Super Giant\n"), Some(&schema)).unwrap();
        assert_eq!(systems[0].kind(), Some("Blue Super Giant"));
    }

    #[test]
    fn test_tied_delimiter_counts() {
        assert_eq!(Delimiter::detect_from_line("1;2,5;3,Dust"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect_from_line("1\t2;3\tDust; Dense"), Delimiter::Tab);
    }

    #[test]
    fn test_validate_row_rejects_unreadable_kinds() {
        for kind in ["Blue\nSuper Giant", "Dust\r", "  ", "", " Padded", "Dust, Dense"] {
            let system = TaggedPoint3d::new(1.0, 2.0, 3.0, kind);
            assert!(matches!(validate_row(&system, 0), Err(Error::InvalidData(_))), "{kind:?}");
        }
        assert!(validate_row(&TaggedPoint3d::new(1.0, 2.0, 3.0, "Blue Super Giant"), 0).is_ok());
        assert!(validate_row(&TaggedPoint3d::untagged(1.0, 2.0, 3.0), 0).is_ok());
        assert!(validate_row(&TaggedPoint3d::untagged(f64::INFINITY, 2.0, 3.0), 0).is_err());
    }

    #[test]
    fn test_comment_only_input_is_empty() {
        assert!(parse("# nothing here\n\n").unwrap().is_empty());
    }
}
