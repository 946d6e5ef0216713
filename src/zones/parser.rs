// file: src/zones/parser.rs
// version: 1.0.0
// guid: 9d170863-d3ff-420f-b2ca-6c7c83142b30

//! Parser for `zoneadm list -i -c -v` output
//!
//! The layout is a fixed six-column table:
//!
//! ```text
//!   ID NAME             STATUS     PATH                           BRAND    IP
//!    0 global           running    /                              native   shared
//!    1 sol11lab         running    /zones/sol11lab                native   shared
//! ```
//!
//! The header and the global zone row are always the first two lines and are
//! never reported.

use super::ZoneRecord;
use crate::error::{Result, ZoneFactsError};

/// Number of columns in a zone row
pub const ZONE_COLUMNS: usize = 6;

/// Leading lines that never describe a local zone (header, global zone)
const SKIPPED_LINES: usize = 2;

/// Parse the full stdout of `zoneadm list -i -c -v` into zone records.
///
/// Fails on the first row that does not split into six columns and returns
/// no records in that case.
pub fn parse_zone_list(raw: &str) -> Result<Vec<ZoneRecord>> {
    raw.lines()
        .skip(SKIPPED_LINES)
        .map(parse_zone_line)
        .collect()
}

fn parse_zone_line(line: &str) -> Result<ZoneRecord> {
    let cells = split_columns(line, ZONE_COLUMNS);
    match cells.as_slice() {
        [id, name, status, path, brand, ip] => {
            Ok(ZoneRecord::new(*id, *name, *status, *path, *brand, *ip))
        }
        _ => Err(ZoneFactsError::malformed("zoneadm", line)),
    }
}

/// Split on whitespace runs into at most `max` cells. The last cell keeps its
/// internal whitespace.
fn split_columns(line: &str, max: usize) -> Vec<&str> {
    let mut cells = Vec::with_capacity(max);
    let mut rest = line.trim();

    while !rest.is_empty() {
        if cells.len() + 1 == max {
            cells.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                cells.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                cells.push(rest);
                break;
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "  ID NAME             STATUS     PATH                           BRAND    IP";
    const GLOBAL: &str = "   0 global           running    /                              native   shared";

    fn output(rows: &[&str]) -> String {
        let mut text = format!("{}\n{}\n", HEADER, GLOBAL);
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_parse_single_zone() {
        // Arrange
        let raw = output(&["  1 sol11lab         running    /zones/sol11lab                native   shared"]);

        // Act
        let zones = parse_zone_list(&raw).unwrap();

        // Assert
        assert_eq!(
            zones,
            vec![ZoneRecord::new("1", "sol11lab", "running", "/zones/sol11lab", "native", "shared")]
        );
    }

    #[test]
    fn test_parse_only_header_and_global_is_empty() {
        let zones = parse_zone_list(&output(&[])).unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn test_parse_short_input_is_empty() {
        assert!(parse_zone_list("").unwrap().is_empty());
        assert!(parse_zone_list(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_global_zone_never_reported() {
        // The second line is dropped whatever it contains
        let raw = format!(
            "{}\n   0 global           installed  /                              native   shared\n",
            HEADER
        );
        assert!(parse_zone_list(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_parse_preserves_order_and_status() {
        // Arrange
        let raw = output(&[
            "  1 sol11lab         running    /zones/sol11lab                native   shared",
            "  - build01          installed  /zones/build01                 solaris10 excl",
        ]);

        // Act
        let zones = parse_zone_list(&raw).unwrap();

        // Assert
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name(), "sol11lab");
        assert_eq!(zones[0].status(), "running");
        assert_eq!(zones[1].name(), "build01");
        assert_eq!(zones[1].status(), "installed");
        assert_eq!(zones[1].id(), "-");
        assert_eq!(zones[1].brand(), "solaris10");
    }

    #[test]
    fn test_missing_column_fails_whole_parse() {
        // Arrange
        let bad = "  2 broken           running    /zones/broken                  native";
        let raw = output(&[
            "  1 sol11lab         running    /zones/sol11lab                native   shared",
            bad,
            "  3 never            running    /zones/never                   native   shared",
        ]);

        // Act
        let err = parse_zone_list(&raw).unwrap_err();

        // Assert
        match err {
            ZoneFactsError::MalformedOutput { line, .. } => assert_eq!(line, bad),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_blank_row_is_malformed() {
        let raw = output(&["", "  1 sol11lab running /zones/sol11lab native shared"]);
        assert!(matches!(
            parse_zone_list(&raw),
            Err(ZoneFactsError::MalformedOutput { ref line, .. }) if line.is_empty()
        ));
    }

    #[test]
    fn test_last_column_keeps_internal_whitespace() {
        let raw = output(&["  4 netzone          running    /zones/netzone                 native   excl  vnic0 vnic1"]);
        let zones = parse_zone_list(&raw).unwrap();
        assert_eq!(zones[0].ip(), "excl  vnic0 vnic1");
        assert_eq!(zones[0].brand(), "native");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = format!(
            "{}\r\n{}\r\n  1 sol11lab running /zones/sol11lab native shared\r\n",
            HEADER, GLOBAL
        );
        let zones = parse_zone_list(&raw).unwrap();
        assert_eq!(zones[0].ip(), "shared");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let raw = output(&[
            "  1 sol11lab         running    /zones/sol11lab                native   shared",
            "  - build01          configured /zones/build01                 native   shared",
        ]);
        assert_eq!(parse_zone_list(&raw).unwrap(), parse_zone_list(&raw).unwrap());
    }

    #[test]
    fn test_split_columns_caps_at_max() {
        assert_eq!(split_columns("  a  b c  ", 2), vec!["a", "b c"]);
        assert_eq!(split_columns("a b", 6), vec!["a", "b"]);
        assert!(split_columns("   ", 6).is_empty());
    }
}
