use std::num::ParseIntError;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::MalformedPolicy;
use crate::models::{Direction, Groups, Point};
use crate::utils::ChartError;

/// Durations at or above this many seconds are dropped
pub const DURATION_LIMIT_SECS: u64 = 4000;

const SRC_DURATION: usize = 0;
const DST_DURATION: usize = 1;
const SRC_CHAIN: usize = 5;
const DST_CHAIN: usize = 6;
const MIN_FIELDS: usize = 7;

/// Parse one numeric field.
///
/// Signed input is accepted and wraps into `u64`, so `-3` becomes a huge
/// duration that the 4000 second filter drops rather than a 0 second point.
pub fn parse_field(raw: &str) -> Result<u64, ParseIntError> {
    raw.parse::<i64>().map(|v| v as u64)
}

/// Split a row on tabs, trimming every field and dropping empty ones
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t')
        .map(|v| v.trim().trim_end_matches('\t'))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Parse one data row into its source and destination points.
///
/// Returns `Ok(None)` when the row is blank or was dropped by `policy`.
/// `line_no` is 1-based and only used for reporting.
pub fn parse_line(
    line: &str,
    line_no: usize,
    policy: MalformedPolicy,
) -> Result<Option<[Point; 2]>, ChartError> {
    let fields = split_fields(line);
    if fields.is_empty() {
        return Ok(None);
    }

    if fields.len() < MIN_FIELDS {
        let err = ChartError::MissingFields {
            line: line_no,
            found: fields.len(),
        };
        if policy == MalformedPolicy::Abort {
            return Err(err);
        }
        warn!("Skipping row: {}", err);
        return Ok(None);
    }

    let mut values = [0u64; 4];
    for (slot, &column) in [SRC_DURATION, DST_DURATION, SRC_CHAIN, DST_CHAIN].iter().enumerate() {
        let raw = fields[column];
        values[slot] = match parse_field(raw) {
            Ok(v) => v,
            Err(e) => {
                let err = ChartError::MalformedField {
                    line: line_no,
                    column,
                    value: raw.to_string(),
                };
                match policy {
                    MalformedPolicy::Zero => {
                        debug!("{} ({}), using 0", err, e);
                        0
                    }
                    MalformedPolicy::Skip => {
                        warn!("Skipping row: {}", err);
                        return Ok(None);
                    }
                    MalformedPolicy::Abort => return Err(err),
                }
            }
        };
    }
    let [src_duration, dst_duration, src_chain, dst_chain] = values;

    Ok(Some([
        Point::new(src_chain, src_duration, Direction::SrcToPoly),
        Point::new(dst_chain, dst_duration, Direction::PolyToDst),
    ]))
}

/// Fold points into their chain key groups, keeping input order per group
pub fn group_points<I>(points: I) -> Groups
where
    I: IntoIterator<Item = Point>,
{
    let mut groups = Groups::new();
    for p in points {
        groups.entry(p.key()).or_default().push(p);
    }
    groups
}

/// Parse a whole data file already in memory. The first line is a header.
pub fn load_str(content: &str, policy: MalformedPolicy) -> Result<Groups, ChartError> {
    let mut points = Vec::new();
    for (idx, line) in content.split('\n').enumerate().skip(1) {
        let Some(pair) = parse_line(line, idx + 1, policy)? else {
            continue;
        };
        points.extend(pair.into_iter().filter(|p| p.duration < DURATION_LIMIT_SECS));
    }
    Ok(group_points(points))
}

/// Read and parse the data file at `path`
pub fn load_file(path: &Path, policy: MalformedPolicy) -> Result<Groups, ChartError> {
    let data = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&data, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChainKey;
    use std::io::Write;

    const HEADER: &str = "src_time\tdst_time\tsrc_hash\tpoly_hash\tdst_hash\tsrc_chain\tdst_chain";

    fn all_points(groups: &Groups) -> Vec<Point> {
        groups.values().flatten().copied().collect()
    }

    #[test]
    fn test_two_row_fixture() {
        let content = format!("{}\n100\t200\t0\t0\t0\t7\t8\n5000\t50\t0\t0\t0\t9\t10\n", HEADER);
        let groups = load_str(&content, MalformedPolicy::Zero).expect("load");

        let mut points = all_points(&groups);
        points.sort_by_key(|p| (p.chain, p.duration));
        assert_eq!(
            points,
            vec![
                Point::new(7, 100, Direction::SrcToPoly),
                Point::new(8, 200, Direction::PolyToDst),
                Point::new(10, 50, Direction::PolyToDst),
            ]
        );
        assert!(!groups.contains_key(&ChainKey { chain: 9, direction: Direction::SrcToPoly }));
    }

    #[test]
    fn test_threshold_filter() {
        let content = format!(
            "{}\n3999\t4000\ta\tb\tc\t2\t6\n4001\t0\ta\tb\tc\t2\t6\n",
            HEADER
        );
        let groups = load_str(&content, MalformedPolicy::Zero).expect("load");
        let points = all_points(&groups);

        assert!(points.iter().all(|p| p.duration < DURATION_LIMIT_SECS));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_each_row_yields_both_directions() {
        let pair = parse_line("1\t2\tx\ty\tz\t3\t4", 2, MalformedPolicy::Zero)
            .expect("parse")
            .expect("row");
        assert_eq!(pair[0], Point::new(3, 1, Direction::SrcToPoly));
        assert_eq!(pair[1], Point::new(4, 2, Direction::PolyToDst));
    }

    #[test]
    fn test_grouping_is_stable_and_ordered() {
        let content = format!(
            "{}\n10\t1\ta\tb\tc\t2\t6\n20\t1\ta\tb\tc\t3\t6\n30\t1\ta\tb\tc\t2\t6\n",
            HEADER
        );
        let groups = load_str(&content, MalformedPolicy::Zero).expect("load");

        let eth_src = &groups[&ChainKey { chain: 2, direction: Direction::SrcToPoly }];
        let durations: Vec<u64> = eth_src.iter().map(|p| p.duration).collect();
        assert_eq!(durations, vec![10, 30]);

        let bsc_dst = &groups[&ChainKey { chain: 6, direction: Direction::PolyToDst }];
        assert_eq!(bsc_dst.len(), 3);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_fields_are_trimmed_and_empty_dropped() {
        assert_eq!(split_fields(" 1 \t\t2\t \t3 "), vec!["1", "2", "3"]);
        assert!(split_fields("  \t \t").is_empty());
    }

    #[test]
    fn test_blank_lines_and_header_only() {
        let groups = load_str(&format!("{}\n\n   \n", HEADER), MalformedPolicy::Abort).expect("load");
        assert!(groups.is_empty());
        assert!(load_str("", MalformedPolicy::Zero).expect("load").is_empty());
    }

    #[test]
    fn test_malformed_zero_policy() {
        let content = format!("{}\nabc\t12\ta\tb\tc\teth\t6\n", HEADER);
        let groups = load_str(&content, MalformedPolicy::Zero).expect("load");
        assert_eq!(
            groups[&ChainKey { chain: 0, direction: Direction::SrcToPoly }],
            vec![Point::new(0, 0, Direction::SrcToPoly)]
        );
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_malformed_skip_policy() {
        let content = format!("{}\nabc\t12\ta\tb\tc\t2\t6\n5\t6\ta\tb\tc\t2\t6\n", HEADER);
        let groups = load_str(&content, MalformedPolicy::Skip).expect("load");
        assert_eq!(all_points(&groups).len(), 2);
    }

    #[test]
    fn test_malformed_abort_policy() {
        let content = format!("{}\n1\t2\ta\tb\tc\tx3\t6\n", HEADER);
        let err = load_str(&content, MalformedPolicy::Abort).unwrap_err();
        match err {
            ChartError::MalformedField { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, SRC_CHAIN);
                assert_eq!(value, "x3");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_duration_is_filtered() {
        assert_eq!(parse_field("-3"), Ok(u64::MAX - 2));
        assert_eq!(parse_field("+5"), Ok(5));

        let content = format!("{}\n-3\t12\ta\tb\tc\t2\t6\n", HEADER);
        let groups = load_str(&content, MalformedPolicy::Zero).expect("load");
        assert_eq!(all_points(&groups), vec![Point::new(6, 12, Direction::PolyToDst)]);
    }

    #[test]
    fn test_short_row() {
        let content = format!("{}\n1\t2\t3\n", HEADER);
        assert!(load_str(&content, MalformedPolicy::Zero).expect("load").is_empty());
        assert!(matches!(
            load_str(&content, MalformedPolicy::Abort),
            Err(ChartError::MissingFields { line: 2, found: 3 })
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", HEADER).expect("write");
        writeln!(file, "100\t200\t0\t0\t0\t7\t8").expect("write");

        let groups = load_file(file.path(), MalformedPolicy::Zero).expect("load");
        assert_eq!(all_points(&groups).len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_file(&dir.path().join("nope.txt"), MalformedPolicy::Zero).unwrap_err();
        assert!(matches!(err, ChartError::Io { .. }));
    }
}
