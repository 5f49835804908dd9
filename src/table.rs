//! Plain-text table output and duration formatting

use std::io::{self, Write};

use chrono::Duration;

const COLUMN_GAP: &str = "  ";

/// Print `rows` under `headers` as a left-aligned table.
///
/// Every column is as wide as its widest cell. The header row is followed by a
/// dashed separator line.
pub fn print_simple<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    write_row(out, &widths, headers)?;

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &widths, separator.as_slice())?;

    for row in rows {
        write_row(out, &widths, row.as_slice())?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, widths: &[usize], cells: &[S]) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell = cell.as_ref();
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    writeln!(out, "{}", line.trim_end())
}

/// Format a number of seconds as `m:ss`
pub fn minutes_seconds(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a duration truncated to whole seconds, e.g. `3m25s` or `1h0m5s`
pub fn duration_string(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut out = Vec::new();
        print_simple(&mut out, headers, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn columns_fit_the_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Morning".to_string(), "true".to_string()],
            vec!["22".to_string(), "Rain".to_string(), "false".to_string()],
        ];
        let table = render(&["ID", "Name", "Public"], &rows);

        assert_eq!(
            table,
            "ID  Name     Public\n\
             --  -------  ------\n\
             1   Morning  true\n\
             22  Rain     false\n"
        );
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let rows = vec![vec!["Björk".to_string(), "x".to_string()]];
        let table = render(&["Artist", "ID"], &rows);
        assert_eq!(table, "Artist  ID\n------  --\nBjörk   x\n");
    }

    #[test]
    fn headers_only() {
        assert_eq!(render(&["A", "B"], &[]), "A  B\n-  -\n");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(minutes_seconds(0), "0:00");
        assert_eq!(minutes_seconds(65), "1:05");
        assert_eq!(minutes_seconds(600), "10:00");
        assert_eq!(minutes_seconds(3725), "62:05");
    }

    #[test]
    fn durations() {
        assert_eq!(duration_string(Duration::zero()), "0s");
        assert_eq!(duration_string(Duration::milliseconds(59_999)), "59s");
        assert_eq!(duration_string(Duration::milliseconds(205_450)), "3m25s");
        assert_eq!(duration_string(Duration::seconds(3605)), "1h0m5s");
    }
}
