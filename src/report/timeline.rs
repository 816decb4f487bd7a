//! ASCII timeline of a head path.
//!
//! Columns are the sorted distinct tracks of interest: track 0, every
//! request, the track bound, and anything else the path visits. Each
//! row is one position of the path; the segment travelled to reach it
//! is drawn with `-` and the position itself with `o`.
//!
//! ```text
//!   0  2  5  8 10
//! 0        o
//! 1          --o   5 -> 8 (3)
//! 2             --o   8 -> 10 (2)
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::models::Track;
use crate::policies::LOWEST_TRACK;

/// Chart of a head path over the tracks it cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    columns: Vec<Track>,
    path: Vec<Track>,
}

impl Timeline {
    /// Builds the chart for `path` over `requests` on a disk of `track_bound`.
    pub fn new(path: &[Track], requests: &[Track], track_bound: Track) -> Self {
        let columns: BTreeSet<Track> = std::iter::once(LOWEST_TRACK)
            .chain(requests.iter().copied())
            .chain(std::iter::once(track_bound))
            .chain(path.iter().copied())
            .collect();
        Self {
            columns: columns.into_iter().collect(),
            path: path.to_vec(),
        }
    }

    /// Column tracks, ascending.
    pub fn columns(&self) -> &[Track] {
        &self.columns
    }

    fn column_of(&self, track: Track) -> usize {
        // every path position is a column by construction
        self.columns.binary_search(&track).unwrap_or(0)
    }

    fn cell_width(&self) -> usize {
        self.columns
            .iter()
            .map(|t| t.to_string().len())
            .max()
            .unwrap_or(1)
            + 1
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_width();
        let gutter = self.path.len().saturating_sub(1).to_string().len().max(1);

        write!(f, "{:gutter$}", "")?;
        for track in &self.columns {
            write!(f, "{track:>width$}")?;
        }

        for (row, &pos) in self.path.iter().enumerate() {
            writeln!(f)?;
            let here = self.column_of(pos);
            let (from, to) = match row.checked_sub(1).map(|i| self.path[i]) {
                Some(prev) => {
                    let prev_col = self.column_of(prev);
                    (prev_col.min(here), prev_col.max(here))
                }
                None => (here, here),
            };

            let mut line = String::new();
            for col in 0..self.columns.len() {
                let cell = if col == here {
                    if here == to && from < to {
                        format!("{:->width$}", "o")
                    } else {
                        format!("{:>width$}", "o")
                    }
                } else if (col > from && col < to) || (col == to && from < to) {
                    "-".repeat(width)
                } else {
                    " ".repeat(width)
                };
                line.push_str(&cell);
            }

            write!(f, "{row:>gutter$}{}", line.trim_end())?;
            if row > 0 {
                let prev = self.path[row - 1];
                write!(f, "   {} -> {} ({})", prev, pos, prev.abs_diff(pos))?;
            }
        }
        Ok(())
    }
}
