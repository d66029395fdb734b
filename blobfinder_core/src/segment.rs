//! Blob segmentation: group a row of per-column channel values into runs.
//!
//! # Segmentation rule
//! A run starts at the first nonzero column and keeps that channel. It is
//! extended while the current column *or the one after it* carries the
//! run's channel, so a single unclassified column inside a run does not
//! terminate it; a gap of more than one column does. Reads past the last
//! column count as unclassified.
//!
//! Only one run is live at a time. The column that terminates a run is
//! never reconsidered as a run start, so a run of another channel abutting
//! the terminator starts one column late.

/// A candidate blob: a gap-tolerant run of columns on one channel.
/// `channel` is 1-based as stored in the scan line; `left`/`right` are
/// inclusive column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub channel: u8,
    pub left: usize,
    pub right: usize,
}

/// Scan a row of 1-based channel values (0 = unclassified) left to right
/// and return the recovered runs in column order.
pub fn segment(channels: &[u8]) -> Vec<Run> {
    let col = |i: usize| channels.get(i).copied().unwrap_or(0);
    let mut runs = Vec::new();

    let mut s = 0;
    while s < channels.len() {
        if col(s) != 0 {
            let left = s;
            let channel = col(s);

            // a gap of more than one column ends the run
            while col(s) == channel || col(s + 1) == channel {
                s += 1;
            }
            let right = s - 1;

            runs.push(Run {
                channel,
                left,
                right,
            });
        }
        s += 1;
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: usize, spans: &[(usize, usize, u8)]) -> Vec<u8> {
        let mut columns = vec![0u8; width];
        for &(left, right, channel) in spans {
            for c in &mut columns[left..=right] {
                *c = channel;
            }
        }
        columns
    }

    #[test]
    fn empty_row_yields_no_runs() {
        assert!(segment(&[]).is_empty());
        assert!(segment(&vec![0u8; 64]).is_empty());
    }

    #[test]
    fn solid_span_is_one_run() {
        let runs = segment(&row(160, &[(40, 59, 3)]));
        assert_eq!(
            runs,
            vec![Run {
                channel: 3,
                left: 40,
                right: 59
            }]
        );
    }

    #[test]
    fn one_column_gap_is_bridged() {
        // {10..15, 17..20} with 16 unclassified → a single run [10, 20]
        let runs = segment(&row(30, &[(10, 15, 1), (17, 20, 1)]));
        assert_eq!(
            runs,
            vec![Run {
                channel: 1,
                left: 10,
                right: 20
            }]
        );
    }

    #[test]
    fn two_column_gap_splits_runs() {
        let runs = segment(&row(30, &[(10, 15, 1), (18, 20, 1)]));
        assert_eq!(runs.len(), 2, "a gap of two columns must end the run");
        assert_eq!(runs[0], Run { channel: 1, left: 10, right: 15 });
        assert_eq!(runs[1], Run { channel: 1, left: 18, right: 20 });
    }

    #[test]
    fn run_reaching_final_column_terminates_cleanly() {
        // The lookahead reads one past the end; out of range counts as
        // unclassified.
        let runs = segment(&row(20, &[(17, 19, 2)]));
        assert_eq!(
            runs,
            vec![Run {
                channel: 2,
                left: 17,
                right: 19
            }]
        );
    }

    #[test]
    fn single_column_blob_at_last_index() {
        let runs = segment(&row(8, &[(7, 7, 5)]));
        assert_eq!(
            runs,
            vec![Run {
                channel: 5,
                left: 7,
                right: 7
            }]
        );
    }

    #[test]
    fn abutting_run_of_other_channel_starts_one_column_late() {
        // [1,1,2,2]: the column that terminated the first run is skipped,
        // so the second run is recovered as [3,3] only.
        let runs = segment(&[1, 1, 2, 2]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], Run { channel: 1, left: 0, right: 1 });
        assert_eq!(runs[1], Run { channel: 2, left: 3, right: 3 });
    }

    #[test]
    fn interleaved_channel_inside_gap_window_is_swallowed() {
        // [1,2,1]: column 1 carries channel 2 but the live run's lookahead
        // bridges it; the single-pass design never recovers the inner run.
        let runs = segment(&[1, 2, 1]);
        assert_eq!(
            runs,
            vec![Run {
                channel: 1,
                left: 0,
                right: 2
            }]
        );
    }
}
