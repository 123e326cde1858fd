//! Fault counts of every policy across a range of frame counts.

use std::io::Write;

use crate::error::{Error, Result};
use crate::sim::{simulate_all, Policy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRow {
    pub frames: usize,
    pub fifo: usize,
    pub optimal: usize,
    pub lru: usize,
}

impl SweepRow {
    pub fn faults(&self, policy: Policy) -> usize {
        return match policy {
            Policy::Fifo => self.fifo,
            Policy::Optimal => self.optimal,
            Policy::Lru => self.lru,
        };
    }
}

/// Simulates every frame count in `min_frames..=max_frames`.
pub fn sweep(requests: &[u32], min_frames: usize, max_frames: usize) -> Result<Vec<SweepRow>> {
    if min_frames == 0 {
        return Err(Error::InvalidRange("frame counts start at 1".to_string()));
    }
    if min_frames > max_frames {
        return Err(Error::InvalidRange(format!(
            "{} frames is more than {} frames",
            min_frames, max_frames
        )));
    }

    let rows = (min_frames..=max_frames)
        .map(|frames| {
            let mut row = SweepRow {
                frames,
                fifo: 0,
                optimal: 0,
                lru: 0,
            };
            for result in simulate_all(frames, requests) {
                match result.policy {
                    Policy::Fifo => row.fifo = result.faults,
                    Policy::Optimal => row.optimal = result.faults,
                    Policy::Lru => row.lru = result.faults,
                }
            }
            row
        })
        .collect();
    return Ok(rows);
}

/// Frame counts at which FIFO faults more than with one frame less.
pub fn belady_anomalies(rows: &[SweepRow]) -> Vec<usize> {
    return rows
        .windows(2)
        .filter(|pair| pair[1].fifo > pair[0].fifo)
        .map(|pair| pair[1].frames)
        .collect();
}

pub fn write_csv<W: Write>(out: &mut W, rows: &[SweepRow]) -> Result<()> {
    writeln!(out, "\"frames\",\"fifo\",\"optimal\",\"lru\"")?;
    for row in rows {
        writeln!(out, "{},{},{},{}", row.frames, row.fifo, row.optimal, row.lru)?;
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_sweep_rows() {
        let rows = sweep(&BELADY, 3, 4).unwrap();
        assert_eq!(
            rows,
            vec![
                SweepRow {
                    frames: 3,
                    fifo: 9,
                    optimal: 7,
                    lru: 10
                },
                SweepRow {
                    frames: 4,
                    fifo: 10,
                    optimal: 6,
                    lru: 8
                },
            ]
        );
        assert_eq!(rows[1].faults(Policy::Optimal), 6);
    }

    #[test]
    fn test_belady_anomaly_detected() {
        let rows = sweep(&BELADY, 1, 6).unwrap();
        assert_eq!(belady_anomalies(&rows), vec![4]);

        // optimal and lru never regress
        for pair in rows.windows(2) {
            assert!(pair[1].optimal <= pair[0].optimal);
            assert!(pair[1].lru <= pair[0].lru);
        }
    }

    #[test]
    fn test_enough_frames_only_cold_faults() {
        let rows = sweep(&BELADY, 5, 8).unwrap();
        for row in rows {
            for policy in Policy::ALL.iter() {
                assert_eq!(row.faults(*policy), 5);
            }
        }
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(sweep(&BELADY, 0, 3), Err(Error::InvalidRange(_))));
        assert!(matches!(sweep(&BELADY, 4, 3), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn test_write_csv() {
        let rows = sweep(&[1, 2, 1], 1, 2).unwrap();
        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"frames\",\"fifo\",\"optimal\",\"lru\"\n1,3,3,3\n2,2,2,2\n"
        );
    }
}
