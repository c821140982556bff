//! Row transition analysis and interpolation
//!
//! A *transition* (or run) is a maximal span of equal samples within one
//! row, recorded together with the differing sample value that ends it.
//! Rows are segmented into transitions by [`analyze_row`] and each
//! transition is stretched to its target length by [`interpolate`];
//! together they form the horizontal half of the transition-preserving
//! scaler.
//!
//! Note that the scan never emits a transition for the final constant
//! run of a row (there is no following value change to close it). The
//! row scaler documents how the resulting uncovered tail is handled.

/// Tonal direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The closing value is greater than the run value
    Ascending,
    /// The closing value is less than the run value
    Descending,
}

/// A single tonal transition within one row.
///
/// Covers the half-open index range `[start_idx, end_idx)` where every
/// sample equals `start_val`; `end_val` is the differing sample at
/// `end_idx` that terminates the run. By construction
/// `start_val != end_val`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// First index of the run
    pub start_idx: usize,
    /// Index of the sample that ends the run (exclusive bound of the run)
    pub end_idx: usize,
    /// Constant value of the run
    pub start_val: u8,
    /// Value of the sample at `end_idx`
    pub end_val: u8,
    /// Ascending or descending
    pub direction: Direction,
}

impl Transition {
    /// Length of the run in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.end_idx - self.start_idx
    }

    /// A transition always covers at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Segment a row of samples into tonal transitions.
///
/// Scans the row left to right, emitting one [`Transition`] each time
/// the current sample differs from the value at the running start
/// index. The emitted transitions are in ascending index order and
/// tile the row contiguously, except for the final constant run which
/// is never emitted (see the module docs).
///
/// Rows of length 0 or 1, and rows with no value changes, yield an
/// empty vector.
pub fn analyze_row(row: &[u8]) -> Vec<Transition> {
    let mut transitions = Vec::new();
    let mut start = 0usize;

    for i in 1..row.len() {
        if row[i] != row[start] {
            let direction = if row[i] > row[start] {
                Direction::Ascending
            } else {
                Direction::Descending
            };
            transitions.push(Transition {
                start_idx: start,
                end_idx: i,
                start_val: row[start],
                end_val: row[i],
                direction,
            });
            start = i;
        }
    }

    transitions
}

/// Stretch one transition to `target_length` samples.
///
/// For `target_length > 1` this produces an evenly spaced ramp from
/// `start_val` toward `end_val` over a half-open interval: the k-th
/// sample is `start_val + (end_val - start_val) * k / target_length`,
/// so `end_val` itself is never emitted. The following transition owns
/// that value, which keeps adjacent segments from double-stamping
/// their shared boundary. Fractional values are quantized by
/// truncation toward zero, which preserves monotonicity in either
/// direction.
///
/// For `target_length <= 1` a single sample equal to `start_val` is
/// produced.
pub fn interpolate(transition: &Transition, target_length: usize) -> Vec<u8> {
    if target_length <= 1 {
        return vec![transition.start_val];
    }

    let start = transition.start_val as f32;
    let span = transition.end_val as f32 - start;
    let step = span / target_length as f32;

    (0..target_length)
        .map(|k| (start + step * k as f32) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_and_single() {
        assert!(analyze_row(&[]).is_empty());
        assert!(analyze_row(&[42]).is_empty());
    }

    #[test]
    fn test_analyze_constant_row() {
        assert!(analyze_row(&[7, 7, 7, 7]).is_empty());
    }

    #[test]
    fn test_analyze_ascending_ramp() {
        // Strictly ascending ramp: one length-1 transition per step,
        // and none for the trailing element.
        let row: Vec<u8> = (0..10).collect();
        let transitions = analyze_row(&row);
        assert_eq!(transitions.len(), 9);
        for (i, t) in transitions.iter().enumerate() {
            assert_eq!(t.start_idx, i);
            assert_eq!(t.end_idx, i + 1);
            assert_eq!(t.len(), 1);
            assert_eq!(t.start_val, i as u8);
            assert_eq!(t.end_val, i as u8 + 1);
            assert_eq!(t.direction, Direction::Ascending);
        }
    }

    #[test]
    fn test_analyze_runs_and_directions() {
        let row = [10, 10, 10, 200, 200, 50];
        let transitions = analyze_row(&row);
        assert_eq!(
            transitions,
            vec![
                Transition {
                    start_idx: 0,
                    end_idx: 3,
                    start_val: 10,
                    end_val: 200,
                    direction: Direction::Ascending,
                },
                Transition {
                    start_idx: 3,
                    end_idx: 5,
                    start_val: 200,
                    end_val: 50,
                    direction: Direction::Descending,
                },
            ]
        );
    }

    #[test]
    fn test_analyze_covers_row_contiguously() {
        let row = [3, 3, 9, 1, 1, 1, 4, 4];
        let transitions = analyze_row(&row);
        let mut expected_start = 0;
        for t in &transitions {
            assert_eq!(t.start_idx, expected_start);
            expected_start = t.end_idx;
        }
        // The trailing run [6, 8) is the known uncovered remainder.
        assert_eq!(transitions.last().unwrap().end_idx, 6);
    }

    fn transition(start_val: u8, end_val: u8) -> Transition {
        Transition {
            start_idx: 0,
            end_idx: 1,
            start_val,
            end_val,
            direction: if end_val > start_val {
                Direction::Ascending
            } else {
                Direction::Descending
            },
        }
    }

    #[test]
    fn test_interpolate_half_open_ramp() {
        // 10 -> 200 over 4 samples: 10, 57.5, 105, 152.5, truncated.
        let seg = interpolate(&transition(10, 200), 4);
        assert_eq!(seg, vec![10, 57, 105, 152]);
    }

    #[test]
    fn test_interpolate_excludes_end_value() {
        let seg = interpolate(&transition(0, 100), 10);
        assert_eq!(seg.len(), 10);
        assert_eq!(seg[0], 0);
        assert!(*seg.last().unwrap() < 100);
    }

    #[test]
    fn test_interpolate_short_targets() {
        assert_eq!(interpolate(&transition(42, 99), 1), vec![42]);
        assert_eq!(interpolate(&transition(42, 99), 0), vec![42]);
    }

    #[test]
    fn test_interpolate_monotonic_ascending() {
        let seg = interpolate(&transition(3, 251), 37);
        for pair in seg.windows(2) {
            assert!(pair[1] >= pair[0], "not monotonic: {:?}", pair);
        }
    }

    #[test]
    fn test_interpolate_monotonic_descending() {
        let seg = interpolate(&transition(251, 3), 37);
        assert_eq!(seg[0], 251);
        for pair in seg.windows(2) {
            assert!(pair[1] <= pair[0], "not monotonic: {:?}", pair);
        }
    }
}
