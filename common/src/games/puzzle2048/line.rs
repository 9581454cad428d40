use super::types::BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineResult {
    pub line: [u32; BOARD_SIZE],
    pub gained: u32,
    pub changed: bool,
}

/// Collapses one row or column toward its leading edge.
///
/// `reversed` flips the line so merges always proceed from the edge the tiles
/// travel toward (Right and Down pass `true`). Each tile merges at most once
/// per call: a freshly merged cell is never compared against the next value.
pub fn reduce_line(line: [u32; BOARD_SIZE], reversed: bool) -> LineResult {
    let mut working = line;
    if reversed {
        working.reverse();
    }

    let compacted: Vec<u32> = working.iter().copied().filter(|&v| v != 0).collect();

    let mut reduced = [0u32; BOARD_SIZE];
    let mut gained: u32 = 0;
    let mut write = 0;
    let mut read = 0;
    while read < compacted.len() {
        if read + 1 < compacted.len() && compacted[read] == compacted[read + 1] {
            let merged = compacted[read] * 2;
            reduced[write] = merged;
            gained += merged;
            read += 2;
        } else {
            reduced[write] = compacted[read];
            read += 1;
        }
        write += 1;
    }

    if reversed {
        reduced.reverse();
    }

    LineResult {
        line: reduced,
        gained,
        changed: reduced != line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_zero_sum(line: &[u32; BOARD_SIZE]) -> u32 {
        line.iter().sum()
    }

    #[test]
    fn test_reduce_merges_all_pairs() {
        let result = reduce_line([2, 2, 2, 2], false);
        assert_eq!(result.line, [4, 4, 0, 0]);
        assert_eq!(result.gained, 8);
        assert!(result.changed);
    }

    #[test]
    fn test_reduce_reversed_packs_toward_trailing_edge() {
        let result = reduce_line([2, 0, 2, 4], true);
        assert_eq!(result.line, [0, 0, 4, 4]);
        assert_eq!(result.gained, 4);
        assert!(result.changed);
    }

    #[test]
    fn test_reduce_without_merge_only_compacts() {
        let result = reduce_line([0, 2, 0, 4], false);
        assert_eq!(result.line, [2, 4, 0, 0]);
        assert_eq!(result.gained, 0);
        assert!(result.changed);
    }

    #[test]
    fn test_reduce_unchanged_line_reports_no_change() {
        let result = reduce_line([2, 4, 8, 16], false);
        assert_eq!(result.line, [2, 4, 8, 16]);
        assert_eq!(result.gained, 0);
        assert!(!result.changed);
    }

    #[test]
    fn test_reduce_merged_cell_does_not_merge_again() {
        let result = reduce_line([4, 2, 2, 0], false);
        assert_eq!(result.line, [4, 4, 0, 0]);
        assert_eq!(result.gained, 4);
    }

    #[test]
    fn test_reduce_triple_merges_leading_pair_only() {
        let result = reduce_line([2, 2, 2, 0], false);
        assert_eq!(result.line, [4, 2, 0, 0]);
        assert_eq!(result.gained, 4);
    }

    #[test]
    fn test_reduce_two_distinct_pairs() {
        let result = reduce_line([2, 2, 4, 4], false);
        assert_eq!(result.line, [4, 8, 0, 0]);
        assert_eq!(result.gained, 12);
    }

    #[test]
    fn test_reduce_conserves_tile_mass() {
        let lines = [
            [2, 2, 2, 2],
            [2, 2, 4, 4],
            [2, 0, 2, 4],
            [4, 2, 2, 0],
            [0, 0, 0, 0],
            [2, 4, 8, 16],
            [1024, 1024, 2, 2],
        ];
        for line in lines {
            for reversed in [false, true] {
                let result = reduce_line(line, reversed);
                assert_eq!(
                    non_zero_sum(&result.line),
                    non_zero_sum(&line),
                    "mass changed for {:?} reversed={}",
                    line,
                    reversed
                );
            }
        }
    }

    #[test]
    fn test_reduce_never_leaves_gaps_on_packed_side() {
        let lines = [
            [2, 0, 2, 4],
            [0, 2, 0, 2],
            [4, 0, 0, 4],
            [0, 0, 2, 0],
            [2, 4, 0, 8],
        ];
        for line in lines {
            let forward = reduce_line(line, false).line;
            let mut seen_zero = false;
            for &value in forward.iter() {
                if value == 0 {
                    seen_zero = true;
                } else {
                    assert!(!seen_zero, "gap before {} in {:?}", value, forward);
                }
            }

            let backward = reduce_line(line, true).line;
            let mut seen_value = false;
            for &value in backward.iter() {
                if value != 0 {
                    seen_value = true;
                } else {
                    assert!(!seen_value, "gap after values in {:?}", backward);
                }
            }
        }
    }
}
