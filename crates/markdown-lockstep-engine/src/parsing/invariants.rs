use super::block::Block;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Blocks are ordered by start line and never overlap
/// - Every non-blank source line is covered by exactly one block
/// - Blank separator lines are covered by no block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(content: &str, blocks: &[Block]) {
    let lines: Vec<&str> = content.lines().collect();
    let mut covered = vec![false; lines.len()];
    let mut prev_end = 0u32;

    for b in blocks {
        assert!(
            b.start_line >= 1 && b.start_line <= b.end_line,
            "{}: malformed range {}..={}",
            b.id,
            b.start_line,
            b.end_line
        );
        assert!(
            b.start_line > prev_end,
            "{}: overlaps or precedes an earlier block (starts at {}, previous ended at {})",
            b.id,
            b.start_line,
            prev_end
        );
        assert!(
            b.end_line as usize <= lines.len(),
            "{}: range ends at {} but document has {} lines",
            b.id,
            b.end_line,
            lines.len()
        );
        prev_end = b.end_line;
        for line in b.start_line..=b.end_line {
            covered[(line - 1) as usize] = true;
        }
    }

    for (i, line) in lines.iter().enumerate() {
        let blank = line.trim().is_empty();
        assert_eq!(
            covered[i],
            !blank,
            "line {}: {} (\"{}\")",
            i + 1,
            if blank {
                "blank line claimed by a block"
            } else {
                "non-blank line not covered by any block"
            },
            line
        );
    }
}
