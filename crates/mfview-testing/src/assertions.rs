//! Custom assertions for rendered newform output.

use mfview_types::{DimGrid, Space};

/// Every row of the grid splits as `all = new + old`
pub fn assert_grid_balanced(grid: &DimGrid) {
    for space in Space::ALL {
        let row = grid[space];
        assert_eq!(
            row.all,
            row.new + row.old,
            "{:?} row unbalanced: {:?}",
            space,
            row
        );
    }
}

/// Every `\(` has a matching `\)` and they never nest
pub fn assert_math_delimiters_balanced(text: &str) {
    let mut open = false;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\\' && (bytes[i + 1] == b'(' || bytes[i + 1] == b')') {
            let opening = bytes[i + 1] == b'(';
            assert_ne!(open, opening, "unbalanced math delimiters in {:?}", text);
            open = opening;
            i += 2;
        } else {
            i += 1;
        }
    }
    assert!(!open, "unterminated math mode in {:?}", text);
}
