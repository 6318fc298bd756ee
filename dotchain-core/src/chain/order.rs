//! Chain order mapping
//!
//! Logical group 0 is the leftmost 8-column group of the display. Whether it
//! lives on chain index 0 (the farthest chip) or the last chip depends on
//! how the modules were wired.

/// Map a logical group to its chain index
///
/// `logical` must be below `modules`.
pub const fn physical_index(logical: usize, modules: usize, reversed: bool) -> usize {
    if reversed {
        modules - 1 - logical
    } else {
        logical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_order_is_identity() {
        for g in 0..4 {
            assert_eq!(physical_index(g, 4, false), g);
        }
    }

    #[test]
    fn test_reversed_order() {
        assert_eq!(physical_index(0, 4, true), 3);
        assert_eq!(physical_index(3, 4, true), 0);
        assert_eq!(physical_index(0, 1, true), 0);
    }
}
