//! Const evaluation utilities

/// Compare two strings for equality in a const context
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Bounded `u8` comparison usable where `PartialOrd` is not.
pub const fn in_range(value: u8, low: u8, high: u8) -> bool {
    value >= low && value <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_eq_compares_bytes() {
        assert!(str_eq("Mold", "Mold"));
        assert!(!str_eq("Mold", "Mol"));
        assert!(!str_eq("Mold", "mold"));
        assert!(str_eq("", ""));
    }

    #[test]
    fn in_range_is_inclusive() {
        assert!(in_range(1, 1, 7));
        assert!(in_range(7, 1, 7));
        assert!(!in_range(0, 1, 7));
        assert!(!in_range(8, 1, 7));
    }
}
