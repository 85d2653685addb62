/// Resolves a relative index against `len`.
///
/// Negative values count back from the end. The result is clamped into `[0, len]`.
#[inline]
pub(crate) fn resolve(relative: isize, len: usize) -> usize {
    if relative < 0 {
        len.saturating_sub(relative.unsigned_abs())
    } else {
        (relative as usize).min(len)
    }
}

/// Like [`resolve`], with `None` standing for `len`.
#[inline]
pub(crate) fn resolve_end(end: Option<isize>, len: usize) -> usize {
    end.map_or(len, |end| resolve(end, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_clamps_both_directions() {
        assert_eq!(resolve(2, 5), 2);
        assert_eq!(resolve(9, 5), 5);
        assert_eq!(resolve(-1, 5), 4);
        assert_eq!(resolve(-9, 5), 0);
        assert_eq!(resolve(isize::MIN, 5), 0);
    }

    #[test]
    fn test_resolve_end_defaults_to_len() {
        assert_eq!(resolve_end(None, 7), 7);
        assert_eq!(resolve_end(Some(-2), 7), 5);
    }
}
