//! Absent-element scanning for sequence checks.

/// Returns the index of the first `None` in `elements`, scanning left to
/// right, or `None` if every slot is populated.
///
/// O(n), deterministic first match. Used by `no_null_elements` to name the
/// offending index in its failure message.
///
/// # Examples
///
/// ```
/// use affirm::foundation::first_null_index;
///
/// assert_eq!(first_null_index(&[Some(1), None, None]), Some(1));
/// assert_eq!(first_null_index::<i32>(&[]), None);
/// ```
#[must_use]
pub fn first_null_index<T>(elements: &[Option<T>]) -> Option<usize> {
    elements.iter().position(Option::is_none)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_of_several() {
        let xs = [Some("a"), None, Some("b"), None];
        assert_eq!(first_null_index(&xs), Some(1));
    }

    #[test]
    fn none_when_fully_populated() {
        assert_eq!(first_null_index(&[Some(1), Some(2)]), None);
    }

    #[test]
    fn none_for_empty_slice() {
        assert_eq!(first_null_index::<u8>(&[]), None);
    }

    #[test]
    fn leading_absence() {
        assert_eq!(first_null_index(&[None, Some(9)]), Some(0));
    }
}
