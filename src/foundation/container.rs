//! Length-bearing containers the emptiness and index checks range over.
//!
//! The original per-container overload quartets (array / collection / map /
//! character sequence) collapse into one generic check over this trait; the
//! noun each overload used in its default message survives as
//! [`Container::NOUN`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A finite container with a length and a default-message noun.
pub trait Container {
    /// Noun used in default failure messages ("array", "collection", "map",
    /// "character sequence").
    const NOUN: &'static str;

    /// Number of elements (bytes, for string types).
    fn length(&self) -> usize;

    /// True when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

/// A [`Container`] whose elements are addressable by position.
///
/// The index check ranges over this marker rather than `Container`: maps and
/// sets have a length but no meaningful `usize` index, so they take the
/// emptiness checks and are rejected here at compile time.
pub trait Sequence: Container {}

impl<C: Container + ?Sized> Container for &C {
    const NOUN: &'static str = C::NOUN;

    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {}

impl<T> Sequence for [T] {}
impl<T, const N: usize> Sequence for [T; N] {}
impl Sequence for str {}
impl Sequence for String {}
impl<T> Sequence for Vec<T> {}
impl<T> Sequence for VecDeque<T> {}

impl<T> Container for [T] {
    const NOUN: &'static str = "array";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Container for [T; N] {
    const NOUN: &'static str = "array";

    fn length(&self) -> usize {
        N
    }
}

impl Container for str {
    const NOUN: &'static str = "character sequence";

    fn length(&self) -> usize {
        self.len()
    }
}

impl Container for String {
    const NOUN: &'static str = "character sequence";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Container for Vec<T> {
    const NOUN: &'static str = "collection";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Container for VecDeque<T> {
    const NOUN: &'static str = "collection";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Container for HashSet<T, S> {
    const NOUN: &'static str = "collection";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Container for BTreeSet<T> {
    const NOUN: &'static str = "collection";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    const NOUN: &'static str = "map";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    const NOUN: &'static str = "map";

    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_is_an_array() {
        let xs: &[i32] = &[1, 2, 3];
        assert_eq!(<&[i32]>::NOUN, "array");
        assert_eq!(xs.length(), 3);
        assert!(!Container::is_empty(&xs));
    }

    #[test]
    fn fixed_array_reports_its_size() {
        let xs = [0u8; 4];
        assert_eq!(xs.length(), 4);
        assert_eq!(<[u8; 4]>::NOUN, "array");
    }

    #[test]
    fn string_types_are_character_sequences() {
        assert_eq!(<&str>::NOUN, "character sequence");
        assert_eq!(String::NOUN, "character sequence");
        assert!(Container::is_empty(&""));
        assert_eq!("hëllo".length(), "hëllo".len());
    }

    #[test]
    fn maps_and_sets() {
        let mut m = HashMap::new();
        assert!(Container::is_empty(&m));
        m.insert("k", 1);
        assert_eq!(m.length(), 1);
        assert_eq!(HashMap::<&str, i32>::NOUN, "map");
        assert_eq!(BTreeSet::<i32>::NOUN, "collection");
    }

    #[test]
    fn position_addressable_types_are_sequences() {
        fn length_of<S: Sequence>(s: S) -> usize {
            s.length()
        }
        assert_eq!(length_of(vec![1, 2]), 2);
        assert_eq!(length_of("ab"), 2);
        assert_eq!(length_of([0u8; 3]), 3);
        assert_eq!(length_of(&[1][..]), 1);
        assert_eq!(length_of(VecDeque::from([1, 2, 3])), 3);
    }

    #[test]
    fn reference_forwards_to_referent() {
        let v = vec![1, 2];
        let r = &v;
        assert_eq!(r.length(), 2);
        assert_eq!(<&Vec<i32>>::NOUN, "collection");
    }
}
