//! Element compatibility contract shared by every container in the crate.

/// Types that may be stored in the linked structures.
///
/// Elements must support equality (find/update scan by value) and be safe to
/// hand to whichever thread currently owns the container. Blanket-implemented
/// for every eligible type, so user code never implements it by hand.
pub trait Compatible: PartialEq + Send {}

impl<T: PartialEq + Send> Compatible for T {}

/// Elements storable in the hash table.
///
/// On top of [`Compatible`], each element exposes a non-negative integer key
/// that drives both hash functions. The key is assumed unique among live
/// entries; storing two elements with the same key does not deduplicate.
pub trait Keyed: Compatible {
    fn key(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u64,
        label: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> u64 {
            self.id
        }
    }

    fn assert_compatible<T: Compatible>() {}

    #[test]
    fn common_types_are_compatible() {
        assert_compatible::<i32>();
        assert_compatible::<u64>();
        assert_compatible::<String>();
        assert_compatible::<Option<bool>>();
        assert_compatible::<Item>();
    }

    #[test]
    fn keyed_exposes_the_integer_key() {
        let item = Item { id: 42, label: "x" };
        assert_eq!(item.key(), 42);
        assert_eq!(item.label, "x");
    }
}
