//! # linear-set
//!
//! An in-memory set of unique keys built on Linear Hashing with overflow
//! chains.
//!
//! Unlike a conventional hash table, the bucket directory grows **one bucket
//! at a time**: a split cursor sweeps the address space, and each split
//! redistributes a single bucket over one freshly appended directory slot.
//! No insert ever pays for a full-table rehash, so growth cost is spread
//! evenly across insertions.
//!
//! ## Addressing
//!
//! A key hashing to `h` lives at `h mod 2^d`, unless that index is behind
//! the split cursor — those buckets were already split this round and use
//! `h mod 2^(d+1)` instead. When the cursor finishes a sweep, `d` increments
//! and the sweep restarts. Keys that do not fit in their `N`-slot bucket
//! spill into a singly linked overflow chain, kept short by the split
//! policy.
//!
//! ## Example
//!
//! ```rust
//! use linear_set::LinearHashSet;
//!
//! let mut set: LinearHashSet<String> = LinearHashSet::new();
//! set.insert("alpha".to_string());
//! set.insert("beta".to_string());
//! assert!(set.contains(&"alpha".to_string()));
//! assert_eq!(set.len(), 2);
//!
//! // bucket capacity and hash state are both pluggable
//! let wide: LinearHashSet<u64, 7> = (0..100).collect();
//! assert_eq!(wide.len(), 100);
//! ```
//!
//! The bucket capacity `N` defaults to 3; small constants keep chains short
//! and splits cheap. The hash state parameter `S` works exactly as in
//! `std::collections::HashSet`.

pub mod error;
pub mod iter;
pub mod set;

mod bucket;
mod serde_impls;

pub use error::SetError;
pub use iter::{IntoIter, Iter};
pub use set::LinearHashSet;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut set: LinearHashSet<String> = LinearHashSet::new();

        assert!(set.insert("key1".to_string()));
        assert!(set.insert("key2".to_string()));
        assert!(set.insert("key3".to_string()));

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());

        assert!(set.contains(&"key1".to_string()));
        assert!(set.contains(&"key2".to_string()));
        assert!(set.contains(&"key3".to_string()));
        assert!(!set.contains(&"key4".to_string()));

        assert!(set.remove(&"key2".to_string()));
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&"key2".to_string()));
    }

    #[test]
    fn test_duplicate_insert_reports_false() {
        let mut set: LinearHashSet<i32> = LinearHashSet::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_iterator_folds_duplicates() {
        let set: LinearHashSet<i32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_default_is_empty() {
        let set: LinearHashSet<u64> = LinearHashSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_debug_formats_as_set() {
        let mut set: LinearHashSet<u32> = LinearHashSet::new();
        set.insert(1);
        let rendered = format!("{:?}", set);
        assert_eq!(rendered, "{1}");
    }

    #[test]
    fn test_large_dataset() {
        let mut set: LinearHashSet<i32> = LinearHashSet::new();
        for i in 0..1000 {
            assert!(set.insert(i));
        }
        assert_eq!(set.len(), 1000);
        for i in 0..1000 {
            assert!(set.contains(&i));
        }
        assert!(!set.contains(&1000));
    }
}
