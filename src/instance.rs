//! Problem instance definition.
//!
//! An [`Instance`] holds the immutable input of one bin-packing problem:
//! a name, the bin capacity, and the multiset of item sizes. Items are
//! identified by their index into the size table. Two items with equal
//! size are still distinct — every multiset operation in the crate
//! (inheritance, remainder computation, validation) works on ids, never
//! on size values, so duplicate sizes can never be conflated.

use crate::error::{Error, Result};

/// One bin-packing problem: capacity plus item sizes.
///
/// Construction validates the instance: a zero capacity, a zero item
/// size, or an item larger than the capacity is a configuration error
/// that makes the instance unpackable and is reported before any search
/// starts.
///
/// # Examples
///
/// ```
/// use binpack_ga::Instance;
///
/// let instance = Instance::new("t60", 10, vec![6, 5, 4, 3, 2, 2])?;
/// assert_eq!(instance.len(), 6);
/// assert_eq!(instance.total_weight(), 22);
/// assert_eq!(instance.lower_bound(), 3);
/// # Ok::<(), binpack_ga::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    capacity: u32,
    sizes: Vec<u32>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroCapacity`] if `capacity == 0`
    /// - [`Error::ZeroItemSize`] if any size is zero
    /// - [`Error::ItemExceedsCapacity`] if any size exceeds `capacity`
    pub fn new(name: impl Into<String>, capacity: u32, sizes: Vec<u32>) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        for (item, &size) in sizes.iter().enumerate() {
            if size == 0 {
                return Err(Error::ZeroItemSize { item });
            }
            if size > capacity {
                return Err(Error::ItemExceedsCapacity {
                    item,
                    size,
                    capacity,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            capacity,
            sizes,
        })
    }

    /// Instance name, for reporting.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bin capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Size of the item with the given id.
    ///
    /// # Panics
    /// Panics if `item` is out of range.
    pub fn size(&self, item: usize) -> u32 {
        self.sizes[item]
    }

    /// All item sizes, indexed by item id.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// All item ids, `0..len()`.
    pub fn item_ids(&self) -> std::ops::Range<usize> {
        0..self.sizes.len()
    }

    /// Sum of all item sizes.
    pub fn total_weight(&self) -> u64 {
        self.sizes.iter().map(|&s| u64::from(s)).sum()
    }

    /// The trivial lower bound on the bin count:
    /// `ceil(total_weight / capacity)`.
    pub fn lower_bound(&self) -> usize {
        let capacity = u64::from(self.capacity);
        ((self.total_weight() + capacity - 1) / capacity) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let instance = Instance::new("t", 100, vec![50, 30, 100]).unwrap();
        assert_eq!(instance.name(), "t");
        assert_eq!(instance.capacity(), 100);
        assert_eq!(instance.len(), 3);
        assert_eq!(instance.size(2), 100);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            Instance::new("t", 0, vec![1]).unwrap_err(),
            Error::ZeroCapacity
        );
    }

    #[test]
    fn test_zero_item_size_rejected() {
        assert_eq!(
            Instance::new("t", 10, vec![3, 0, 5]).unwrap_err(),
            Error::ZeroItemSize { item: 1 }
        );
    }

    #[test]
    fn test_oversized_item_rejected() {
        assert_eq!(
            Instance::new("t", 10, vec![3, 11]).unwrap_err(),
            Error::ItemExceedsCapacity {
                item: 1,
                size: 11,
                capacity: 10
            }
        );
    }

    #[test]
    fn test_total_weight() {
        let instance = Instance::new("t", 10, vec![6, 5, 4, 3, 2, 2]).unwrap();
        assert_eq!(instance.total_weight(), 22);
    }

    #[test]
    fn test_lower_bound_rounds_up() {
        // 22 / 10 -> 3 bins, not 2
        let instance = Instance::new("t", 10, vec![6, 5, 4, 3, 2, 2]).unwrap();
        assert_eq!(instance.lower_bound(), 3);

        // Exact multiple stays exact
        let instance = Instance::new("t", 10, vec![5, 5, 5, 5]).unwrap();
        assert_eq!(instance.lower_bound(), 2);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new("empty", 10, vec![]).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.total_weight(), 0);
        assert_eq!(instance.lower_bound(), 0);
    }

    #[test]
    fn test_duplicate_sizes_are_distinct_items() {
        let instance = Instance::new("t", 10, vec![2, 2, 2]).unwrap();
        assert_eq!(instance.len(), 3);
        assert_eq!(instance.item_ids().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
