//! Fixed-capacity buckets and their overflow chains.
//!
//! A primary bucket together with its overflow chain behaves as one expanded
//! bucket of capacity `N * (1 + chain length)`. The chain is singly linked,
//! exclusively owned, and only ever walked head to tail.

/// A bucket holding up to `N` key slots plus an owned link to an overflow
/// bucket. A free slot is `None`; slot order carries no meaning.
pub(crate) struct Bucket<K, const N: usize> {
    pub(crate) slots: [Option<K>; N],
    pub(crate) overflow: Option<Box<Bucket<K, N>>>,
}

impl<K, const N: usize> Bucket<K, N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            overflow: None,
        }
    }

    /// Index of some free slot, if any.
    pub(crate) fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Writes `key` into a free slot and returns its index. A full bucket is
    /// not mutated; the key is handed back.
    pub(crate) fn try_place(&mut self, key: K) -> Result<usize, K> {
        match self.free_slot() {
            Some(slot) => {
                self.slots[slot] = Some(key);
                Ok(slot)
            }
            None => Err(key),
        }
    }

    /// Index of the slot holding a key equal to `key` in this bucket alone.
    pub(crate) fn find(&self, key: &K) -> Option<usize>
    where
        K: Eq,
    {
        self.slots.iter().position(|slot| slot.as_ref() == Some(key))
    }

    /// Frees slot `index` and returns the key it held.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<K> {
        self.slots[index].take()
    }

    /// Walks the chain head to tail and returns a reference to the first
    /// stored key equal to `key`.
    pub(crate) fn chain_find(&self, key: &K) -> Option<&K>
    where
        K: Eq,
    {
        let mut bucket = Some(self);
        while let Some(b) = bucket {
            if let Some(slot) = b.find(key) {
                return b.slots[slot].as_ref();
            }
            bucket = b.overflow.as_deref();
        }
        None
    }

    /// Places `key` into the first free slot of the chain, appending a fresh
    /// overflow bucket at the tail when every bucket is full. Returns `true`
    /// iff an overflow bucket had to be appended.
    pub(crate) fn chain_insert(&mut self, mut key: K) -> bool {
        let mut appended = false;
        let mut bucket = self;
        loop {
            key = match bucket.try_place(key) {
                Ok(_) => return appended,
                Err(key) => key,
            };
            appended = bucket.overflow.is_none();
            bucket = bucket
                .overflow
                .get_or_insert_with(|| Box::new(Bucket::new()))
                .as_mut();
        }
    }

    /// Removes the first stored key equal to `key` from the chain and returns
    /// it. The vacated slot stays free; the chain is not compacted.
    pub(crate) fn chain_remove(&mut self, key: &K) -> Option<K>
    where
        K: Eq,
    {
        let mut bucket = Some(self);
        while let Some(b) = bucket {
            if let Some(slot) = b.find(key) {
                return b.remove_at(slot);
            }
            bucket = b.overflow.as_deref_mut();
        }
        None
    }

    /// Drains every occupied key out of the chain, releasing the overflow
    /// buckets as they are emptied. Used when a bucket is redistributed.
    pub(crate) fn take_keys(&mut self) -> Vec<K> {
        let mut keys = Vec::new();
        for slot in self.slots.iter_mut() {
            if let Some(key) = slot.take() {
                keys.push(key);
            }
        }
        let mut next = self.overflow.take();
        while let Some(mut bucket) = next {
            for slot in bucket.slots.iter_mut() {
                if let Some(key) = slot.take() {
                    keys.push(key);
                }
            }
            next = bucket.overflow.take();
        }
        keys
    }
}

impl<K, const N: usize> Drop for Bucket<K, N> {
    fn drop(&mut self) {
        // Unlink the chain front to back so drop recursion depth stays
        // constant regardless of chain length.
        let mut next = self.overflow.take();
        while let Some(mut bucket) = next {
            next = bucket.overflow.take();
        }
    }
}

impl<K: Clone, const N: usize> Clone for Bucket<K, N> {
    fn clone(&self) -> Self {
        Self {
            slots: std::array::from_fn(|i| self.slots[i].clone()),
            overflow: self.overflow.clone(),
        }
    }
}
