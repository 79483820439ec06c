//! Growable circular buffer of observations
//!
//! Values are appended at `tail` and removed from `head`, both wrapping modulo
//! the capacity. When the buffer is full it is grown by allocating a larger
//! store and copying the live values into it in logical order, so that after
//! growth the oldest value sits at index 0.

use crate::{Error, Result};
use tracing::debug;

/// Fixed-capacity ring store that can be grown on demand
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    values: Vec<T>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Copy + Default> CircularBuffer<T> {
    /// Allocate a buffer with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidParameter(
                "buffer capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            values: allocate(capacity)?,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Append a value at the tail.
    ///
    /// The buffer must not be full; use [`push_growing`](Self::push_growing)
    /// when the caller has not grown it beforehand.
    pub fn push(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push into a full circular buffer");
        self.values[self.tail] = value;
        self.tail = (self.tail + 1) % self.capacity();
        self.count += 1;
    }

    /// Grow by `factor` if full, then append.
    ///
    /// On allocation failure the buffer is left untouched.
    pub fn push_growing(&mut self, value: T, factor: usize) -> Result<()> {
        if self.is_full() {
            self.grow(factor)?;
        }
        self.push(value);
        Ok(())
    }

    /// Remove and return the oldest value, or `None` if the buffer is empty
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.values[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        Some(value)
    }

    /// The `index`-th oldest live value
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        Some(self.values[self.physical_index(index)])
    }

    /// Live values from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.count).map(move |i| self.values[self.physical_index(i)])
    }

    /// Drop all live values, keeping the allocation
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Multiply the capacity by `factor`, unrolling the ring into the new store
    pub fn grow(&mut self, factor: usize) -> Result<()> {
        if factor < 2 {
            return Err(Error::InvalidParameter(format!(
                "growth factor must be at least 2, got {factor}"
            )));
        }
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.checked_mul(factor).ok_or_else(|| {
            Error::Memory(format!("capacity {old_capacity} x {factor} overflows"))
        })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(new_capacity)
            .map_err(|_| Error::allocation(new_capacity))?;
        values.extend(self.iter());
        values.resize(new_capacity, T::default());

        debug!(
            old_capacity,
            new_capacity,
            live = self.count,
            "growing circular buffer"
        );

        self.values = values;
        self.head = 0;
        self.tail = self.count;
        Ok(())
    }

    #[inline]
    fn physical_index(&self, logical_index: usize) -> usize {
        (self.head + logical_index) % self.capacity()
    }
}

fn allocate<T: Copy + Default>(capacity: usize) -> Result<Vec<T>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(capacity)
        .map_err(|_| Error::allocation(capacity))?;
    values.resize(capacity, T::default());
    Ok(values)
}
