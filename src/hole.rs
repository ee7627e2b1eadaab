use core::cmp::Ordering;
use core::mem::ManuallyDrop;
use core::ptr;

/// A slot of a heap slice whose element has been taken out.
///
/// The sift routines walk the hole along a parent/child path and pull the
/// elements they pass over into it, one move per level instead of a swap.
/// Dropping the hole writes the taken element into wherever the hole ended
/// up, so the slice is whole again even if a comparator panicked midway.
pub(crate) struct Hole<'a, T> {
    slots: &'a mut [T],
    taken: ManuallyDrop<T>,
    at: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Takes the element at `at` out of `slots`.
    ///
    /// # Safety
    ///
    /// `at` must be in bounds of `slots`.
    pub(crate) unsafe fn take(slots: &'a mut [T], at: usize) -> Self {
        debug_assert!(at < slots.len());
        // SAFETY: the caller keeps `at` in bounds. The bits left in the slot
        //  count as moved out until Drop writes `taken` back over them.
        let taken = unsafe { ptr::read(slots.as_ptr().add(at)) };
        Hole {
            slots,
            taken: ManuallyDrop::new(taken),
            at,
        }
    }

    #[inline]
    pub(crate) fn at(&self) -> usize {
        self.at
    }

    #[inline]
    pub(crate) fn taken(&self) -> &T {
        &self.taken
    }

    /// The parent of the hole, unless the hole is already at `floor`.
    ///
    /// `floor` has to be an ancestor of the hole (or the hole itself).
    #[inline]
    pub(crate) fn parent_above(&self, floor: usize) -> Option<usize> {
        if self.at > floor {
            Some((self.at - 1) / 2)
        } else {
            None
        }
    }

    /// The child of the hole that `cmp` ranks lowest, looking only at
    /// `slots[..end]`.
    pub(crate) fn lesser_child<F>(&self, end: usize, cmp: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let end = end.min(self.slots.len());
        let left = 2 * self.at + 1;
        if left >= end {
            return None;
        }
        let right = left + 1;
        // SAFETY: at < left < right < end <= slots.len().
        if right < end && unsafe { cmp(self.peek(right), self.peek(left)) } == Ordering::Less {
            Some(right)
        } else {
            Some(left)
        }
    }

    /// The element in slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole.
    #[inline]
    pub(crate) unsafe fn peek(&self, index: usize) -> &T {
        debug_assert!(index != self.at && index < self.slots.len());
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Moves the element in slot `index` into the hole; the hole is then at
    /// `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole.
    #[inline]
    pub(crate) unsafe fn pull(&mut self, index: usize) {
        debug_assert!(index != self.at && index < self.slots.len());
        let base = self.slots.as_mut_ptr();
        // SAFETY: both slots are in bounds and distinct.
        unsafe { ptr::copy_nonoverlapping(base.add(index), base.add(self.at), 1) };
        self.at = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    fn drop(&mut self) {
        // SAFETY: `at` is in bounds and holds a moved-out duplicate, so the
        //  write neither leaks nor double drops. `taken` is not used again.
        unsafe {
            let taken = ManuallyDrop::take(&mut self.taken);
            ptr::write(self.slots.as_mut_ptr().add(self.at), taken);
        }
    }
}
