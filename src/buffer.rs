//! Heap buffer lifecycle.
//!
//! Two models of the same allocate / fill / read / release sequence:
//!
//! - [`HeapBuffer`] is an owning handle. Releasing consumes it, and `Drop`
//!   releases it on every other exit path, so a buffer is freed exactly once
//!   and cannot be touched afterward.
//! - [`HeapArena`] hands out generation-tagged [`BufferId`]s. It exists to show
//!   what dangling access and double release look like when they are caught at
//!   runtime instead of compile time.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{DemoError, DemoResult};

// =============================================================================
// Owning handle
// =============================================================================

type ReleaseHook = Box<dyn FnOnce(usize)>;

/// A fixed-size block of integer slots that starts out uninitialized.
///
/// Once released the handle is gone, so reading it is a compile error:
///
/// ```compile_fail
/// use pointer_concepts::buffer::HeapBuffer;
///
/// let mut buffer = HeapBuffer::allocate(3).unwrap();
/// buffer.write(0, 10).unwrap();
/// buffer.release();
/// let _ = buffer.read(0);
/// ```
pub struct HeapBuffer {
    slots: Box<[Option<i32>]>,
    on_release: Option<ReleaseHook>,
}

impl HeapBuffer {
    pub fn allocate(len: usize) -> DemoResult<Self> {
        if len == 0 {
            return Err(DemoError::invalid_input(
                "0",
                "a buffer needs at least one slot",
            ));
        }
        log::debug!("allocated heap buffer with {len} slots");
        Ok(HeapBuffer {
            slots: vec![None; len].into_boxed_slice(),
            on_release: None,
        })
    }

    /// Registers a callback that runs once, when the buffer is released.
    pub fn on_release(mut self, hook: impl FnOnce(usize) + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn write(&mut self, index: usize, value: i32) -> DemoResult<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DemoError::OutOfBounds { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn read(&self, index: usize) -> DemoResult<i32> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(DemoError::OutOfBounds { index, len })?
            .ok_or(DemoError::UninitializedRead { index })
    }

    /// Copies `values` into the leading slots.
    pub fn fill_from(&mut self, values: &[i32]) -> DemoResult<()> {
        if values.len() > self.slots.len() {
            return Err(DemoError::OutOfBounds {
                index: values.len() - 1,
                len: self.slots.len(),
            });
        }
        for (slot, value) in self.slots.iter_mut().zip(values) {
            *slot = Some(*value);
        }
        Ok(())
    }

    /// Every slot's value, failing on the first uninitialized one.
    pub fn values(&self) -> DemoResult<Vec<i32>> {
        (0..self.slots.len()).map(|index| self.read(index)).collect()
    }

    /// Frees the buffer and returns how many slots were released.
    pub fn release(self) -> usize {
        let len = self.slots.len();
        drop(self);
        len
    }
}

impl Drop for HeapBuffer {
    fn drop(&mut self) {
        let len = self.slots.len();
        log::debug!("released heap buffer with {len} slots");
        if let Some(hook) = self.on_release.take() {
            hook(len);
        }
    }
}

impl fmt::Debug for HeapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Generation-checked arena
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId {
    arena: u32,
    index: usize,
    generation: u32,
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Entry {
    generation: u32,
    block: Option<Vec<Option<i32>>>,
}

static NEXT_ARENA: AtomicU32 = AtomicU32::new(0);

/// Ids are tagged with the arena that issued them; any other arena rejects
/// them as invalid input.
#[derive(Debug)]
pub struct HeapArena {
    tag: u32,
    entries: Vec<Entry>,
    free: Vec<usize>,
}

impl Default for HeapArena {
    fn default() -> Self {
        HeapArena {
            tag: NEXT_ARENA.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl HeapArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, len: usize) -> DemoResult<BufferId> {
        if len == 0 {
            return Err(DemoError::invalid_input(
                "0",
                "a buffer needs at least one slot",
            ));
        }

        let block = Some(vec![None; len]);
        let (index, generation) = match self.free.pop() {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.block = block;
                (index, entry.generation)
            }
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    block,
                });
                (self.entries.len() - 1, 0)
            }
        };
        let id = BufferId {
            arena: self.tag,
            index,
            generation,
        };
        log::debug!("arena allocated {id} with {len} slots");
        Ok(id)
    }

    pub fn write(&mut self, id: BufferId, index: usize, value: i32) -> DemoResult<()> {
        let block = self.live_mut(id)?;
        let len = block.len();
        let slot = block
            .get_mut(index)
            .ok_or(DemoError::OutOfBounds { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn read(&self, id: BufferId, index: usize) -> DemoResult<i32> {
        let block = self.live(id)?;
        block
            .get(index)
            .ok_or(DemoError::OutOfBounds {
                index,
                len: block.len(),
            })?
            .ok_or(DemoError::UninitializedRead { index })
    }

    /// Frees the block behind `id`. Every id for that block goes stale.
    pub fn release(&mut self, id: BufferId) -> DemoResult<usize> {
        let entry = self.issued_mut(id)?;
        if entry.generation != id.generation || entry.block.is_none() {
            log::warn!("rejected second release of {id}");
            return Err(DemoError::DoubleRelease { id: id.to_string() });
        }

        let len = entry.block.take().map_or(0, |block| block.len());
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.index);
        log::debug!("arena released {id} ({len} slots)");
        Ok(len)
    }

    pub fn is_live(&self, id: BufferId) -> bool {
        self.live(id).is_ok()
    }

    /// Number of blocks allocated and not yet released.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.block.is_some()).count()
    }

    /// The entry `id` points at, provided this arena handed the id out.
    fn issued(&self, id: BufferId) -> DemoResult<&Entry> {
        match self.entries.get(id.index) {
            Some(entry) if id.arena == self.tag && id.generation <= entry.generation => Ok(entry),
            _ => Err(Self::foreign(id)),
        }
    }

    fn issued_mut(&mut self, id: BufferId) -> DemoResult<&mut Entry> {
        let tag = self.tag;
        match self.entries.get_mut(id.index) {
            Some(entry) if id.arena == tag && id.generation <= entry.generation => Ok(entry),
            _ => Err(Self::foreign(id)),
        }
    }

    fn live(&self, id: BufferId) -> DemoResult<&Vec<Option<i32>>> {
        let entry = self.issued(id)?;
        if entry.generation != id.generation {
            return Err(Self::dangling(id));
        }
        entry.block.as_ref().ok_or_else(|| Self::dangling(id))
    }

    fn live_mut(&mut self, id: BufferId) -> DemoResult<&mut Vec<Option<i32>>> {
        let entry = self.issued_mut(id)?;
        if entry.generation != id.generation {
            return Err(Self::dangling(id));
        }
        entry.block.as_mut().ok_or_else(|| Self::dangling(id))
    }

    fn dangling(id: BufferId) -> DemoError {
        log::warn!("rejected access through released {id}");
        DemoError::UseAfterRelease { id: id.to_string() }
    }

    fn foreign(id: BufferId) -> DemoError {
        log::warn!("rejected {id}: not issued by this arena");
        DemoError::invalid_input(id.to_string(), "buffer id was not issued by this arena")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_buffer(len: usize, releases: &Rc<Cell<usize>>) -> HeapBuffer {
        let counter = Rc::clone(releases);
        HeapBuffer::allocate(len)
            .unwrap()
            .on_release(move |_| counter.set(counter.get() + 1))
    }

    // Owning handle
    #[test]
    fn test_buffer_round_trip() {
        let mut buffer = HeapBuffer::allocate(3).unwrap();
        buffer.write(0, 10).unwrap();
        buffer.write(1, 20).unwrap();
        buffer.write(2, 30).unwrap();
        assert_eq!(buffer.values().unwrap(), vec![10, 20, 30]);
        assert_eq!(buffer.release(), 3);
    }

    #[test]
    fn test_buffer_starts_uninitialized() {
        let buffer = HeapBuffer::allocate(2).unwrap();
        assert!(matches!(
            buffer.read(1),
            Err(DemoError::UninitializedRead { index: 1 })
        ));
    }

    #[test]
    fn test_buffer_bounds_are_checked() {
        let mut buffer = HeapBuffer::allocate(3).unwrap();
        assert!(matches!(
            buffer.write(3, 1),
            Err(DemoError::OutOfBounds { index: 3, len: 3 })
        ));
        assert!(buffer.fill_from(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            HeapBuffer::allocate(0),
            Err(DemoError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_explicit_release_runs_once() {
        let releases = Rc::new(Cell::new(0));
        let buffer = counting_buffer(3, &releases);
        assert_eq!(buffer.release(), 3);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_early_return_still_releases() {
        fn fill_then_fail(buffer: &mut HeapBuffer) -> DemoResult<()> {
            buffer.fill_from(&[10, 20])?;
            buffer.read(2)?;
            Ok(())
        }

        let releases = Rc::new(Cell::new(0));
        {
            let mut buffer = counting_buffer(3, &releases);
            assert!(fill_then_fail(&mut buffer).is_err());
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_moved_buffer_released_once() {
        let releases = Rc::new(Cell::new(0));
        let buffer = counting_buffer(4, &releases);
        let moved = buffer;
        drop(moved);
        assert_eq!(releases.get(), 1);
    }

    // Arena
    #[test]
    fn test_arena_round_trip() {
        let mut arena = HeapArena::new();
        let id = arena.allocate(3).unwrap();
        for (i, v) in [10, 20, 30].into_iter().enumerate() {
            arena.write(id, i, v).unwrap();
        }
        let read: Vec<i32> = (0..3).map(|i| arena.read(id, i).unwrap()).collect();
        assert_eq!(read, vec![10, 20, 30]);
        assert_eq!(arena.live_count(), 1);
    }

    #[test]
    fn test_arena_read_after_release_rejected() {
        let mut arena = HeapArena::new();
        let id = arena.allocate(3).unwrap();
        arena.write(id, 0, 10).unwrap();
        assert_eq!(arena.release(id).unwrap(), 3);

        let err = arena.read(id, 0).unwrap_err();
        assert!(matches!(err, DemoError::UseAfterRelease { .. }));
        assert!(err.is_lifecycle_violation());
        assert!(arena.write(id, 0, 1).is_err());
        assert_eq!(arena.live_count(), 0);
    }

    #[test]
    fn test_arena_double_release_rejected() {
        let mut arena = HeapArena::new();
        let id = arena.allocate(1).unwrap();
        arena.release(id).unwrap();
        assert!(matches!(
            arena.release(id),
            Err(DemoError::DoubleRelease { .. })
        ));
    }

    #[test]
    fn test_arena_reuse_does_not_revive_stale_id() {
        let mut arena = HeapArena::new();
        let stale = arena.allocate(2).unwrap();
        arena.release(stale).unwrap();

        let fresh = arena.allocate(2).unwrap();
        arena.write(fresh, 0, 7).unwrap();

        assert_ne!(stale, fresh);
        assert!(arena.is_live(fresh));
        assert!(!arena.is_live(stale));
        assert!(arena.read(stale, 0).is_err());
        assert!(arena.release(stale).is_err());
        assert_eq!(arena.read(fresh, 0).unwrap(), 7);
    }

    #[test]
    fn test_arena_rejects_ids_it_never_issued() {
        let mut a = HeapArena::new();
        let mut b = HeapArena::new();
        let _ = b.allocate(1).unwrap();
        let _ = b.allocate(1).unwrap();
        let from_b = b.allocate(1).unwrap();

        for err in [a.read(from_b, 0).unwrap_err(), a.release(from_b).unwrap_err()] {
            assert!(matches!(err, DemoError::InvalidInput { .. }), "{err:?}");
            assert!(!err.is_lifecycle_violation());
        }
        assert!(a.write(from_b, 0, 1).is_err());
        assert!(!a.is_live(from_b));
        assert!(b.is_live(from_b));
    }

    #[test]
    fn test_arena_rejects_foreign_id_at_shared_index() {
        let mut a = HeapArena::new();
        let mut b = HeapArena::new();
        let own = a.allocate(1).unwrap();
        let from_b = b.allocate(1).unwrap();

        assert!(matches!(
            a.release(from_b),
            Err(DemoError::InvalidInput { .. })
        ));
        assert!(a.is_live(own));
    }

    #[test]
    fn test_buffer_id_display() {
        let mut arena = HeapArena::new();
        let id = arena.allocate(1).unwrap();
        assert_eq!(id.to_string(), "#0v0");
        arena.release(id).unwrap();
        let next = arena.allocate(1).unwrap();
        assert_eq!(next.to_string(), "#0v1");
    }
}
