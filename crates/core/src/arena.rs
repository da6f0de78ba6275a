//! Generational arena storage.
//!
//! Scene entities (nodes, meshes, textures) are addressed by [`Handle`]s
//! into an [`Arena`] instead of by pointers. A handle carries the slot index
//! and the generation the slot had when the value was inserted; after the
//! value is removed, the old handle no longer resolves. This gives stable,
//! copyable identities without any aliasing of freed storage.

use std::fmt;
use std::marker::PhantomData;

/// A generation-checked handle to a value stored in an [`Arena`].
///
/// Handles are small, `Copy`, and typed: a `Handle<Mesh>` cannot be used to
/// index an `Arena<Texture>`. A handle to a removed value is *stale*; stale
/// handles fail to resolve rather than aliasing whatever reuses the slot.
pub struct Handle<T> {
    index: usize,
    generation: u64,
    phantom: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Slot index inside the arena. Only meaningful for diagnostics.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::hash::Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

/// Slot storage: the value (if occupied) and the slot's current generation.
struct Entry<T> {
    value: Option<T>,
    generation: u64,
}

/// A generational arena.
///
/// Insertion returns a [`Handle`]; removal bumps nothing but frees the slot
/// for reuse, and the next insertion into that slot increments its
/// generation so older handles stop resolving.
pub struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a value, returning a handle to it.
    ///
    /// Reuses a freed slot when one is available, bumping its generation.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.entries.push(Entry {
                    value: None,
                    generation: 0,
                });
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        entry.generation += 1;
        entry.value = Some(value);
        self.len += 1;

        Handle {
            index,
            generation: entry.generation,
            phantom: PhantomData,
        }
    }

    /// Remove the value behind `handle`, returning it.
    ///
    /// Returns `None` when the handle is stale or was never valid.
    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let entry = self.entries.get_mut(handle.index)?;
        if entry.generation != handle.generation {
            return None;
        }
        let value = entry.value.take()?;
        self.free.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    /// Resolve a handle to a shared reference, or `None` when stale.
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        let entry = self.entries.get(handle.index)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.value.as_ref()
    }

    /// Resolve a handle to a mutable reference, or `None` when stale.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        let entry = self.entries.get_mut(handle.index)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.value.as_mut()
    }

    /// True when `handle` still resolves to a live value.
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.get(handle).is_some()
    }

    /// Iterate over all live values with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry.value.as_ref().map(|value| {
                (
                    Handle {
                        index,
                        generation: entry.generation,
                        phantom: PhantomData,
                    },
                    value,
                )
            })
        })
    }
}
