use std::collections::{HashMap, HashSet};

use crate::grid::CellFrame;

/// Registry mapping cell indices to their last solved frames.
///
/// Hosts re-solve on every container change; the registry tells them which
/// cells actually moved so unchanged cells can keep their current placement.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    entries: HashMap<usize, CellFrame>,
    dirty: HashSet<usize>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb the frames of a fresh layout pass. New and moved cells are
    /// flagged dirty; cells absent from the pass are dropped.
    pub fn sync_frames(&mut self, frames: &[CellFrame]) {
        use std::collections::hash_map::Entry;

        let live: HashSet<usize> = frames.iter().map(|frame| frame.index).collect();

        for frame in frames {
            match self.entries.entry(frame.index) {
                Entry::Occupied(mut entry) => {
                    if entry.get().rect != frame.rect {
                        entry.insert(*frame);
                        self.dirty.insert(frame.index);
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(*frame);
                    self.dirty.insert(frame.index);
                }
            }
        }

        self.entries.retain(|index, _| live.contains(index));
        self.dirty.retain(|index| live.contains(index));
    }

    /// Drain the dirty set in ascending index order.
    pub fn take_dirty(&mut self) -> Vec<CellFrame> {
        let mut indices: Vec<usize> = self.dirty.drain().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .filter_map(|index| self.entries.get(&index).copied())
            .collect()
    }

    pub fn frame_of(&self, index: usize) -> Option<CellFrame> {
        self.entries.get(&index).copied()
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
