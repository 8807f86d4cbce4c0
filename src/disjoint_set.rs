//! Disjoint-set (union-find) over an arbitrary label universe.
//!
//! Path compression uses halving: during [`DisjointSet::find`] each visited
//! label is repointed to its grandparent, so repeated queries flatten the
//! trees without a second pass. Union-by-rank keeps the trees shallow in the
//! first place; together the two give near-constant amortized cost per
//! operation.

use rustc_hash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisjointSetError {
    #[error("label is not part of the universe")]
    UnknownLabel,
}

/// Parent pointer and rank for one label, kept in a single record so a find
/// touches one map entry per step.
#[derive(Debug, Clone)]
struct Slot<L> {
    parent: L,
    rank: u8,
}

/// A partition of a fixed universe of labels into disjoint sets.
///
/// The universe is supplied once at construction and never grows or shrinks;
/// the only mutation is [`DisjointSet::union`]. Labels can be any `Eq + Hash
/// + Clone` type. Operations on labels outside the universe fail with
/// [`DisjointSetError::UnknownLabel`].
#[derive(Debug, Clone)]
pub struct DisjointSet<L> {
    slots: FxHashMap<L, Slot<L>>,
    set_count: usize,
}

impl<L: Eq + Hash + Clone> DisjointSet<L> {
    /// Creates one singleton set per distinct label in `universe`.
    /// Duplicate labels collapse into a single element.
    pub fn new<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let slots: FxHashMap<L, Slot<L>> = universe
            .into_iter()
            .map(|label| {
                let slot = Slot {
                    parent: label.clone(),
                    rank: 0,
                };
                (label, slot)
            })
            .collect();
        let set_count = slots.len();
        Self { slots, set_count }
    }

    /// Resolves `label` to the representative of its set, compressing the
    /// path by halving as it goes.
    pub fn find(&mut self, label: &L) -> Result<L, DisjointSetError> {
        let mut current = label.clone();
        loop {
            let parent = self.parent_of(&current)?;
            if parent == current {
                return Ok(current);
            }
            let grandparent = self.parent_of(&parent)?;
            if let Some(slot) = self.slots.get_mut(&current) {
                slot.parent = grandparent.clone();
            }
            current = grandparent;
        }
    }

    /// Merges the sets containing `p` and `q`. Already-joined labels are a
    /// no-op; an effective merge attaches the lower-rank root under the
    /// higher-rank one and drops the set count by one.
    pub fn union(&mut self, p: &L, q: &L) -> Result<(), DisjointSetError> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }

        self.set_count -= 1;

        let rank_p = self.rank_of(&root_p)?;
        let rank_q = self.rank_of(&root_q)?;
        let (parent, child) = if rank_p < rank_q {
            (root_q, root_p)
        } else {
            (root_p, root_q)
        };

        if let Some(slot) = self.slots.get_mut(&child) {
            slot.parent = parent.clone();
        }
        if rank_p == rank_q {
            if let Some(slot) = self.slots.get_mut(&parent) {
                slot.rank += 1;
            }
        }
        Ok(())
    }

    /// Whether `p` and `q` currently belong to the same set.
    pub fn connected(&mut self, p: &L, q: &L) -> Result<bool, DisjointSetError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// The current number of disjoint sets.
    pub fn count(&self) -> usize {
        self.set_count
    }

    fn parent_of(&self, label: &L) -> Result<L, DisjointSetError> {
        self.slots
            .get(label)
            .map(|slot| slot.parent.clone())
            .ok_or(DisjointSetError::UnknownLabel)
    }

    fn rank_of(&self, label: &L) -> Result<u8, DisjointSetError> {
        self.slots
            .get(label)
            .map(|slot| slot.rank)
            .ok_or(DisjointSetError::UnknownLabel)
    }
}
