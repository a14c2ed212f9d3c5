//! Concurrent inverted index from sequence keys to token occurrences.
//!
//! Keys are spread over a fixed number of shards, each guarded by its own
//! read-write lock. Creating an entry and appending an occurrence to it
//! happen under a single shard write lock, so concurrent inserts of the
//! same key never lose an occurrence.

pub mod entry;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::{AHashMap, RandomState};
use parking_lot::RwLock;

use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;

pub use entry::{IndexEntry, Occurrence};

type Shard<C, R> = RwLock<AHashMap<SequenceKey<C>, IndexEntry<C, R>>>;

/// A sharded map from [`SequenceKey`] to the occurrences indexed under it.
pub struct SequenceIndex<C, R> {
    shards: Box<[Shard<C, R>]>,
    hasher: RandomState,
    key_count: AtomicUsize,
    occurrence_count: AtomicUsize,
}

impl<C: Symbol, R> SequenceIndex<C, R> {
    /// Create an index with the given number of shards. Zero is treated as
    /// one.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| RwLock::new(AHashMap::new()))
            .collect();
        SequenceIndex {
            shards,
            hasher: RandomState::new(),
            key_count: AtomicUsize::new(0),
            occurrence_count: AtomicUsize::new(0),
        }
    }

    fn shard(&self, key: &SequenceKey<C>) -> &Shard<C, R> {
        let slot = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[slot]
    }

    /// Record an occurrence of `token` for `reference` under the token's
    /// sequence key.
    pub fn insert(&self, token: Arc<Token<C>>, reference: R) {
        let key = token.sequence_key();
        let mut shard = self.shard(&key).write();
        let entry = shard.entry(key).or_insert_with(|| {
            self.key_count.fetch_add(1, Ordering::Relaxed);
            IndexEntry::default()
        });
        entry.push(Occurrence::new(token, reference));
        self.occurrence_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether any occurrence is indexed under `key`.
    pub fn contains(&self, key: &SequenceKey<C>) -> bool {
        self.shard(key).read().contains_key(key)
    }

    /// Run `f` against the entry for `key` while holding the shard read
    /// lock. Returns `None` when the key is absent.
    pub fn visit_entry<T>(
        &self,
        key: &SequenceKey<C>,
        f: impl FnOnce(&IndexEntry<C, R>) -> T,
    ) -> Option<T> {
        self.shard(key).read().get(key).map(f)
    }

    /// Run `f` against every entry, one shard at a time.
    pub fn for_each_entry(&self, mut f: impl FnMut(&SequenceKey<C>, &IndexEntry<C, R>)) {
        for shard in self.shards.iter() {
            for (key, entry) in shard.read().iter() {
                f(key, entry);
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.key_count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of occurrences across all keys.
    pub fn occurrence_count(&self) -> usize {
        self.occurrence_count.load(Ordering::Relaxed)
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl<C, R> fmt::Debug for SequenceIndex<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceIndex")
            .field("shards", &self.shards.len())
            .field("keys", &self.key_count.load(Ordering::Relaxed))
            .field("occurrences", &self.occurrence_count.load(Ordering::Relaxed))
            .finish()
    }
}
