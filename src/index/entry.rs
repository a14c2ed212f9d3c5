use std::sync::Arc;

use crate::analysis::token::Token;

/// One indexed token together with the reference it was ingested for.
#[derive(Debug, Clone)]
pub struct Occurrence<C, R> {
    token: Arc<Token<C>>,
    reference: R,
}

impl<C, R> Occurrence<C, R> {
    pub fn new(token: Arc<Token<C>>, reference: R) -> Self {
        Occurrence { token, reference }
    }

    pub fn token(&self) -> &Arc<Token<C>> {
        &self.token
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }
}

/// All occurrences recorded under one key, in insertion order per writer.
#[derive(Debug, Clone)]
pub struct IndexEntry<C, R> {
    occurrences: Vec<Occurrence<C, R>>,
}

impl<C, R> Default for IndexEntry<C, R> {
    fn default() -> Self {
        IndexEntry {
            occurrences: Vec::new(),
        }
    }
}

impl<C, R> IndexEntry<C, R> {
    pub fn push(&mut self, occurrence: Occurrence<C, R>) {
        self.occurrences.push(occurrence);
    }

    /// Number of occurrences, used as the match count when scoring.
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence<C, R>> {
        self.occurrences.iter()
    }

    pub fn occurrences(&self) -> &[Occurrence<C, R>] {
        &self.occurrences
    }
}
