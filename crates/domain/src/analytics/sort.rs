// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::Jid;

/// Field of a [`Jid`] usable as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Domain,
    Username,
}

impl SortKey {
    #[inline]
    pub fn compare(self, a: &Jid, b: &Jid) -> Ordering {
        match self {
            Self::Domain => a.domain().cmp(b.domain()),
            Self::Username => a.username().cmp(b.username()),
        }
    }
}

/// Ordered list of keys, compared left to right.
/// The only public ordering is [`SortStrategy::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStrategy {
    keys: Vec<SortKey>,
}

impl SortStrategy {
    fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Sort in place. Ties keep no particular order.
    pub fn apply(&self, jids: &mut [Jid]) {
        if jids.len() < 2 {
            return;
        }
        jids.sort_unstable_by(|a, b| self.compare(a, b));
    }

    /// Return a sorted copy of `jids`.
    pub fn sorted(&self, mut jids: Vec<Jid>) -> Vec<Jid> {
        self.apply(&mut jids);
        jids
    }

    fn compare(&self, a: &Jid, b: &Jid) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for SortStrategy {
    /// Domain first, then username.
    fn default() -> Self {
        Self::new(vec![SortKey::Domain, SortKey::Username])
    }
}
