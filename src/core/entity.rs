//! Monster identification.
//!
//! Every monster gets a `MonsterId` when it is created. IDs are handed out
//! in creation order by a [`MonsterIdAllocator`] and are never reused, even
//! across encounters, as long as the same allocator is threaded through.
//!
//! ## Usage
//!
//! ```
//! use deck_combat::core::{MonsterId, MonsterIdAllocator};
//!
//! let mut ids = MonsterIdAllocator::new();
//!
//! assert_eq!(ids.allocate(), MonsterId(0));
//! assert_eq!(ids.allocate(), MonsterId(1));
//! assert_eq!(ids.peek(), MonsterId(2));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a monster.
///
/// This is the id a player names when targeting a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Hands out monster ids in creation order.
///
/// Owned by a [`CombatContext`](crate::rules::CombatContext) rather than
/// held in a global, so two independent runs never share a counter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterIdAllocator {
    next: u32,
}

impl MonsterIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    #[must_use]
    pub fn peek(&self) -> MonsterId {
        MonsterId(self.next)
    }
}
