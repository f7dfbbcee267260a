use super::model::{DiscoveryCard, Vibe};

/// How many cards the presentation layer stacks at once.
pub const VISIBLE_WINDOW: usize = 3;

/// Lifecycle state of a discovery feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// A batch fetch is in flight.
    Loading,
    /// Unconsumed cards remain under the cursor.
    Ready,
    /// The batch ran out; a refill fetch has not been started yet.
    Exhausted,
    /// The last fetch resolved with zero cards.
    Empty,
}

/// Token stamped on every fetch. A resolution is applied only while its
/// token still matches the session's current one, so a fetch superseded
/// by a newer `begin_fetch` is disregarded on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Outcome of resolving a fetch against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The fetch was superseded; nothing was mutated.
    Stale,
}

/// Outcome of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The session was not in a swipeable state; nothing changed.
    Ignored,
    Advanced,
    /// The last card was consumed; the caller must start a refill fetch
    /// for the unchanged vibe.
    Exhausted,
}

/// Read-only view of a feed session for presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub state: FeedState,
    pub vibe: Vibe,
    pub cursor: usize,
    pub batch_len: usize,
    /// Cards from the cursor up to [`VISIBLE_WINDOW`] deep, for the
    /// stacked-card visual.
    pub visible: Vec<DiscoveryCard>,
    pub wishlist: Vec<DiscoveryCard>,
}

/// Sequential consumption of fetched discovery batches.
///
/// Pure and synchronous: fetches are split into `begin_fetch` (stamps a
/// token, enters `Loading`) and `resolve_fetch` (applies the batch unless
/// the token went stale), so the machine is testable without a runtime.
/// The wishlist accumulates accepted cards across batch resets and is
/// only dropped with the session itself.
///
/// Invariant: `cursor <= batch.len()` after every transition.
#[derive(Debug)]
pub struct FeedSession {
    vibe: Vibe,
    batch: Vec<DiscoveryCard>,
    cursor: usize,
    wishlist: Vec<DiscoveryCard>,
    state: FeedState,
    generation: u64,
}

impl FeedSession {
    /// A session starts life waiting for its first batch.
    pub fn new(vibe: Vibe) -> Self {
        Self {
            vibe,
            batch: Vec::new(),
            cursor: 0,
            wishlist: Vec::new(),
            state: FeedState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn vibe(&self) -> Vibe {
        self.vibe
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn batch_len(&self) -> usize {
        self.batch.len()
    }

    pub fn wishlist(&self) -> &[DiscoveryCard] {
        &self.wishlist
    }

    /// Starts a fetch for the given vibe, superseding any in-flight one.
    /// The current batch is discarded; the wishlist is untouched.
    pub fn begin_fetch(&mut self, vibe: Vibe) -> FetchToken {
        self.vibe = vibe;
        self.batch.clear();
        self.cursor = 0;
        self.state = FeedState::Loading;
        self.generation += 1;
        FetchToken(self.generation)
    }

    /// Applies a resolved fetch, unless a newer `begin_fetch` has stamped
    /// a fresher token in the meantime.
    pub fn resolve_fetch(&mut self, token: FetchToken, cards: Vec<DiscoveryCard>) -> Resolution {
        if token.0 != self.generation {
            return Resolution::Stale;
        }

        self.cursor = 0;
        self.state = if cards.is_empty() {
            FeedState::Empty
        } else {
            FeedState::Ready
        };
        self.batch = cards;
        Resolution::Applied
    }

    /// Swipe right: adds the card under the cursor to the wishlist and
    /// advances.
    pub fn accept(&mut self) -> SwipeOutcome {
        let Some(card) = self.swipeable_card() else {
            return SwipeOutcome::Ignored;
        };
        self.wishlist.push(card);
        self.advance()
    }

    /// Swipe left: advances past the card under the cursor without
    /// touching the wishlist.
    pub fn reject(&mut self) -> SwipeOutcome {
        if self.swipeable_card().is_none() {
            return SwipeOutcome::Ignored;
        }
        self.advance()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            state: self.state,
            vibe: self.vibe,
            cursor: self.cursor,
            batch_len: self.batch.len(),
            visible: self.visible_window().to_vec(),
            wishlist: self.wishlist.clone(),
        }
    }

    fn visible_window(&self) -> &[DiscoveryCard] {
        let start = self.cursor.min(self.batch.len());
        let end = (start + VISIBLE_WINDOW).min(self.batch.len());
        &self.batch[start..end]
    }

    fn swipeable_card(&self) -> Option<DiscoveryCard> {
        if self.state != FeedState::Ready {
            return None;
        }
        self.batch.get(self.cursor).cloned()
    }

    fn advance(&mut self) -> SwipeOutcome {
        self.cursor += 1;
        if self.cursor == self.batch.len() {
            self.state = FeedState::Exhausted;
            SwipeOutcome::Exhausted
        } else {
            SwipeOutcome::Advanced
        }
    }
}
