//! Favorite state per snippet, with optimistic toggling.
//!
//! DESIGN
//! ======
//! Each snippet id is an explicit three-state machine: `NotFavorited`,
//! `Favorited`, and `PendingToggle` while a request is in flight. A click
//! flips the displayed state immediately and hands out a [`ToggleTicket`];
//! the network outcome is fed back through [`FavoriteRegistry::settle`].
//!
//! RECONCILIATION
//! ==============
//! The server's answer is authoritative. Each entry remembers the last state
//! the server confirmed, seeded from the page at registration. A confirmed
//! response replaces the optimistic guess; a failed one falls back to the
//! last confirmed state, never to an unconfirmed guess from an earlier click.
//!
//! Clicks are not debounced. Every click gets a per-id sequence number and
//! only the ticket from the latest click settles the display. Earlier tickets
//! still record what the server confirmed, but otherwise arrive as
//! [`Settlement::Stale`]. The exception is a confirmation that lands after
//! the latest ticket already settled: nothing newer is pending, so it is
//! applied.

#[cfg(test)]
#[path = "favorite_test.rs"]
mod favorite_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
    /// A toggle request is in flight; the display shows the optimistic guess.
    PendingToggle,
}

impl FavoriteState {
    fn settled(favorited: bool) -> Self {
        if favorited { Self::Favorited } else { Self::NotFavorited }
    }
}

/// Result of the backend call for one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Server reported the resulting favorite status.
    Confirmed(bool),
    Failed,
}

/// Handle for one optimistic toggle, returned by [`FavoriteRegistry::begin_toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTicket {
    pub snippet_id: String,
    pub seq: u64,
    /// State displayed right after the click.
    pub optimistic: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The entry settled and should now display this state.
    Applied(bool),
    /// A newer click superseded this ticket; nothing to render.
    Stale,
}

#[derive(Clone, Debug)]
struct FavoriteEntry {
    displayed: bool,
    last_seq: u64,
    in_flight: bool,
    /// Last server-known state and the ticket that reported it (0: page load).
    confirmed: bool,
    confirmed_seq: u64,
}

/// All favorite-able snippets discovered on the page.
#[derive(Clone, Debug, Default)]
pub struct FavoriteRegistry {
    entries: HashMap<String, FavoriteEntry>,
}

impl FavoriteRegistry {
    /// Record a snippet's initial state. The first registration wins so that
    /// duplicate buttons for one snippet cannot disagree.
    pub fn register(&mut self, snippet_id: &str, favorited: bool) {
        self.entries.entry(snippet_id.to_owned()).or_insert(FavoriteEntry {
            displayed: favorited,
            last_seq: 0,
            in_flight: false,
            confirmed: favorited,
            confirmed_seq: 0,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self, snippet_id: &str) -> Option<FavoriteState> {
        self.entries.get(snippet_id).map(|entry| {
            if entry.in_flight {
                FavoriteState::PendingToggle
            } else {
                FavoriteState::settled(entry.displayed)
            }
        })
    }

    /// State currently shown on the snippet's buttons.
    pub fn displayed(&self, snippet_id: &str) -> Option<bool> {
        self.entries.get(snippet_id).map(|entry| entry.displayed)
    }

    /// Flip the displayed state and open a new request slot.
    ///
    /// Returns `None` for unknown snippet ids.
    pub fn begin_toggle(&mut self, snippet_id: &str) -> Option<ToggleTicket> {
        let entry = self.entries.get_mut(snippet_id)?;
        entry.displayed = !entry.displayed;
        entry.last_seq += 1;
        entry.in_flight = true;
        Some(ToggleTicket {
            snippet_id: snippet_id.to_owned(),
            seq: entry.last_seq,
            optimistic: entry.displayed,
        })
    }

    /// Feed back the outcome of a ticket's request.
    pub fn settle(&mut self, ticket: &ToggleTicket, outcome: ToggleOutcome) -> Settlement {
        let Some(entry) = self.entries.get_mut(&ticket.snippet_id) else {
            return Settlement::Stale;
        };
        let newer_confirmation = match outcome {
            ToggleOutcome::Confirmed(server_state) if ticket.seq > entry.confirmed_seq => {
                entry.confirmed = server_state;
                entry.confirmed_seq = ticket.seq;
                true
            }
            _ => false,
        };
        let latest = ticket.seq == entry.last_seq;
        if !latest && (entry.in_flight || !newer_confirmation) {
            return Settlement::Stale;
        }
        entry.in_flight = false;
        entry.displayed = entry.confirmed;
        Settlement::Applied(entry.displayed)
    }
}
