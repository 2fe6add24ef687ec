//! The authoritative connection list and its filtered view.
//!
//! DESIGN
//! ======
//! There is exactly one connection list per session. The vec is private, so
//! the only write paths are wholesale `replace`/`clear`: a trace outcome can
//! never leave a half-updated list, and no second copy of the list exists
//! anywhere else. The filter query lives alongside the list but is only ever
//! read when deriving a view; it is never folded back into the list.

#[cfg(test)]
#[path = "connections_test.rs"]
mod connections_test;

use crate::net::types::Connection;

/// The single authoritative list of traced connections, plus the live
/// filter query typed into the results toolbar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionsState {
    connections: Vec<Connection>,
    /// Free-text filter; matching is trimmed and case-insensitive.
    pub filter_query: String,
}

impl ConnectionsState {
    /// Atomically install `connections` as the current list (may be empty).
    /// Used on trace success and, with an empty vec, on trace failure.
    pub fn replace(&mut self, connections: Vec<Connection>) {
        self.connections = connections;
    }

    /// Drop all connections; equivalent to `replace(vec![])`.
    pub fn clear(&mut self) {
        self.connections.clear();
    }

    /// Point-in-time view of the current list, in backend arrival order.
    #[must_use]
    pub fn snapshot(&self) -> &[Connection] {
        &self.connections
    }

    /// Total connections currently held, filtered or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.connections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Connections that pass the current filter query, in stored order.
    /// Derives a fresh sequence on every call; the list itself is untouched.
    #[must_use]
    pub fn visible(&self) -> Vec<&Connection> {
        let query = self.filter_query.trim().to_lowercase();
        self.connections
            .iter()
            .filter(|c| matches_filter(c, &query))
            .collect()
    }
}

/// Case-insensitive substring match against `from`, `to`, or `description`.
/// `query` must already be trimmed and lowercased; an empty query matches
/// every record.
#[must_use]
pub fn matches_filter(connection: &Connection, query: &str) -> bool {
    connection.from.to_lowercase().contains(query)
        || connection.to.to_lowercase().contains(query)
        || connection.description.to_lowercase().contains(query)
}
