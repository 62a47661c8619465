//! Incremental connectivity: union-find plus the edge-sentinel win tracker.
//!
//! Recomputing reachability with a board search after every move is correct
//! but degrades as the board fills. Instead, each placement merges the new
//! stone's set with its same-owner neighbors, and each board edge a player
//! must reach is a virtual sentinel node in the same structure. "Has this
//! player won?" reduces to "do their two sentinels share a set?".

pub mod disjoint_set;
pub mod tracker;

pub use disjoint_set::DisjointSet;
pub use tracker::ConnectivityTracker;
