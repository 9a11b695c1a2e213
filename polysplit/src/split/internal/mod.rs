//! Building blocks of the split algorithm, public for testing and benchmarking.
pub mod classify;
pub mod crossings;
pub mod dedup;
pub mod fragments;
pub mod handlers;
pub mod ring_prep;
pub mod ring_split;
