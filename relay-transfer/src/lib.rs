//! Fragment distribution and reassembly.
//!
//! Two independent routines: a binary-search allocator that spreads
//! data fragments across data centers while minimizing the worst-case
//! risk, and a reassembler that restores sequenced fragments with
//! checksum verification.

pub mod allocation;
pub mod reassembly;

pub use allocation::distribute_fragments;
pub use reassembly::{
    checksum, reconstruct, Fragment, Reconstruction, SequencedFragment, CHECKSUM_LENGTH,
    MISSING_DATA_PLACEHOLDER,
};
