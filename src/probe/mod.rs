// src/probe/mod.rs
// =============================================================================
// This module talks to the autocomplete endpoint.
//
// Submodules:
// - client: the QueryClient seam plus the reqwest-backed implementation
// - prober: issues one query per prefix and classifies what came back
//
// Everything outside this module sees a probe as a ProbeOutcome: either the
// endpoint answered (items + reported count) or it failed for a known reason.
// =============================================================================

mod client;
mod prober;

pub use client::{AutocompleteResponse, HttpQueryClient, QueryClient};
pub use prober::{ProbeOutcome, ProbeResult, Prober};
