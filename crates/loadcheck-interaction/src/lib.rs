//! Interaction layer for loadcheck.
//!
//! Implements the `SubmissionTransport` seam against real HTTP endpoints.

pub mod formspree_transport;

pub use formspree_transport::FormspreeTransport;
