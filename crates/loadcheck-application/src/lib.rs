//! Application layer for loadcheck.
//!
//! Hosts the `SubmissionController`, which drives a `FormStore` through the
//! submit lifecycle against a `SubmissionTransport`.

pub mod submission_controller;

pub use submission_controller::SubmissionController;
