/// Client account value: name, balance and the validated mutations on it.
pub mod account;

/// Turns raw operation rows into commands that are later executed on an [`account::Account`].
pub mod command;

/// Operation processor interface, plus the single-account statement implementation.
/// Coordinates command parsing and execution.
pub mod processor;

/// Ideally, this module should exist in its own crate, as a way to
/// bootstrap core logic. It is used by the integration tests, so it lives here.
pub mod bin_utils;
