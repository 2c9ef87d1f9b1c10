/// Test module for the auth service
///
/// Unit tests for the core credential and token logic that need no database.
/// HTTP-level tests live in `tests/http_validation_tests.rs`.
pub mod fixtures;
