//! Tests for the verification code lifecycle

#[cfg(test)]
mod registry_tests;
