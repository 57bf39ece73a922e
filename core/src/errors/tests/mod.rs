//! Tests for verification code errors

mod error_tests;
