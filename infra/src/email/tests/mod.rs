//! Unit tests for the email module
