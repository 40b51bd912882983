//! Shared fixtures for declaration index tests.
