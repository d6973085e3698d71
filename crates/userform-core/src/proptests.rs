//! Property-based tests for validation and store bookkeeping.
