//! CPU execution tests.
