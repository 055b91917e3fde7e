//! Unit tests for the board context.
