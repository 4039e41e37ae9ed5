//! Unit tests for the real service implementations
