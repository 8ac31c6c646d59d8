//! Tests for the template engine
//!
//! Organized by concern: scanner behavior, rendering, escapes, errors and
//! lenient policies.

use super::*;

// Test helper functions
mod helpers;

// Scanner tests
mod scanner;
