//! Test suite for the encoding module

#[cfg(test)]
mod format_tests;
