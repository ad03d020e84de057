//! Test suite for the provider module

#[cfg(test)]
mod registry_tests;
