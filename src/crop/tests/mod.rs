//! Test suite for the crop module

#[cfg(test)]
mod region_tests;
