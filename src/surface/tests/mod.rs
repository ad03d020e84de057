//! Test suite for the surface module
