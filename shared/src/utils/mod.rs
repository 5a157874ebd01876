//! Common utility functions

pub mod masking;
