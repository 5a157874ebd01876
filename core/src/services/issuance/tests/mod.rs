//! Tests for the issuance service
