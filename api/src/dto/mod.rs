//! Data transfer objects for endpoints without a domain counterpart

pub mod health;
