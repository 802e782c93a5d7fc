//! # Review Data Transfer Objects Module

pub mod response;

pub use response::{ReviewCountResponse, ReviewResponse};
