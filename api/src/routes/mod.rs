//! Route handlers

pub mod auth;
pub mod internal;
pub mod root;
