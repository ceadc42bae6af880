//! HTTP handlers

pub mod display;
pub mod upload;
