//! HTTP handlers for the ZYNIQ API.

pub mod blueprint;
pub mod contact;
pub mod status;
