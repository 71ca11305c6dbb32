#![forbid(unsafe_code)]

pub mod access;
pub mod format;
pub mod icon;
pub mod model;
