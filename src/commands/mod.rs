//! CLI commands for wayfinder

pub mod dispatch;
pub mod info;
pub mod neighbors;
pub mod path;
pub mod tree;
