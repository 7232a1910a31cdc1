//! 页面视图

pub mod accounts;
pub mod debug;
pub mod models;
pub mod settings;
