//! 신GO! report dashboard: a terminal client for reviewing facility reports,
//! school-life reports and inquiries, plus a read-only MCP server over the
//! same data.

pub mod app;
pub mod auth;
pub mod config;
pub mod event;
pub mod mcp;
pub mod model;
pub mod nav;
pub mod store;
pub mod theme;
pub mod views;
