pub mod api;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod samples;
pub mod scorer;
pub mod text;
// cmd and reports are modules of the binary crate (main.rs).
