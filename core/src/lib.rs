//! Student roster: records, cards and the single render pass behind the
//! roster page. The browser bindings live in `roster-client`.

pub mod config;
pub mod error;
pub mod render;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::*;
pub use error::*;
pub use render::*;
pub use types::*;
pub use view::*;
