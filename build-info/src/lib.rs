mod build_info;
mod collect;
pub mod command;
mod environment;
mod error;
pub mod render;
pub mod timestamp;
pub mod toolchain;
pub mod vcs;
mod writer;

pub use build_info::*;
pub use collect::*;
pub use environment::probe_machine;
pub use error::*;
pub use render::render_c_source;
pub use writer::{write_c_source, write_manifest};
