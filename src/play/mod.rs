//! Interactive terminal match loop. This is the manual-input host shell
//! around the core: no camera, the human picks moves from a prompt.

pub use table::Table;

pub mod table;
