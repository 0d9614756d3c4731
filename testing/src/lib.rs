pub mod core;

mod utils;
pub use utils::*;
