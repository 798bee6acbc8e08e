pub mod data;
pub mod entities;
pub mod records;
pub mod table;
pub mod term;

pub use data::*;
pub use entities::*;
pub use records::*;
pub use table::*;
pub use term::*;
