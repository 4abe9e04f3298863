//! Space-group types: Hall-symbol parsing, the 530 tabulated settings, the
//! reference table of the 230 types, conventional settings, identification
//! and Wyckoff positions.

pub mod conventional;
pub mod database;
pub mod hall;
pub mod identify;
pub mod settings;
pub mod wyckoff;
mod wyckoff_db;

pub use conventional::*;
pub use database::*;
pub use hall::*;
pub use identify::*;
pub use settings::*;
pub use wyckoff::*;
