pub mod filter;
pub mod io;
pub mod shared;
