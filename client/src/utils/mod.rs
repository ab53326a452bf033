mod io;
mod retry;
mod ata;
mod mint;

pub use io::*;
pub use retry::*;
pub use ata::*;
pub use mint::*;
