mod io;
mod logger;

pub use io::*;
pub use logger::init_logger;

#[cfg(test)]
pub mod testing;
