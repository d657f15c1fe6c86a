mod scan;

pub use scan::*;
