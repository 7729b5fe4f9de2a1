mod io;

pub use io::load_cfg;
