pub use spider_fs::{copy_file, mkdir, MKDIR_MODE};
pub use spider_log::{build, init, InitError, LineFormat, LogConfig, LogTarget};

pub use anyhow;
pub use reqwest;
pub use select;
