pub mod logger;
pub mod signature;
pub mod version;
