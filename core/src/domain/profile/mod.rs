pub mod entities;
pub mod ports;

pub use entities::{Profile, UserRole};
pub use ports::ProfileRepository;
