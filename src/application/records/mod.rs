//! Entity lifecycle operations shared by every `Record`

pub mod service;

pub use service::RecordService;
