pub mod manifest;

pub use manifest::{GuideRecord, Manifest};
