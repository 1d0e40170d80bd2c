pub mod paths;

pub use paths::SitePaths;
