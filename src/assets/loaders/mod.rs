pub mod json;

pub use json::JsonSceneLoader;
