//! Error Types
//!
//! This module defines the error types used throughout the viewer core.
//!
//! # Overview
//!
//! - [`AssetError`]: model loading and scene description decoding
//! - [`ConfigError`]: invalid classifier tables or viewer settings
//! - [`ColorParseError`]: a color string that is not `#rrggbb` / `#rgb`
//!
//! [`Error`] wraps all of them, and [`Result<T>`] is an alias for
//! `std::result::Result<T, Error>`.
//!
//! None of these are fatal to a running viewer: a failed load is replaced by
//! the fallback scene and a bad color input is ignored.

use std::path::PathBuf;

use thiserror::Error;

use crate::parts::Category;

/// Errors raised while loading a model into a [`SceneGraph`](crate::scene::SceneGraph).
#[derive(Error, Debug)]
pub enum AssetError {
    /// Reading the model file failed.
    #[error("Failed to read model '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene description is not valid JSON or does not match the schema.
    #[error("Scene description parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node declared a material that cannot be built.
    #[error("Invalid material on node '{label}': {reason}")]
    InvalidMaterial { label: String, reason: String },
}

/// Errors raised while validating classifier or viewer configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `other` is the default bucket and cannot carry keyword rules.
    #[error("Category 'other' cannot have a keyword rule")]
    RuleForDefaultCategory,

    /// The same category appears twice in the rule table.
    #[error("Duplicate rule for category '{0}'")]
    DuplicateCategory(Category),

    /// Two categories claim the same material slot.
    #[error("Material slot {slot} is mapped to both '{first}' and '{second}'")]
    DuplicateSlot {
        slot: usize,
        first: Category,
        second: Category,
    },

    /// A keyword list contains an empty string, which would match every label.
    #[error("Empty keyword in {0}")]
    EmptyKeyword(String),

    /// A category name that is not one of the fixed set.
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Composite detection needs at least one material slot.
    #[error("Composite policy requires min_slots >= 1")]
    ZeroCompositeSlots,

    /// A palette entry could not be parsed.
    #[error("Invalid palette color for '{category}': {source}")]
    PaletteColor {
        category: Category,
        #[source]
        source: ColorParseError,
    },
}

/// A color string that could not be converted to RGB.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{input}': expected #rrggbb or #rgb")]
pub struct ColorParseError {
    pub input: String,
}

/// The main error type for the viewer core.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Settings file I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file JSON error.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
