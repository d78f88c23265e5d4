//! Speech-recognition manifests.
//!
//! A manifest lists training clips with their duration and transcript. Two
//! layouts are supported, see `ManifestFormat`.

pub mod format;
pub mod reader;
pub mod record;

pub use format::{DurationBounds, ManifestFormat};
pub use reader::{Manifest, ManifestReader};
pub use record::{ManifestRecord, Transcript};
