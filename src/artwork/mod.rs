//! Trait artwork subsystem.
//!
//! # Data Flow
//! ```text
//! trait source file (JSON array)
//!     → types.rs (ordered TraitSet)
//!     → decoder.rs (hex → zlib inflate → SVG)
//!     → preview.rs (per-trait decode, failures isolated)
//! ```

pub mod decoder;
pub mod preview;
pub mod types;

pub use decoder::{SvgDecoder, ZlibSvgDecoder};
pub use preview::{build_previews, PreviewMap};
pub use types::{TraitEntry, TraitSet};
