//! Static per-crop reference data (cost, yield, market price, description).
//!
//! The catalog is built once at startup and immutable thereafter; it is the
//! only persisted configuration in the system.

pub mod catalog;
pub mod reference;

pub use catalog::CropCatalog;
pub use reference::CropReference;
