//! Use cases orchestrating domain entities through port interfaces
//!
//! - [`PhotoGalleryManager`] - capture → persist → index → reload workflow
//! - [`MarkerBoard`] - map markers and current-position tracking
//! - [`persistence`] - hybrid/web storage-access strategies

pub mod gallery;
pub mod marker_board;
pub mod persistence;

pub use gallery::PhotoGalleryManager;
pub use marker_board::{MarkerBoard, DEFAULT_ZOOM};
pub use persistence::{strategy_for, IPersistenceStrategy};
