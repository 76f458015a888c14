//! Photomap Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `PhotoRecord`, `Gallery`, `MapMarker`
//! - **Use cases** - `PhotoGalleryManager`, `MarkerBoard`
//! - **Port definitions** - Traits for adapters: `ICamera`, `IStorageAdapter`,
//!   `IPreferenceStore`, `IGeolocation`, `IMapSurface`, `INotificationService`
//! - **Persistence strategies** - Hybrid vs web storage-access branching
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain entities through port interfaces; the
//! platform-dependent storage-access branch is a strategy object chosen once
//! at construction time, never an inline conditional inside an operation.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
