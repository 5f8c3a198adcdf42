//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let prayer = factory::prayer::create_prayer(&db, "user_1").await?;
//!
//!     // Create an impression attached to it
//!     let impression = factory::impression::create_impression(&db, prayer.id, "user_2").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::prayer::PrayerType;
//! use test_utils::factory::prayer::PrayerFactory;
//!
//! let prayer = PrayerFactory::new(&db, "user_1")
//!     .title("Custom title")
//!     .prayer_type(PrayerType::Hidden)
//!     .is_open(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `prayer` - Create prayer entities
//! - `participant` - Create prayer participant entities
//! - `impression` - Create impression entities

pub mod helpers;
pub mod impression;
pub mod participant;
pub mod prayer;
