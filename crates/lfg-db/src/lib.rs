//! # lfg-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `lfg-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers (including the hour and weekday storage codecs)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lfg_db::{create_pool, run_migrations, DatabaseConfig, PgAdRepository};
//! use lfg_core::traits::AdRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = std::env::var("DATABASE_URL")?;
//!     let pool = create_pool(&DatabaseConfig { url, ..Default::default() }).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let ad_repo = PgAdRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgAdRepository, PgGameRepository};
