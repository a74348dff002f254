//! Domain Layer
//!
//! This is the core of Roster - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Trainee, Course)
//! - `value_objects/` - Immutable value types (EntityId, StartDate)
//! - `services/` - Domain services (id generation, enrollment rules, collation)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
