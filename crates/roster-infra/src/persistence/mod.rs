//! Persistence implementations
//!
//! This module provides the in-memory implementation of the repository
//! trait. A durable backend can be substituted without touching the service.

mod memory_person_repo;

pub use memory_person_repo::MemoryPersonRepository;
