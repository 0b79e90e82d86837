//! Infrastructure layer: concrete repositories and HTTP DTOs.

pub mod dto;
pub mod repository;
