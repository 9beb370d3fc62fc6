//! # samaj-core
//!
//! Core types for the Panchal Samaj census client.
//!
//! This crate provides the foundational types shared across all census crates:
//! - Entity structs for chokhlas, villages, families, members, requests,
//!   chanda, and polls
//! - Status enums with review-workflow transitions
//! - The shared form validator (family, member, village, poll, profile)
//! - Dashboard analytics over member lists
//! - Cross-cutting error types

pub mod analytics;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod validation;
