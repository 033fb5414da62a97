//! Data-driven planner content and loaders.
//!
//! This crate reads the files the planner works from:
//! - Rules configuration (TOML): grammar, operator codes, bonus whitelist
//! - Item, nano and perk catalog (RON)
//! - Character profiles (RON): stats, skill investments, equipped items,
//!   perks and running buffs
//!
//! Catalog criteria are stored with raw operator codes and decoded with the
//! loaded rules, so the same catalog file can be read under different
//! operator conventions.

pub mod loaders;

pub use loaders::{
    CatalogLoader, ContentFactory, LoadResult, PlannerContent, Profile, ProfileLoader,
    RulesLoader,
};
