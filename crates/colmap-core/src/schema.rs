//! Descriptors consumed and stored by the mapping registries.

pub mod app;

pub mod db;
