//! API module for the HTTP surface
//!
//! This module provides the REST endpoints, router setup, and shared
//! application state.

pub mod http;
pub mod rest;
pub mod state;
