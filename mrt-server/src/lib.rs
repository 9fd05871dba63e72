//! Jakarta MRT schedule proxy.
//!
//! Fetches the MRT station feed and answers two questions over HTTP:
//! "which stations are there?" and "what leaves this station next?"

pub mod clock;
pub mod config;
pub mod domain;
pub mod feed;
pub mod schedule;
pub mod service;
pub mod web;
