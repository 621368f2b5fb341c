//! Bay Wheels nearest-bike query server.
//!
//! A small service that answers: "where is the nearest place with
//! N available bikes, or N free return docks?", backed by the public
//! Bay Wheels GBFS feeds.

pub mod domain;
pub mod finder;
pub mod gbfs;
pub mod web;
