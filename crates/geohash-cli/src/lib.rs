//! geohash-cli
//! ===========
//!
//! Command-line interface for the `geohash-core` crate.
//!
//! The binary (`geohash`) is the primary deliverable; the argument parser and
//! command runner live in this library target so they can be tested without
//! spawning a process.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geohash-cli
//! geohash encode 57.64911 10.40744 -p 6
//! geohash decode u4pruy
//! geohash decode ezs42 --exact --json
//! geohash claim u33dc0 52.5163 13.3777 --max-km 10
//! ```
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/geohash-rs>
//! - Core crate: <https://docs.rs/geohash-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod commands;
