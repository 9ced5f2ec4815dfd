#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use assert_cmd as _;
#[cfg(all(test, unix))]
use nix as _;
#[cfg(test)]
use predicates as _;
#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use tracing_subscriber as _;

pub mod config;
pub mod worker;

pub use config::{DEFAULT_ROOM_PREFIX, ONE_SHOT_ENV, ROOM_PREFIX_ENV, WorkerConfig, load_env_file};
pub use worker::{IDLE_DURATION, WorkerExit, run, run_for, status_line};
