//! Core library modules for taskdesk.
//!
//! - **Model**: task records, statuses, update records and events
//! - **Flow**: the coordinator and the presentation contract it drives
//! - **Terminal**: table rendering and dialoguer menus
//! - **Support**: configuration, data directory, banner files, messages

pub mod banner;
pub mod config;
pub mod coordinator;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod presentation;
pub mod task;
pub mod terminal;
pub mod view;
