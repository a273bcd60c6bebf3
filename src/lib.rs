//! Management Compass - Manager Self-Assessment Core
//!
//! This crate implements the scoring behind the Management Compass
//! questionnaire: card-game and team-health scoring, coaching insights,
//! full/light module selection and the completion summary, plus
//! persistence of in-progress answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
