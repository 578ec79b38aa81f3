//! Movebank wildlife-tracking trajectories: parse direct-read event exports,
//! drop unusable fixes, project them into a viewport and summarise the trip.

pub mod catalog;
pub mod color;
pub mod config;
pub mod svg;
pub mod track;
