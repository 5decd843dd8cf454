//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod clustering;
pub mod load_markers;
pub mod options;
pub mod picking;
pub mod spider;
pub mod viewport;
