//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod manipulation;
pub mod selection;
pub mod trajectory;
