//! Core-Domänentypen: Gelenke, Kette, Kinematik, Kamera, Spatial-Index.

pub mod camera;
/// Core-Datenmodelle der Gelenkkette
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - ChainModel: geordnete, nur wachsende Folge von Gelenken
/// - Joint: einzelnes Gelenk mit Pose, Startwerten und Buchhaltung
pub mod chain;
pub mod joint;
pub mod kinematics;
pub mod spatial;

pub use camera::Camera3D;
pub use chain::ChainModel;
pub use joint::Joint;
pub use spatial::{JointMatch, SpatialIndex};
