//! Use-Case-Funktionen für den Ketten-Editor.
//!
//! Aufgeteilt nach Operation:
//! - `place_base`: Kette mit Basisgelenk anlegen (einmalig)
//! - `add_joint`: Gelenk in aktueller Wachstumsrichtung anhängen
//! - `length`: Endgelenk verlängern bzw. letzte Verlängerung zurücknehmen

mod add_joint;
mod length;
mod place_base;

pub use add_joint::add_joint;
pub use length::{decrease_length, increase_length};
pub use place_base::place_base;
