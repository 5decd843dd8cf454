//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod map_scene;
pub mod options;

pub use map_scene::{MapScene, SceneItem};
pub use options::ViewerOptions;
