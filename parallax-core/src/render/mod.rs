//! Frame rendering stages
//!
//! Each stage takes the frame being assembled by exclusive reference and
//! keeps no reference to it afterwards.

pub mod compositor;
pub mod forest;
pub mod sine;

pub use compositor::{sun_glow, Layer, LayerStack};
pub use forest::{draw_tree, plant_trees};
pub use sine::{SineTable, TABLE_LEN};
