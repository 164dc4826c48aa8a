//! Space Blaster: a single-screen shooter drawn with hand-rolled line and
//! circle rasterization.
//!
//! - `raster`: line / circle pixel generators and the `PixelSink` seam
//! - `shapes`: sprite recipes built from raster primitives
//! - `entities`: pure game data
//! - `compute`: session setup, input handlers and the simulation step
//! - `collision`: per-tick interaction resolution
//! - `scene`: per-frame composition handed to a front-end

pub mod collision;
pub mod compute;
pub mod entities;
pub mod raster;
pub mod scene;
pub mod shapes;
