//! Core of the frosted-glass installation: gesture signals, the persistent
//! fog raster, fingertip wiping, snow, and per-frame compositing.
//!
//! Nothing here touches a browser API; the web front-end supplies a
//! [`RenderTarget`] and a frame scheduler.

pub mod compositor;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod fog;
pub mod frame_loop;
pub mod gesture;
pub mod landmarks;
pub mod observation;
pub mod particles;
pub mod status;
pub mod wipe;

pub use compositor::*;
pub use config::*;
pub use controls::Controls;
pub use error::{FrostError, Result};
pub use fog::{mirror_to_pixels, FogSurface};
pub use frame_loop::{FrameClock, FrameLoop, LoopState};
pub use gesture::*;
pub use landmarks::*;
pub use observation::ObservationSlot;
pub use particles::{Particle, ParticleSystem};
pub use status::Status;
pub use wipe::{EraseTargets, WipeController};
