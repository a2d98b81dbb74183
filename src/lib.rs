#![doc = include_str!("../README.md")]

mod color;
mod config;
mod error;
mod export;
mod mesh;
pub mod orientation;
mod ply;
pub mod radius;
mod sampler;
pub mod sanitize;

pub use color::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use mesh::*;
pub use ply::*;
pub use sampler::*;

pub use glam;
