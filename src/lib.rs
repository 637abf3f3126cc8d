#![cfg_attr(target_arch = "spirv", no_std)]

//! Shared data layout for a rectangle-drawing pipeline.
//!
//! Host setup code and the shader stage both compile this crate, so the
//! buffer binding slots and the [`Rectangle`] layout are agreed on
//! byte-for-byte between the two sides. There is nothing else here: no
//! encoding, no resource management, no runtime behavior.
//!
//! The `argument_buffer` feature (on by default) selects how rectangle
//! data is addressed past the vertex buffer binding:
//!
//! - enabled: the scene argument buffer carries the whole rectangle
//!   array under `SceneArgumentBufferId::Rectangles`;
//! - disabled: color and size are separate argument-buffer entries,
//!   addressed through `RectangleArgumentBufferId`.

mod bindings;
mod rectangle;

#[cfg(not(feature = "argument_buffer"))]
pub use bindings::RectangleArgumentBufferId;
#[cfg(feature = "argument_buffer")]
pub use bindings::SceneArgumentBufferId;
pub use bindings::VertexBufferIndex;
pub use rectangle::Rectangle;
