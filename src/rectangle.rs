use bytemuck::{Pod, Zeroable};

/// Draw parameters for one colored rectangle.
///
/// Written by the host into GPU-visible memory, read-only from the
/// shader's side. Six packed 32-bit floats, 24 bytes, no padding; the
/// `Pod` derive fails to compile if padding ever sneaks in.
///
/// Values are caller-supplied and unconstrained. Out-of-range color
/// components are the shader's concern, not this type's.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Rectangle {
    /// RGBA color.
    pub color: [f32; 4],
    /// Width and height.
    pub size: [f32; 2],
}

impl Rectangle {
    pub const fn new(color: [f32; 4], size: [f32; 2]) -> Self {
        Self { color, size }
    }
}
