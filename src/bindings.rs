/// Vertex-stage buffer binding slots.
///
/// Both compilation contexts must see identical numeric values here;
/// the numbering is the entire contract.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexBufferIndex {
    ArgumentBuffer = 0,
}

impl VertexBufferIndex {
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// Entries inside the scene argument buffer.
#[cfg(feature = "argument_buffer")]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneArgumentBufferId {
    Rectangles = 0,
}

#[cfg(feature = "argument_buffer")]
impl SceneArgumentBufferId {
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// Per-rectangle argument-buffer entries for the direct scheme, where
/// the fields are addressed individually instead of through
/// [`Rectangle`](crate::Rectangle).
#[cfg(not(feature = "argument_buffer"))]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectangleArgumentBufferId {
    Color = 0,
    Size = 1,
}

#[cfg(not(feature = "argument_buffer"))]
impl RectangleArgumentBufferId {
    pub const fn index(self) -> u32 {
        self as u32
    }
}
