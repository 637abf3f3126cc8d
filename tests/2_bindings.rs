use rectangle_shaders_shared::*;

#[test]
fn vertex_buffer_slots() {
    assert_eq!(VertexBufferIndex::ArgumentBuffer.index(), 0);
}

#[cfg(feature = "argument_buffer")]
#[test]
fn scene_argument_buffer_ids() {
    assert_eq!(SceneArgumentBufferId::Rectangles.index(), 0);
}

#[cfg(not(feature = "argument_buffer"))]
#[test]
fn rectangle_argument_buffer_ids() {
    assert_eq!(RectangleArgumentBufferId::Color.index(), 0);
    assert_eq!(RectangleArgumentBufferId::Size.index(), 1);
}

#[cfg(not(feature = "argument_buffer"))]
#[test]
fn rectangle_argument_buffer_ids_do_not_alias() {
    assert_ne!(
        RectangleArgumentBufferId::Color.index(),
        RectangleArgumentBufferId::Size.index()
    );
}
