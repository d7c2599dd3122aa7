use super::*;
use crate::color::blend::AlphaComposite;
use crate::color::pixel::{pack, unpack};

#[test]
fn construction_rejects_bad_geometry() {
    let mut buf = vec![0u32; 16];
    assert!(matches!(
        Canvas::new(&mut buf, -1, 4),
        Err(CanvasError::InvalidDimension(_))
    ));
    assert!(matches!(
        Canvas::new(&mut buf, 4, -1),
        Err(CanvasError::InvalidDimension(_))
    ));
    assert!(matches!(
        Canvas::with_stride(&mut buf, 4, 2, 3),
        Err(CanvasError::InvalidDimension(_))
    ));
    assert!(matches!(
        Canvas::new(&mut buf, 5, 4),
        Err(CanvasError::InvalidDimension(_))
    ));
}

#[test]
fn short_last_row_is_enough_with_padding_stride() {
    let mut buf = vec![0u32; 8 + 3];
    let canvas = Canvas::with_stride(&mut buf, 3, 2, 8).unwrap();
    assert_eq!(canvas.stride(), 8);
    assert!(!canvas.is_empty());
}

#[test]
fn empty_iff_width_or_height_is_zero() {
    let mut buf: Vec<u32> = Vec::new();
    assert!(Canvas::new(&mut buf, 0, 5).unwrap().is_empty());
    assert!(Canvas::new(&mut buf, 5, 0).unwrap().is_empty());
    let mut one = vec![0u32; 1];
    assert!(!Canvas::new(&mut one, 1, 1).unwrap().is_empty());
}

#[test]
fn out_of_range_access_fails_with_out_of_bounds() {
    let mut buf = vec![0u32; 6];
    let mut canvas = Canvas::new(&mut buf, 3, 2).unwrap();
    assert!(matches!(
        canvas.pixel(3, 0),
        Err(CanvasError::OutOfBounds { x: 3, y: 0, .. })
    ));
    assert!(canvas.pixel(0, -1).is_err());
    assert!(canvas.blend_pixel(0, 2, 1).is_err());
    assert!(canvas.overwrite_pixel(-1, 0, 1).is_err());
    assert_eq!(buf, vec![0u32; 6]);
}

#[test]
fn overwrite_blend_stores_operand_exactly() {
    let mut buf = vec![0xDEAD_BEEFu32; 4];
    let mut canvas = Canvas::new(&mut buf, 2, 2).unwrap();
    let color = pack(1, 2, 3, 0);
    canvas.blend_pixel(1, 0, color).unwrap();
    assert_eq!(canvas.pixel(1, 0).unwrap(), color);
}

#[test]
fn fill_blends_every_cell_and_leaves_padding() {
    let mut buf = vec![7u32; 4 * 3];
    {
        let mut canvas = Canvas::with_stride(&mut buf, 3, 3, 4).unwrap();
        canvas.fill(pack(10, 20, 30, 255));
    }
    for y in 0..3 {
        for x in 0..4 {
            let expected = if x < 3 { pack(10, 20, 30, 255) } else { 7 };
            assert_eq!(buf[y * 4 + x], expected, "({x}, {y})");
        }
    }
}

#[test]
fn fill_uses_runtime_blend_mode() {
    let mut buf = vec![pack(0, 0, 255, 255); 4];
    let mut canvas = Canvas::new(&mut buf, 2, 2).unwrap();
    canvas
        .set_blend_mode(BlendMode::Add)
        .fill(pack(255, 0, 0, 0));
    assert_eq!(unpack(canvas.pixel(1, 1).unwrap()), (255, 0, 255, 255));
}

#[test]
fn explicit_strategy_ignores_canvas_mode() {
    let mut buf = vec![pack(0, 0, 0, 255); 1];
    let mut canvas = Canvas::new(&mut buf, 1, 1).unwrap();
    canvas
        .blend_pixel_with(0, 0, pack(200, 200, 200, 0), AlphaComposite)
        .unwrap();
    assert_eq!(canvas.pixel(0, 0).unwrap(), pack(0, 0, 0, 255));
}

#[test]
fn sub_canvas_aliases_parent_storage() {
    let mut buf = vec![0u32; 16];
    let mut parent = Canvas::new(&mut buf, 4, 4).unwrap();
    {
        let mut sub = parent.sub_canvas(1, 1, 3, 3).unwrap();
        assert_eq!((sub.width(), sub.height(), sub.stride()), (2, 2, 4));
        sub.blend_pixel(1, 1, 0xFF00_00FF).unwrap();
        assert!(sub.blend_pixel(2, 0, 1).is_err());
    }
    assert_eq!(parent.pixel(2, 2).unwrap(), 0xFF00_00FF);

    parent.overwrite_pixel(1, 1, 42).unwrap();
    let sub = parent.sub_canvas(3, 3, 1, 1).unwrap();
    assert_eq!(sub.pixel(0, 0).unwrap(), 42);
}

#[test]
fn sub_canvas_rejects_corners_outside_parent() {
    let mut buf = vec![0u32; 16];
    let mut parent = Canvas::new(&mut buf, 4, 4).unwrap();
    assert!(matches!(
        parent.sub_canvas(2, 2, 5, 4),
        Err(CanvasError::OutOfBounds { .. })
    ));
    assert!(parent.sub_canvas(-1, 0, 2, 2).is_err());
    assert!(parent.sub_canvas(0, 0, 4, 4).is_ok());
}

#[test]
fn sub_canvas_inherits_blend_mode() {
    let mut buf = vec![0u32; 4];
    let mut parent = Canvas::new(&mut buf, 2, 2).unwrap();
    parent.set_blend_mode(BlendMode::Add);
    let sub = parent.sub_canvas(0, 0, 1, 1).unwrap();
    assert_eq!(sub.blend_mode(), BlendMode::Add);
}

#[test]
fn view_and_sub_view_read_through_stride() {
    let buf: Vec<u32> = (0..12).collect();
    let view = CanvasRef::with_stride(&buf, 3, 3, 4).unwrap();
    assert_eq!(view.pixel(2, 1).unwrap(), 6);
    let sub = view.sub_view(1, 1, 3, 3).unwrap();
    assert_eq!(sub.pixel(0, 0).unwrap(), 5);
    assert_eq!(sub.pixel(1, 1).unwrap(), 10);
    assert!(sub.pixel(2, 0).is_err());
}

#[test]
fn byte_canvas_translates_channel_layout() {
    let mut storage = vec![0u32; 2];
    {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
        let mut canvas = Canvas::from_bytes(bytes, 2, 1, 2, ChannelLayout::BGRA).unwrap();
        canvas.overwrite_pixel(0, 0, pack(1, 2, 3, 4)).unwrap();
        canvas
            .blend_pixel_with(1, 0, pack(10, 0, 0, 0), crate::color::blend::Add)
            .unwrap();
        assert_eq!(canvas.pixel(0, 0).unwrap(), pack(1, 2, 3, 4));
    }
    let bytes: &[u8] = bytemuck::cast_slice(&storage);
    assert_eq!(&bytes[..4], &[3, 2, 1, 4]);
    assert_eq!(&bytes[4..], &[0, 0, 10, 0]);

    let view = CanvasRef::from_bytes(bytes, 2, 1, 2, ChannelLayout::BGRA).unwrap();
    assert_eq!(view.pixel(1, 0).unwrap(), pack(10, 0, 0, 0));
}

#[test]
fn byte_canvas_rejects_partial_pixels() {
    let mut storage = vec![0u32; 2];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
    assert!(matches!(
        Canvas::from_bytes(&mut bytes[..7], 1, 1, 1, ChannelLayout::RGBA),
        Err(CanvasError::InvalidDimension(_))
    ));
}
