use super::*;
use crate::color::blend::Add;

const A: u32 = 0xFF00_00AA;
const B: u32 = 0xFF00_00BB;
const C: u32 = 0xFF00_00CC;
const D: u32 = 0xFF00_00DD;

#[test]
fn upscale_repeats_each_source_pixel() {
    let src_buf = vec![A, B, C, D];
    let src = CanvasRef::new(&src_buf, 2, 2).unwrap();
    let mut buf = vec![0u32; 16];
    copy_rect(&src, &mut Canvas::new(&mut buf, 4, 4).unwrap(), (0, 0), (4, 4));
    assert_eq!(
        buf,
        vec![A, A, B, B, A, A, B, B, C, C, D, D, C, C, D, D]
    );
}

#[test]
fn reversed_corners_mirror_each_axis() {
    let src_buf = vec![A, B, C, D];
    let src = CanvasRef::new(&src_buf, 2, 2).unwrap();

    let mut buf = vec![0u32; 4];
    copy_rect(&src, &mut Canvas::new(&mut buf, 2, 2).unwrap(), (2, 0), (0, 2));
    assert_eq!(buf, vec![B, A, D, C]);

    let mut buf = vec![0u32; 4];
    copy_rect(&src, &mut Canvas::new(&mut buf, 2, 2).unwrap(), (0, 2), (2, 0));
    assert_eq!(buf, vec![C, D, A, B]);
}

#[test]
fn downscale_samples_lower_source_index() {
    let src_buf: Vec<u32> = (0..16).collect();
    let src = CanvasRef::new(&src_buf, 4, 4).unwrap();
    let mut buf = vec![99u32; 4];
    copy_rect(&src, &mut Canvas::new(&mut buf, 2, 2).unwrap(), (0, 0), (2, 2));
    assert_eq!(buf, vec![0, 2, 8, 10]);
}

#[test]
fn destination_rectangle_is_clipped() {
    let src_buf = vec![A, B, C, D];
    let src = CanvasRef::new(&src_buf, 2, 2).unwrap();
    let mut buf = vec![0u32; 4];
    copy_rect(&src, &mut Canvas::new(&mut buf, 2, 2).unwrap(), (-1, -1), (1, 1));
    assert_eq!(buf, vec![D, 0, 0, 0]);
}

#[test]
fn empty_source_is_noop() {
    let src_buf: Vec<u32> = Vec::new();
    let src = CanvasRef::new(&src_buf, 0, 3).unwrap();
    let mut buf = vec![5u32; 4];
    copy_rect(&src, &mut Canvas::new(&mut buf, 2, 2).unwrap(), (0, 0), (2, 2));
    assert_eq!(buf, vec![5u32; 4]);
}

#[test]
fn explicit_strategy_blends_into_destination() {
    let src_buf = vec![0x0000_0001u32];
    let src = CanvasRef::new(&src_buf, 1, 1).unwrap();
    let mut buf = vec![0x0000_0002u32; 2];
    copy_rect_with(
        &src,
        &mut Canvas::new(&mut buf, 2, 1).unwrap(),
        (0, 0),
        (2, 1),
        Add,
    );
    assert_eq!(buf, vec![3, 3]);
}

#[test]
fn extreme_corners_clip_without_overflow() {
    let src_buf = vec![A, B, C, D];
    let src = CanvasRef::new(&src_buf, 2, 2).unwrap();

    let mut buf = vec![0u32; 16];
    copy_rect(
        &src,
        &mut Canvas::new(&mut buf, 4, 4).unwrap(),
        (i32::MIN, 0),
        (i32::MAX, 4),
    );
    assert_eq!(buf, vec![B, B, B, B, B, B, B, B, D, D, D, D, D, D, D, D]);

    let mut buf = vec![0u32; 16];
    copy_rect(
        &src,
        &mut Canvas::new(&mut buf, 4, 4).unwrap(),
        (i32::MAX, 4),
        (i32::MIN, 0),
    );
    assert_eq!(buf, vec![C, C, C, C, C, C, C, C, A, A, A, A, A, A, A, A]);
}
