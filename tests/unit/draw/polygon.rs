use super::*;
use crate::color::blend::Overwrite;

#[test]
fn square_outline_wraps_back_to_first_vertex() {
    let mut buf = vec![0u32; 16];
    let mut canvas = Canvas::new(&mut buf, 4, 4).unwrap();
    polygon(&mut canvas, &[(0, 0), (3, 0), (3, 3), (0, 3)], 9).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let edge = x == 0 || y == 0 || x == 3 || y == 3;
            assert_eq!(buf[y * 4 + x] == 9, edge, "({x}, {y})");
        }
    }
}

#[test]
fn empty_vertex_list_is_noop() {
    let mut buf = vec![0u32; 4];
    let mut canvas = Canvas::new(&mut buf, 2, 2).unwrap();
    polygon_with(&mut canvas, &[], 9, Overwrite).unwrap();
    assert_eq!(buf, vec![0u32; 4]);
}

#[test]
fn single_vertex_plots_one_pixel() {
    let mut buf = vec![0u32; 4];
    let mut canvas = Canvas::new(&mut buf, 2, 2).unwrap();
    polygon(&mut canvas, &[(1, 0)], 9).unwrap();
    assert_eq!(buf, vec![0, 9, 0, 0]);
}

#[test]
fn vertex_outside_canvas_propagates_error() {
    let mut buf = vec![0u32; 4];
    let mut canvas = Canvas::new(&mut buf, 2, 2).unwrap();
    assert!(polygon(&mut canvas, &[(0, 0), (1, 0), (1, 5)], 9).is_err());
}
