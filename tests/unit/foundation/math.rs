use super::*;

#[test]
fn f32_to_u8_saturates() {
    assert_eq!(f32_to_u8(-4.0), 0);
    assert_eq!(f32_to_u8(254.6), 255);
    assert_eq!(f32_to_u8(1000.0), 255);
}

#[test]
fn sort_top_left_orders_each_axis_independently() {
    assert_eq!(sort_top_left(3, 1, 1, 3), (1, 1, 3, 3));
    assert_eq!(sort_top_left(1, 3, 3, 1), (1, 1, 3, 3));
}

#[test]
fn round_to_i32_rounds_halves_away_from_zero() {
    assert_eq!(round_to_i32(0.5), 1);
    assert_eq!(round_to_i32(-0.5), -1);
    assert_eq!(round_to_i32(2.49), 2);
}
