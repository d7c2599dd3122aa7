use super::*;

#[test]
fn released_buffer_is_reused_for_same_size() {
    let pool = BufferPool::new();
    let first = pool.borrow(8, 8);
    let ptr = first.as_ptr();
    drop(first);

    let second = pool.borrow(8, 8);
    assert_eq!(second.as_ptr(), ptr);
    assert_eq!(second.len(), 64);

    let st = pool.stats();
    assert_eq!(st.alloc_buffers, 1);
    assert_eq!(st.alloc_pixels, 64);
    assert_eq!(st.on_loan, 1);
    assert_eq!(st.retained_buffers, 0);
}

#[test]
fn larger_buffer_serves_smaller_request() {
    let pool = BufferPool::new();
    drop(pool.borrow(4, 4));
    let small = pool.borrow(2, 3);
    assert_eq!(small.len(), 6);
    assert_eq!(pool.stats().alloc_buffers, 1);
}

#[test]
fn lookup_is_first_fit() {
    let pool = BufferPool::new();
    let big = pool.borrow(10, 10);
    let medium = pool.borrow(5, 5);
    let (big_ptr, medium_ptr) = (big.as_ptr(), medium.as_ptr());
    drop(big);
    drop(medium);

    let st = pool.stats();
    assert_eq!(st.retained_buffers, 2);
    assert_eq!(st.retained_pixels, 125);

    let loan = pool.borrow(5, 5);
    assert_eq!(loan.as_ptr(), big_ptr);
    let loan2 = pool.borrow(5, 5);
    assert_eq!(loan2.as_ptr(), medium_ptr);
}

#[test]
fn concurrent_loans_allocate_separately_and_all_come_back() {
    let pool = BufferPool::new();
    {
        let _a = pool.borrow(3, 3);
        let _b = pool.borrow(3, 3);
        assert_eq!(pool.stats().on_loan, 2);
    }
    let st = pool.stats();
    assert_eq!(st.alloc_buffers, 2);
    assert_eq!(st.on_loan, 0);
    assert_eq!(st.retained_buffers, 2);
    assert_eq!(st.retained_pixels, 18);
}

#[test]
fn too_small_buffers_are_skipped() {
    let pool = BufferPool::new();
    drop(pool.borrow(2, 2));
    let loan = pool.borrow(4, 4);
    assert_eq!(loan.len(), 16);
    assert!(loan.iter().all(|&p| p == 0));
    assert_eq!(pool.stats().alloc_buffers, 2);
    assert_eq!(pool.stats().retained_buffers, 1);
}

#[test]
fn pooled_canvas_covers_the_loan() {
    let pool = BufferPool::new();
    let mut loan = pool.borrow(3, 2);
    {
        let mut canvas = loan.canvas(3, 2).unwrap();
        assert_eq!(canvas.blend_mode(), crate::color::blend::BlendMode::Overwrite);
        canvas.fill(9);
    }
    assert!(loan.iter().all(|&p| p == 9));
    assert_eq!(loan.view(3, 2).unwrap().pixel(2, 1).unwrap(), 9);
    assert!(loan.canvas(4, 2).is_err());
}

#[test]
fn negative_dimensions_lend_an_empty_buffer() {
    let pool = BufferPool::new();
    let loan = pool.borrow(-3, 5);
    assert!(loan.is_empty());
}
