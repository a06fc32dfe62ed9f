//! Shape catalog tests.

use blockfall::core::{catalog, rotate_clockwise, Shape};

#[test]
fn test_catalog_is_pairwise_distinct() {
    let shapes = catalog();
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for shape in catalog() {
        let mut s = *shape;
        for _ in 0..4 {
            s = rotate_clockwise(&s);
        }
        assert_eq!(s, *shape);
    }
}

#[test]
fn test_clockwise_rotation_of_l() {
    let l = Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]);
    let r = rotate_clockwise(&l);
    assert_eq!(r.width(), 2);
    assert_eq!(r.height(), 3);
    assert_eq!(r.to_rows(), vec![vec![1, 0], vec![1, 0], vec![1, 1]]);
}
