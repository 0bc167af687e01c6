use itertools::iproduct;
use quickcheck::quickcheck;

use ndstride::{are_contiguous, reshape, ErrorKind, Order, Shape, Strides, Subregion};

/// Offsets of all elements of a rank 2 layout, in row major index order
fn offsets2(shape: &Shape<2>, strides: &Strides<2>) -> Vec<isize> {
    iproduct!(0..shape[0], 0..shape[1]).map(|(i, j)| strides.offset([i, j])).collect()
}

/// Offsets of all elements of a rank 3 layout, in row major index order
fn offsets3(shape: &Shape<3>, strides: &Strides<3>) -> Vec<isize> {
    iproduct!(0..shape[0], 0..shape[1], 0..shape[2])
        .map(|(i, j, k)| strides.offset([i, j, k]))
        .collect()
}

#[test]
fn reshape_merges_and_splits() {
    let shape = Shape::new([2, 3, 4]);
    let strides = shape.strides();
    assert_eq!(reshape(&shape, &strides, &Shape::new([6, 4])).unwrap(), [4, 1]);
    assert_eq!(reshape(&shape, &strides, &Shape::new([4, 6])).unwrap(), [6, 1]);
    assert_eq!(reshape(&shape, &strides, &Shape::new([2, 2, 3, 2])).unwrap(), [12, 6, 2, 1]);
}

#[test]
fn reshape_across_a_gap_fails() {
    // rows of 12 elements padded to 24
    let shape = Shape::new([2, 3, 4]);
    let strides = Strides::new([24, 4, 1]);
    let err = reshape(&shape, &strides, &Shape::new([4, 6])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleLayout);
    let merged = reshape(&shape, &strides, &Shape::new([2, 12])).unwrap();
    assert_eq!(offsets2(&Shape::new([2, 12]), &merged), offsets3(&shape, &strides));
}

#[test]
fn reshape_of_sliced_view() {
    let view = Subregion::from_shape(Shape::new([4, 6]))
        .subregion(ndstride::s![1..3, ..])
        .unwrap();
    let flat = view.reshape(Shape::new([12])).unwrap();
    assert_eq!(flat.strides, [1]);
    assert_eq!(flat.offset, 6);

    let columns = Subregion::from_shape(Shape::new([4, 6]))
        .subregion(ndstride::s![.., ..3])
        .unwrap();
    assert!(columns.reshape(Shape::new([12])).is_err());
    assert_eq!(columns.reshape(Shape::new([2, 2, 3])).unwrap().strides, [12, 6, 1]);
}

quickcheck! {
    fn contiguous_reshape_keeps_memory_order(dims: Vec<u8>, split: u8) -> bool {
        let mut shape = Shape::<3>::filled(1);
        for (axis, &d) in dims.iter().take(3).enumerate() {
            shape[axis] = (d % 5) as usize + 1;
        }
        let strides = shape.strides();
        assert!(are_contiguous(&strides, &shape, Order::C));

        let n = shape.numel();
        let divisors: Vec<usize> = (1..=n).filter(|d| n % d == 0).collect();
        let d = divisors[split as usize % divisors.len()];
        let new_shape = Shape::new([d, n / d]);
        match reshape(&shape, &strides, &new_shape) {
            Ok(new_strides) => offsets2(&new_shape, &new_strides) == offsets3(&shape, &strides),
            Err(_) => false,
        }
    }

    fn same_shape_keeps_strides(dims: Vec<u8>) -> bool {
        let mut shape = Shape::<3>::filled(1);
        for (axis, &d) in dims.iter().take(3).enumerate() {
            shape[axis] = (d % 5) as usize + 1;
        }
        // column major: every axis is its own chunk
        let strides = shape.strides_f();
        match reshape(&shape, &strides, &shape) {
            Ok(same) => (0..3).all(|axis| shape[axis] == 1 || same[axis] == strides[axis]),
            Err(_) => false,
        }
    }
}
