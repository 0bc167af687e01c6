use itertools::iproduct;
use quickcheck::quickcheck;

use ndstride::{broadcast, co_broadcast, ErrorKind, Shape, Strides, Subregion};

fn shape_from(dims: &[u8], modulo: u8, plus: usize) -> Shape<3> {
    let mut shape = Shape::filled(1);
    for (axis, &d) in dims.iter().take(3).enumerate() {
        shape[axis] = (d % modulo) as usize + plus;
    }
    shape
}

#[test]
fn broadcast_row_against_matrix() {
    let row = Subregion::from_shape(Shape::new([1, 4]));
    let wide = row.broadcast_to(Shape::new([3, 4])).unwrap();
    assert_eq!(wide.strides, [0, 1]);
    assert!(wide.strides.has_broadcast_axis());
    for (i, j) in iproduct!(0..3, 0..4) {
        assert_eq!(wide.offset_of([i, j]), j as isize);
    }
}

#[test]
fn broadcast_column_keeps_offset() {
    let column = Subregion::from_shape(Shape::new([5, 6]))
        .subregion(ndstride::s![.., 2])
        .unwrap();
    assert_eq!(column.shape, [5, 1]);
    let wide = column.broadcast_to(Shape::new([5, 3])).unwrap();
    assert_eq!(wide.strides, [6, 0]);
    assert_eq!(wide.offset, 2);
    assert_eq!(wide.offset_of([4, 2]), 26);
}

#[test]
fn incompatible_extents() {
    let mut strides = Strides::new([4, 1]);
    let err = broadcast(&Shape::new([3, 4]), &mut strides, &Shape::new([3, 5])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    assert_eq!(err.axis().map(|a| a.index()), Some(1));

    let err = co_broadcast(&Shape::new([2, 1, 3]), &Shape::new([3, 1, 3])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    assert_eq!(err.axis().map(|a| a.index()), Some(0));
}

#[test]
fn lower_rank_operand() {
    // pad a rank 1 shape with outer singletons
    let aligned: Shape<3> = Shape::new([4]).resize(1);
    assert_eq!(aligned, [1, 1, 4]);
    let common = co_broadcast(&aligned, &Shape::new([2, 3, 1])).unwrap();
    assert_eq!(common, [2, 3, 4]);

    let mut strides = aligned.strides();
    broadcast(&aligned, &mut strides, &common).unwrap();
    assert_eq!(strides, [0, 0, 1]);
}

quickcheck! {
    fn co_broadcast_is_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
        let sa = shape_from(&a, 3, 0);
        let sb = shape_from(&b, 3, 0);
        match (co_broadcast(&sa, &sb), co_broadcast(&sb, &sa)) {
            (Ok(ab), Ok(ba)) => ab == ba,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }

    fn operands_broadcast_to_common_shape(a: Vec<u8>, b: Vec<u8>) -> bool {
        let sa = shape_from(&a, 3, 1);
        let sb = shape_from(&b, 3, 1);
        let common = match co_broadcast(&sa, &sb) {
            Ok(common) => common,
            Err(_) => return true,
        };
        let (mut ta, mut tb) = (sa.strides(), sb.strides());
        let (packed_a, packed_b) = (ta, tb);
        broadcast(&sa, &mut ta, &common).is_ok()
            && broadcast(&sb, &mut tb, &common).is_ok()
            && (0..3).all(|axis| {
                let kept_a = if sa[axis] == common[axis] { packed_a[axis] } else { 0 };
                let kept_b = if sb[axis] == common[axis] { packed_b[axis] } else { 0 };
                ta[axis] == kept_a && tb[axis] == kept_b
            })
    }
}
