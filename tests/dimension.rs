use defmac::defmac;
use itertools::{iproduct, Itertools};
use quickcheck::quickcheck;

use ndstride::{
    are_contiguous, index_at_offset, is_contiguous, is_overlap, is_rightmost, offset_range, order, squeeze, Order,
    Shape, Strides,
};

/// A rank 3 shape with extents in 1..=4
fn small_shape(dims: &[u8]) -> Shape<3> {
    let mut shape = Shape::filled(1);
    for (axis, &d) in dims.iter().take(3).enumerate() {
        shape[axis] = (d % 4) as usize + 1;
    }
    shape
}

/// Packed strides for `shape` with the axes nested in the order `perm`,
/// outermost first.
fn packed_in_order(shape: &Shape<3>, perm: [usize; 3]) -> Strides<3> {
    let packed = shape.permute(perm).strides();
    let mut strides = Strides::filled(0);
    for (i, &axis) in perm.iter().enumerate() {
        strides[axis] = packed[i];
    }
    strides
}

fn permutation(seed: u8) -> [usize; 3] {
    let perms = (0..3).permutations(3).collect_vec();
    let p = &perms[seed as usize % perms.len()];
    [p[0], p[1], p[2]]
}

#[test]
fn singleton_axis_moves_outward() {
    let shape = Shape::new([2, 1, 3, 4]);
    let strides = Strides::new([12, 12, 4, 1]);
    assert_eq!(order(&strides, &shape), [1, 0, 2, 3]);
    assert!(are_contiguous(&strides, &shape, Order::C));
    assert_eq!(is_contiguous(&strides, &shape, Order::C), [true; 4]);
    assert!(!is_rightmost(&Strides::new([12, 13, 4, 1])));
}

#[test]
fn empty_is_never_contiguous() {
    defmac!(check_empty shape => {
        let shape = Shape::new(shape);
        assert!(!are_contiguous(&shape.strides(), &shape, Order::C));
        assert!(!are_contiguous(&shape.strides_f(), &shape, Order::F));
        assert!(is_contiguous(&shape.strides(), &shape, Order::C).iter().all(|&c| !c));
        assert_eq!(offset_range(&shape, &shape.strides()), None);
    });
    check_empty!([0]);
    check_empty!([0, 1]);
    check_empty!([2, 0]);
    check_empty!([0, 1, 2]);
    check_empty!([2, 0, 1]);
    check_empty!([1, 2, 0]);
}

#[test]
fn singletons_are_always_contiguous() {
    defmac!(check_ones shape, strides => {
        let shape = Shape::new(shape);
        let strides = Strides::new(strides);
        assert!(are_contiguous(&strides, &shape, Order::C));
        assert!(are_contiguous(&strides, &shape, Order::F));
        assert!(is_contiguous(&strides, &shape, Order::C).iter().all(|&c| c));
    });
    check_ones!([1], [0]);
    check_ones!([1, 1], [7, -3]);
    check_ones!([1, 1, 1, 1], [0, 0, 0, 0]);
}

#[test]
fn order_then_permute_gives_rightmost() {
    let shape = Shape::new([4, 2, 3]);
    for seed in 0..6 {
        let strides = packed_in_order(&shape, permutation(seed));
        let axes = order(&strides, &shape);
        let sorted = strides.permute(axes);
        assert!(is_rightmost(&sorted), "{:?} -> {:?}", strides, sorted);
        assert!(are_contiguous(&sorted, &shape.permute(axes), Order::C));
    }
}

#[test]
fn squeeze_then_permute() {
    let shape = Shape::new([1, 5, 1, 3]);
    let axes = squeeze(&shape);
    assert_eq!(axes, [0, 2, 1, 3]);
    assert_eq!(shape.permute(axes), [1, 1, 5, 3]);
}

quickcheck! {
    fn offset_index_round_trip(dims: Vec<u8>, seed: u8) -> bool {
        let shape = small_shape(&dims);
        let strides = packed_in_order(&shape, permutation(seed));
        iproduct!(0..shape[0], 0..shape[1], 0..shape[2]).all(|(i, j, k)| {
            let offset = strides.offset([i, j, k]);
            index_at_offset(&shape, &strides, offset) == [i, j, k]
        })
    }

    fn rightmost_order_is_identity(strides: Vec<i16>) -> bool {
        let mut values = [0isize; 4];
        for (dst, &s) in values.iter_mut().zip(&strides) {
            *dst = s as isize;
        }
        values.sort_unstable_by(|a, b| b.cmp(a));
        let strides = Strides::new(values);
        order(&strides, &Shape::filled(2)) == [0, 1, 2, 3]
    }

    fn squeeze_is_a_stable_partition(dims: Vec<u8>) -> bool {
        let mut shape = Shape::<4>::filled(1);
        for (axis, &d) in dims.iter().take(4).enumerate() {
            shape[axis] = (d % 3) as usize;
        }
        let axes = squeeze(&shape);
        let split = axes.iter().position(|&a| shape[a] > 1).unwrap_or(4);
        axes[..split].iter().all(|&a| shape[a] <= 1)
            && axes[split..].iter().all(|&a| shape[a] > 1)
            && axes[..split].windows(2).all(|w| w[0] < w[1])
            && axes[split..].windows(2).all(|w| w[0] < w[1])
    }

    fn overlap_matches_naive(a0: i8, a1: i8, b0: i8, b1: i8) -> bool {
        let (a0, a1) = (a0.min(a1) as i32, a0.max(a1) as i32);
        let (b0, b1) = (b0.min(b1) as i32, b0.max(b1) as i32);
        let naive = (a0..=a1).any(|x| (b0..=b1).contains(&x));
        is_overlap(a0, a1, b0, b1) == naive && is_overlap(b0, b1, a0, a1) == naive
    }
}
