use super::{Shape, Strides};
use crate::error::ShapeError;
use crate::{Ix, Ixs};

/// Try to reshape an array with shape `old_shape` and strides `old_strides`
/// to `new_shape`, keeping the elements where they are in memory. Return the
/// strides for the new shape if this is possible.
///
/// The old axes are grouped, innermost first, into chunks of axes that are
/// packed among themselves: an axis continues the chunk of the axis inside
/// it if its stride is that axis' stride times its length. Axes of length
/// one never break a chunk. The new axes are then handed out from the inner
/// end, each chunk taking new axes until their element count equals its own;
/// a new axis that straddles a chunk boundary makes the reshape impossible
/// without a copy.
///
/// Within a chunk the element order is the row major (rightmost) order of
/// the logical indices, so any layout that is packed in row major order can
/// be reshaped to any shape of the same size.
///
/// This function returns:
///
/// - `ShapeMismatch` if the two shapes do not hold the same number of
///   elements.
/// - `IncompatibleLayout` if `old_shape` has an axis of length zero, or if
///   the layout can not be remapped to the new shape without moving the
///   data; the caller has to make a packed copy instead.
///
/// ```
/// use ndstride::{reshape, Shape, Strides};
///
/// let shape = Shape::new([2, 3, 4]);
/// assert_eq!(reshape(&shape, &shape.strides(), &Shape::new([6, 4])).unwrap(), [4, 1]);
///
/// // a padded row pitch splits the layout into two chunks
/// let padded = Strides::new([24, 4, 1]);
/// assert_eq!(reshape(&shape, &padded, &Shape::new([2, 12])).unwrap(), [24, 1]);
/// assert!(reshape(&shape, &padded, &Shape::new([4, 6])).is_err());
/// ```
pub fn reshape<const N: usize, const M: usize>(
    old_shape: &Shape<N>, old_strides: &Strides<N>, new_shape: &Shape<M>,
) -> Result<Strides<M>, ShapeError> {
    let old_numel = old_shape.numel();
    let new_numel = new_shape.numel();
    if old_numel != new_numel {
        return Err(rejected!(ShapeError::element_count(old_numel, new_numel)));
    }
    if old_shape.is_empty() {
        return Err(rejected!(ShapeError::empty_reshape()));
    }

    let mut new_strides = Strides::<M>::filled(1);
    // old axes 0..oi and new axes 0..ni are not handled yet
    let mut oi = N;
    let mut ni = M;
    // stride an axis just outside the last chunk would need
    let mut outer: Ixs = 1;

    while oi > 0 {
        if old_shape[oi - 1] == 1 {
            oi -= 1;
            continue;
        }

        // grow a chunk outward from its innermost axis
        let base = old_strides[oi - 1];
        let mut chunk: Ix = old_shape[oi - 1];
        let mut next = base * old_shape[oi - 1] as Ixs;
        oi -= 1;
        while oi > 0 {
            let len = old_shape[oi - 1];
            if len != 1 {
                if old_strides[oi - 1] != next {
                    break;
                }
                chunk *= len;
                next = old_strides[oi - 1] * len as Ixs;
            }
            oi -= 1;
        }

        // hand out new axes until they cover the chunk
        let mut covered: Ix = 1;
        while covered < chunk {
            if ni == 0 {
                return Err(rejected!(ShapeError::layout(0)));
            }
            ni -= 1;
            new_strides[ni] = covered as Ixs * base;
            covered *= new_shape[ni];
        }
        if covered != chunk {
            return Err(rejected!(ShapeError::layout(ni)));
        }
        outer = next;
    }

    // what is left can only be axes of length one
    while ni > 0 {
        ni -= 1;
        debug_assert_eq!(new_shape[ni], 1);
        new_strides[ni] = outer;
    }

    Ok(new_strides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    macro_rules! test_reshape {
        (fail from $from:expr, $stride:expr, to $to:expr) => {
            let res = reshape(&Shape::new($from), &Strides::new($stride), &Shape::new($to));
            println!("Reshape {:?} {:?} to {:?}\n  => {:?}", $from, $stride, $to, res);
            let _res = res.expect_err("Expected failed reshape");
        };
        (ok from $from:expr, $stride:expr, to $to:expr, $to_stride:expr) => {{
            let res = reshape(&Shape::new($from), &Strides::new($stride), &Shape::new($to));
            println!("Reshape {:?} {:?} to {:?}\n  => {:?}", $from, $stride, $to, res);
            let res = res.expect("Expected successful reshape");
            assert_eq!(res, Strides::new($to_stride), "mismatch in strides");
        }};
    }

    #[test]
    fn test_reshape() {
        test_reshape!(ok from [2, 3, 4], [12, 4, 1], to [6, 4], [4, 1]);
        test_reshape!(ok from [2, 3, 4], [12, 4, 1], to [4, 6], [6, 1]);
        test_reshape!(ok from [2, 3, 4], [12, 4, 1], to [24], [1]);
        test_reshape!(ok from [1, 2, 3], [6, 3, 1], to [2, 3], [3, 1]);
        test_reshape!(ok from [6], [1], to [3, 2], [2, 1]);
        test_reshape!(ok from [3, 4, 5], [20, 5, 1], to [4, 15], [15, 1]);
        test_reshape!(ok from [4, 4], [4, 1], to [2, 2, 2, 2], [8, 4, 2, 1]);
        test_reshape!(ok from [3, 4, 4], [16, 4, 1], to [3, 16], [16, 1]);

        // padded rows
        test_reshape!(ok from [2, 3, 4], [24, 4, 1], to [2, 12], [24, 1]);
        test_reshape!(fail from [2, 3, 4], [24, 4, 1], to [4, 6]);
        test_reshape!(ok from [4, 4], [8, 1], to [2, 2, 2, 2], [16, 8, 2, 1]);
        test_reshape!(fail from [4, 4], [8, 1], to [2, 1, 4, 2]);

        // strided and negative strides
        test_reshape!(ok from [16], [4], to [2, 2, 4], [32, 16, 4]);
        test_reshape!(ok from [16], [-4], to [2, 2, 4], [-32, -16, -4]);

        // same shape keeps the strides
        test_reshape!(ok from [10], [2], to [10], [2]);
        test_reshape!(ok from [2, 10], [1, 2], to [2, 10], [1, 2]);
        test_reshape!(ok from [3, 4, 5], [4, 1, 1], to [12, 5], [1, 1]);

        // broadcast axes
        test_reshape!(ok from [3, 4, 5, 7], [0, 0, 7, 1], to [12, 35], [0, 1]);
        test_reshape!(fail from [3, 4, 5, 7], [0, 0, 7, 1], to [28, 15]);
    }

    #[test]
    fn test_reshape_singletons() {
        test_reshape!(ok from [10], [1], to [1, 10, 1, 1], [10, 1, 1, 1]);
        test_reshape!(ok from [1, 10], [10, 1], to [10, 1], [1, 1]);
        test_reshape!(ok from [10, 1, 1, 1], [1, 1, 1, 1], to [10], [1]);
        test_reshape!(ok from [5, 1, 2, 1], [2, 99, 1, 7], to [10], [1]);
        test_reshape!(fail from [5, 1, 2, 1], [1, 1, 5, 1], to [10]);
        test_reshape!(ok from [1, 1], [3, 5], to [1, 1, 1], [1, 1, 1]);
    }

    #[test]
    fn reshape_errors() {
        let shape = Shape::new([2, 3]);
        let err = reshape(&shape, &shape.strides(), &Shape::new([7])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

        let empty = Shape::new([2, 0]);
        let err = reshape(&empty, &empty.strides(), &Shape::new([0, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleLayout);

        let err = reshape(&Shape::new([2, 3, 4]), &Strides::new([24, 4, 1]), &Shape::new([4, 6])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleLayout);
        // the new outer axis of length 4 straddles the padded row boundary
        assert_eq!(err.axis().map(|a| a.index()), Some(0));
    }
}
