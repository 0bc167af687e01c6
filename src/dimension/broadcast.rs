use super::{Shape, Strides};
use crate::error::ShapeError;
use crate::Ix;

/// Broadcast one axis of length `input` to length `output`.
///
/// - `input == output`: nothing changes.
/// - `input == 1` and `output != 1`: the axis becomes a broadcast axis and
///   its stride is set to zero.
///
/// Return `false` for any other combination, leaving `stride` untouched.
///
/// ```
/// use ndstride::broadcast_axis;
///
/// let mut stride = 4;
/// assert!(broadcast_axis(1, &mut stride, 7));
/// assert_eq!(stride, 0);
///
/// let mut stride = 4;
/// assert!(broadcast_axis(7, &mut stride, 7));
/// assert_eq!(stride, 4);
/// assert!(!broadcast_axis(3, &mut stride, 7));
/// ```
#[inline]
pub fn broadcast_axis(input: Ix, stride: &mut isize, output: Ix) -> bool {
    if input == output {
        true
    } else if input == 1 {
        *stride = 0;
        true
    } else {
        false
    }
}

/// Broadcast an array of shape `input` with strides `strides` to the shape
/// `output` of the same rank.
///
/// Each axis follows [`broadcast_axis`]. No axes are inserted: shapes of
/// different rank must be aligned by the caller first, for example with
/// [`Shape::resize`].
///
/// **Errors** with `ShapeMismatch` naming the first incompatible axis; the
/// strides are only updated if every axis is compatible.
///
/// ```
/// use ndstride::{broadcast, Shape, Strides};
///
/// let mut strides = Strides::new([3, 1]);
/// broadcast(&Shape::new([1, 3]), &mut strides, &Shape::new([5, 3])).unwrap();
/// assert_eq!(strides, [0, 1]);
/// assert!(broadcast(&Shape::new([2, 3]), &mut strides, &Shape::new([5, 3])).is_err());
/// ```
pub fn broadcast<const N: usize>(
    input: &Shape<N>, strides: &mut Strides<N>, output: &Shape<N>,
) -> Result<(), ShapeError> {
    let mut out = *strides;
    for axis in 0..N {
        if !broadcast_axis(input[axis], &mut out[axis], output[axis]) {
            return Err(rejected!(ShapeError::broadcast(axis, input[axis], output[axis])));
        }
    }
    *strides = out;
    Ok(())
}

/// Return the shape that two shapes of the same rank broadcast to.
///
/// On each axis the extents must be equal, or one of them must be 1, in
/// which case the other is used.
///
/// ```
/// use ndstride::{co_broadcast, Shape};
///
/// let common = co_broadcast(&Shape::new([4, 1, 3]), &Shape::new([1, 2, 3])).unwrap();
/// assert_eq!(common, [4, 2, 3]);
/// assert!(co_broadcast(&Shape::new([4, 3]), &Shape::new([2, 3])).is_err());
/// ```
pub fn co_broadcast<const N: usize>(a: &Shape<N>, b: &Shape<N>) -> Result<Shape<N>, ShapeError> {
    let mut out = *a;
    for axis in 0..N {
        if a[axis] != b[axis] {
            if a[axis] == 1 {
                out[axis] = b[axis];
            } else if b[axis] != 1 {
                return Err(rejected!(ShapeError::broadcast(axis, b[axis], a[axis])));
            }
        }
    }
    Ok(out)
}
