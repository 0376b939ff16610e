use keyblock3d::math::{Point, Real, Vector, DEFAULT_EPSILON};
use keyblock3d::query::SplitResult;
use keyblock3d::shape::{Block, Face, Joint};

const EPS: Real = DEFAULT_EPSILON;

fn unit_cube() -> Block {
    let normals = [
        Vector::x(),
        -Vector::x(),
        Vector::y(),
        -Vector::y(),
        Vector::z(),
        -Vector::z(),
    ];
    let faces = normals
        .iter()
        .map(|n| Face::from_raw(n.x, n.y, n.z, 0.5, 0.5, 0.0).unwrap())
        .collect();
    Block::new(Point::origin(), faces)
}

/// A joint in the plane x = 0 whose square extent is centered at `center`
/// with the given in-plane half-width.
fn square_joint(center: Point, half_width: Real) -> Joint {
    let bounds = vec![
        (Vector::y(), half_width),
        (-Vector::y(), half_width),
        (Vector::z(), half_width),
        (-Vector::z(), half_width),
    ];
    Joint::from_raw(Vector::x(), 0.0, Point::origin(), center, 0.5, 0.0, bounds).unwrap()
}

#[test]
fn bounded_joint_missing_the_block_does_not_cut() {
    let cube = unit_cube();
    // The joint plane crosses the cube, but its finite extent sits far above.
    let joint = square_joint(Point::new(0.0, 5.0, 0.0), 1.0);

    assert!(matches!(cube.cut(&joint, EPS), Ok(SplitResult::Untouched)));
}

#[test]
fn bounded_joint_reaching_the_block_cuts_it() {
    let cube = unit_cube();
    let joint = square_joint(Point::origin(), 1.0);

    let SplitResult::Pair(kept, excluded) = cube.cut(&joint, EPS).unwrap() else {
        panic!("expected the bounded joint to cut the cube");
    };

    assert!(kept.contains_point(&Point::new(-0.25, 0.0, 0.0), EPS));
    assert!(excluded.contains_point(&Point::new(0.25, 0.0, 0.0), EPS));
}

#[test]
fn small_bounded_joint_inside_the_block_still_cuts() {
    // The extent is strictly inside the cube's cross-section; the contact
    // region is non-empty, so the cut happens on the carrier plane.
    let cube = unit_cube();
    let joint = square_joint(Point::origin(), 0.1);

    assert!(matches!(cube.cut(&joint, EPS), Ok(SplitResult::Pair(_, _))));
}

#[test]
fn persistent_joint_ignores_no_extent() {
    let cube = unit_cube();
    let joint = Joint::from_raw(
        Vector::x(),
        0.0,
        Point::origin(),
        Point::origin(),
        0.5,
        0.0,
        vec![],
    )
    .unwrap();

    assert!(joint.is_persistent());
    assert!(matches!(cube.cut(&joint, EPS), Ok(SplitResult::Pair(_, _))));
}
