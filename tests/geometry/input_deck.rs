use approx::assert_relative_eq;
use keyblock3d::io::{parse_rock_mass_str, InputError};
use keyblock3d::math::Point;

const CUBE_DECK: &str = "\
1.0 2.0 3.0
1.0 0.0 0.0 0.5 0.5 0.0
-1.0 0.0 0.0 0.5 0.5 0.0
0.0 1.0 0.0 0.5 0.5 0.0
0.0 -1.0 0.0 0.5 0.5 0.0
0.0 0.0 1.0 0.5 0.5 0.0
0.0 0.0 2.0 -1.0 0.5 0.0
%
2.0 0.0 0.0 0.0 1.0 2.0 3.0 1.0 2.0 3.0 0.35 0.1
0.0 1.0 0.0 0.0 1.0 2.0 3.0 1.0 2.0 3.0 0.35 0.1 0.0 0.0 1.0 2.5 0.0 0.0 -1.0 2.5
";

#[test]
fn parses_a_complete_deck() {
    let input = parse_rock_mass_str(CUBE_DECK).unwrap();

    assert_eq!(input.origin, Point::new(1.0, 2.0, 3.0));
    assert_eq!(input.volume.len(), 6);
    assert_eq!(input.joints.len(), 2);

    // Raw coefficients are normalized: unit normals, non-negative offsets.
    let flipped = &input.volume[5];
    assert_relative_eq!(flipped.normal.norm(), 1.0, epsilon = 1.0e-12);
    assert_relative_eq!(flipped.normal.z, -1.0, epsilon = 1.0e-12);
    assert_relative_eq!(flipped.offset, 0.5, epsilon = 1.0e-12);

    let scaled = &input.joints[0];
    assert_relative_eq!(scaled.normal.x, 1.0, epsilon = 1.0e-12);

    assert!(input.joints[0].is_persistent());
    assert_eq!(input.joints[1].bounds.len(), 2);
}

#[test]
fn nine_token_joint_line_is_rejected_with_its_line_number() {
    let deck = "\
0.0 0.0 0.0
1.0 0.0 0.0 0.5 0.5 0.0
%
1.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0
";

    let err = parse_rock_mass_str(deck).unwrap_err();
    assert!(matches!(
        err,
        InputError::WrongTokenCount {
            line: 4,
            expected: 12,
            found: 9,
        }
    ));
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn non_numeric_token_reports_line_and_token() {
    let deck = "\
0.0 0.0 0.0
1.0 0.0 abc 0.5 0.5 0.0
%
";

    let err = parse_rock_mass_str(deck).unwrap_err();
    match err {
        InputError::NotANumber { line, token, found } => {
            assert_eq!(line, 2);
            assert_eq!(token, 3);
            assert_eq!(found, "abc");
        }
        other => panic!("expected NotANumber, got {}", other),
    }
}

#[test]
fn face_line_with_wrong_arity_is_rejected() {
    let deck = "\
0.0 0.0 0.0
1.0 0.0 0.0 0.5 0.5
%
";

    assert!(matches!(
        parse_rock_mass_str(deck).unwrap_err(),
        InputError::WrongTokenCount {
            line: 2,
            expected: 6,
            found: 5,
        }
    ));
}

#[test]
fn partial_bound_group_is_rejected() {
    let deck = "\
0.0 0.0 0.0
1.0 0.0 0.0 0.5 0.5 0.0
%
1.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.35 0.1 0.0 1.0
";

    assert!(matches!(
        parse_rock_mass_str(deck).unwrap_err(),
        InputError::PartialBoundGroup { line: 4 }
    ));
}

#[test]
fn missing_sentinel_is_rejected() {
    let deck = "\
0.0 0.0 0.0
1.0 0.0 0.0 0.5 0.5 0.0
";

    assert!(matches!(
        parse_rock_mass_str(deck).unwrap_err(),
        InputError::MissingSentinel
    ));
}

#[test]
fn sentinel_without_faces_is_rejected() {
    let deck = "\
0.0 0.0 0.0
%
";

    assert!(matches!(
        parse_rock_mass_str(deck).unwrap_err(),
        InputError::EmptyVolume
    ));
}

#[test]
fn empty_input_is_missing_its_origin() {
    assert!(matches!(
        parse_rock_mass_str("").unwrap_err(),
        InputError::MissingOrigin
    ));
}

#[test]
fn zero_normal_face_is_rejected() {
    let deck = "\
0.0 0.0 0.0
0.0 0.0 0.0 0.5 0.5 0.0
%
";

    assert!(matches!(
        parse_rock_mass_str(deck).unwrap_err(),
        InputError::DegenerateNormal { line: 2 }
    ));
}
