//! Checks the hand-built tables against the rigid motions of a tetrahedron.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::*;

/// Corner positions of a regular tetrahedron with edge length 2.
fn corner(axis: Axis) -> [f64; 3] {
    match axis {
        Axis::L => [0.0, 0.0, 0.0],
        Axis::R => [2.0, 0.0, 0.0],
        Axis::B => [1.0, 0.0, -3.0_f64.sqrt()],
        Axis::U => [1.0, (8.0_f64 / 3.0).sqrt(), -1.0 / 3.0_f64.sqrt()],
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Returns where a clockwise layer twist on `axis` carries each corner,
/// according to the face cycles.
///
/// A face is identified by the corner opposite it, so if `face` takes its
/// colors from `source`, the motion carries `source.opposite_axis()` to
/// `face.opposite_axis()`.
fn corner_motion(axis: Axis) -> HashMap<Axis, Axis> {
    let mut motion = HashMap::from([(axis, axis)]);
    for face in Face::ALL.into_iter().filter(|f| f.contains_axis(axis)) {
        let source = PermutationTables::source_face(layer(axis), Direction::Clockwise, face);
        motion.insert(source.opposite_axis(), face.opposite_axis());
    }
    motion
}

fn axes_of(position: Position) -> Vec<Axis> {
    let mut axes = match position {
        Position::Center(a) | Position::Vertex(a) => vec![a],
        Position::Edge(a, b) => vec![a, b],
    };
    axes.sort();
    axes
}

#[test]
fn test_corner_motion_is_a_rotation() {
    for axis in Axis::ALL {
        let motion = corner_motion(axis);
        assert_eq!(4, motion.len(), "{axis}");
        let mut images: Vec<Axis> = motion.values().copied().collect();
        images.sort();
        assert_eq!(Axis::ALL.to_vec(), images, "{axis}");
        for other in Axis::ALL.into_iter().filter(|&a| a != axis) {
            assert_ne!(other, motion[&other], "{axis} fixes {other}");
        }
    }
}

#[test]
fn test_tables_agree_with_corner_motion() {
    let tables = PermutationTables::shared();
    for axis in Axis::ALL {
        let motion = corner_motion(axis);
        let twist = Twist::cw(layer(axis));
        for facelet in Facelet::iter() {
            let source = tables.source(twist, facelet);
            if source == facelet {
                continue;
            }
            assert_eq!(motion[&source.face().opposite_axis()], facelet.face().opposite_axis());
            let mut moved_axes: Vec<Axis> = axes_of(source.position())
                .into_iter()
                .map(|a| motion[&a])
                .collect();
            moved_axes.sort();
            assert_eq!(
                axes_of(facelet.position()),
                moved_axes,
                "{twist} moves {source} to {facelet}",
            );
            assert_eq!(source.position().kind(), facelet.position().kind());
        }
    }
}

#[test]
fn test_all_twists_have_same_handedness() {
    let centroid = Axis::ALL.map(corner).into_iter().fold([0.0; 3], |acc, p| {
        [acc[0] + p[0] / 4.0, acc[1] + p[1] / 4.0, acc[2] + p[2] / 4.0]
    });

    let signs: Vec<bool> = Axis::ALL
        .into_iter()
        .map(|axis| {
            let motion = corner_motion(axis);
            let a = Axis::ALL.into_iter().find(|&a| a != axis).unwrap();
            let b = motion[&a];
            let c = motion[&b];
            let outward = sub(corner(axis), centroid);
            let normal = cross(sub(corner(b), corner(a)), sub(corner(c), corner(a)));
            let triple = dot(normal, outward);
            assert!(triple.abs() > 1e-6);
            triple > 0.0
        })
        .collect();
    assert_eq!(vec![signs[0]; 4], signs);
}
