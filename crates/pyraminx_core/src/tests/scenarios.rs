use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_initial_colors() {
    let state = solved();
    for face in Face::ALL {
        assert_eq!([Color::of_face(face); 9], state.face_colors(face));
    }
    assert_eq!(Ok(Color::Yellow), state.get_color_by_name("LRB", "Ll"));
    assert_eq!(Ok(Color::Pink), state.get_color_by_name("BUL", "LB"));
    assert_eq!(Ok(Color::Green), state.get_color_by_name("ULR", "U"));
    assert_eq!(Ok(Color::Purple), state.get_color_by_name("RBU", "Uu"));
}

#[test]
fn test_l_clockwise_from_solved() {
    let mut state = solved();
    state.apply_rotation(layer(Axis::L), Direction::Clockwise);

    assert_eq!(Ok(Color::Pink), state.get_color(Face::Lrb, Position::Center(Axis::L)));
    assert_eq!([Color::Purple; 9], state.face_colors(Face::Rbu));
    assert!(!state.is_solved());

    // Colors on LRB that are not next to L stay put.
    assert_eq!(Ok(Color::Yellow), state.get_color(Face::Lrb, Position::Center(Axis::R)));
    assert_eq!(Ok(Color::Yellow), state.get_color(Face::Lrb, Position::Edge(Axis::R, Axis::B)));
    // LRB's edges next to L come from BUL.
    assert_eq!(Ok(Color::Pink), state.get_color(Face::Lrb, Position::Edge(Axis::L, Axis::R)));
    assert_eq!(Ok(Color::Pink), state.get_color(Face::Lrb, Position::Edge(Axis::B, Axis::L)));
}

#[test]
fn test_l_three_times_restores_solved() {
    let mut state = solved();
    for _ in 0..3 {
        state.apply_rotation(layer(Axis::L), Direction::Clockwise);
    }
    assert_eq!(solved().color_assignment(), state.color_assignment());
    assert!(state.is_solved());
}

#[test]
fn test_r_ccw_preview() {
    let before = state_after(&[
        Twist::cw(layer(Axis::U)),
        Twist::ccw(layer(Axis::B)),
        Twist::cw(Section::tip(Axis::R)),
    ]);
    let mut after = before.clone();
    after.apply_rotation(layer(Axis::R), Direction::CounterClockwise);

    for face in Face::ALL {
        for position in face.positions() {
            assert_eq!(
                before.get_from_color(layer(Axis::R), Direction::CounterClockwise, face, position),
                after.get_color(face, position),
                "{face}:{position}",
            );
        }
    }
}

#[test]
fn test_get_from_face_position() {
    let state = solved();
    let l = layer(Axis::L);

    assert_eq!(
        Ok((Face::Bul, Position::Center(Axis::L))),
        state.get_from_face_position(l, Direction::Clockwise, Face::Lrb, Position::Center(Axis::L)),
    );
    assert_eq!(
        Ok((Face::Ulr, Position::Center(Axis::L))),
        state.get_from_face_position(
            l,
            Direction::CounterClockwise,
            Face::Lrb,
            Position::Center(Axis::L),
        ),
    );
    // Unaffected positions map to themselves.
    assert_eq!(
        Ok((Face::Lrb, Position::Vertex(Axis::R))),
        state.get_from_face_position(l, Direction::Clockwise, Face::Lrb, Position::Vertex(Axis::R)),
    );
    // Edges are renamed on their way between faces.
    assert_eq!(
        Ok((Face::Bul, Position::Edge(Axis::L, Axis::B))),
        state.get_from_face_position(
            l,
            Direction::Clockwise,
            Face::Lrb,
            Position::Edge(Axis::L, Axis::R),
        ),
    );
    let tables = state.tables();
    assert_eq!(
        Some(Position::Edge(Axis::L, Axis::B)),
        tables.source_edge_position(l, Direction::Clockwise, Face::Lrb, Position::Edge(Axis::L, Axis::R)),
    );
    assert_eq!(
        None,
        tables.source_edge_position(l, Direction::Clockwise, Face::Lrb, Position::Center(Axis::L)),
    );
    assert_eq!(
        None,
        tables.source_edge_position(
            Section::tip(Axis::L),
            Direction::Clockwise,
            Face::Lrb,
            Position::Edge(Axis::L, Axis::R),
        ),
    );
}

#[test]
fn test_tip_twist_only_moves_vertices() {
    let mut state = solved();
    state.apply_rotation(Section::tip(Axis::U), Direction::Clockwise);

    let moved: Vec<_> = state
        .colors()
        .filter(|&(face, _, color)| color != Color::of_face(face))
        .map(|(face, position, _)| (face, position))
        .collect();
    assert_eq!(
        vec![
            (Face::Bul, Position::Vertex(Axis::U)),
            (Face::Ulr, Position::Vertex(Axis::U)),
            (Face::Rbu, Position::Vertex(Axis::U)),
        ],
        moved,
    );
}

#[test]
fn test_invalid_positions() {
    let state = solved();

    // `U` is not on LRB.
    assert_eq!(
        Err(PyraminxError::InvalidPosition {
            face: Face::Lrb,
            position: "U".to_string(),
        }),
        state.get_color(Face::Lrb, Position::Center(Axis::U)),
    );
    // Edges are named in the face's own order.
    assert_eq!(
        Err(PyraminxError::InvalidPosition {
            face: Face::Lrb,
            position: "RL".to_string(),
        }),
        state.get_color(Face::Lrb, Position::Edge(Axis::R, Axis::L)),
    );
    assert_eq!(
        Err(PyraminxError::InvalidPosition {
            face: Face::Lrb,
            position: "Xx".to_string(),
        }),
        state.get_color_by_name("LRB", "Xx"),
    );
    assert!(matches!(
        state.get_from_color(
            layer(Axis::L),
            Direction::Clockwise,
            Face::Rbu,
            Position::Center(Axis::L),
        ),
        Err(PyraminxError::InvalidPosition { .. }),
    ));
    assert_eq!(
        Err(PyraminxError::InvalidFace("XYZ".to_string())),
        state.get_color_by_name("XYZ", "L"),
    );
}

#[test]
fn test_parse_sections() {
    assert_eq!(Ok(Section::layer(Axis::B)), "B".parse());
    assert_eq!(Ok(Section::tip(Axis::B)), "b".parse());
    assert_eq!(Ok(Section::tip(Axis::U)), Section::try_from('u'));
    for bad in ["", "X", "x", "LL", "Ll", "F"] {
        assert_eq!(
            Err(PyraminxError::InvalidSection(bad.to_string())),
            bad.parse::<Section>(),
        );
    }
    assert_eq!(Ok(Direction::CounterClockwise), "ccw".parse());
    assert!("sideways".parse::<Direction>().is_err());
}

#[test]
fn test_section_names() {
    let names: String = Section::ALL.iter().map(|s| s.letter()).collect();
    assert_eq!("UuLlRrBb", names);
    for (i, section) in Section::ALL.into_iter().enumerate() {
        assert_eq!(i, section.index());
    }
    assert_eq!("L'", Twist::ccw(layer(Axis::L)).to_string());
    assert_eq!("r", Twist::cw(Section::tip(Axis::R)).to_string());

    assert_eq!(Ok(Twist::ccw(layer(Axis::L))), "L'".parse());
    assert_eq!(Ok(Twist::cw(Section::tip(Axis::B))), "b".parse());
    assert!("L''".parse::<Twist>().is_err());
    assert!("'".parse::<Twist>().is_err());
}

#[test]
fn test_face_layout() {
    let names: Vec<String> = Face::Lrb.positions().iter().map(|p| p.to_string()).collect();
    assert_eq!(vec!["L", "R", "B", "Ll", "Rr", "Bb", "LR", "RB", "BL"], names);
    let names: Vec<String> = Face::Bul.positions().iter().map(|p| p.to_string()).collect();
    assert_eq!(vec!["B", "U", "L", "Bb", "Uu", "Ll", "BU", "UL", "LB"], names);

    for facelet in Facelet::iter() {
        assert_eq!(Ok(facelet), Facelet::new(facelet.face(), facelet.position()));
        assert_eq!(
            Ok(facelet.position()),
            facelet.face().parse_position(&facelet.position().to_string()),
        );
    }
    assert_eq!(Ok(Face::Rbu), "RBU".parse());
}

#[test]
fn test_affecting_sections() {
    assert_eq!(
        SectionSet::L_LAYER,
        Position::Center(Axis::L).affecting_sections(),
    );
    assert_eq!(
        SectionSet::L_LAYER | SectionSet::L_TIP,
        Position::Vertex(Axis::L).affecting_sections(),
    );
    assert_eq!(
        SectionSet::L_LAYER | SectionSet::R_LAYER,
        Position::Edge(Axis::L, Axis::R).affecting_sections(),
    );
    assert_eq!(
        Axis::ALL.map(Section::tip).to_vec(),
        SectionSet::of_variant(Variant::Tip).sections().collect::<Vec<_>>(),
    );
}

#[test]
fn test_snapshot() {
    let state = state_after(&[Twist::cw(layer(Axis::L))]);
    let snapshot = state.snapshot();
    assert!(!snapshot.solved);
    assert_eq!(
        vec!["LRB", "BUL", "ULR", "RBU"],
        snapshot.faces.keys().collect::<Vec<_>>(),
    );
    assert_eq!(Color::Pink, snapshot.faces["LRB"]["L"]);
    assert_eq!(Color::Yellow, snapshot.faces["LRB"]["R"]);
}

#[test]
fn test_scramble_is_deterministic() {
    let params = ScrambleParams::with_seed(30, "hello");
    let a = PyraminxState::new_scrambled(params.clone());
    let b = scramble::scramble(params);
    assert_eq!(30, a.twists.len());
    assert_eq!(a.twists, b.twists);
    assert_eq!(a.state, b.state);
    assert_eq!(state_after(&a.twists), a.state);

    let c = PyraminxState::new_scrambled(ScrambleParams::with_seed(30, "goodbye"));
    assert_ne!(a.twists, c.twists);
}

#[test]
fn test_random_solver_bag() {
    let mut solver = solver::RandomSolver::with_seed(5);
    for _ in 0..3 {
        let mut sections: Vec<_> = (0..SECTION_COUNT)
            .map(|_| solver.next_twist().section.index())
            .collect();
        sections.sort();
        assert_eq!((0..SECTION_COUNT).collect::<Vec<_>>(), sections);
        assert_eq!(SECTION_COUNT, solver.remaining_in_bag().len());
    }
}

#[test]
fn test_solvers_stop() {
    use solver::MoveChooser;

    let mut state = solved();
    let outcome = solver::RandomSolver::with_seed(1).solve(&mut state, 10);
    assert!(outcome.solved);
    assert!(outcome.twists.is_empty());

    let scrambled = state_after(&[Twist::cw(layer(Axis::R))]);
    let mut state = scrambled.clone();
    let outcome = solver::RandomSolver::with_seed(1).solve(&mut state, 20);
    assert!(outcome.twists.len() <= 20);
    assert_eq!(outcome.solved, state.is_solved());
    let mut replayed = scrambled.clone();
    replayed.apply_twists(outcome.twists.iter().copied());
    assert_eq!(state, replayed);

    // One twist away: the preview solver finds the undo immediately.
    let mut state = scrambled;
    let outcome = solver::PreviewSolver::with_seed(1).solve(&mut state, 5);
    assert!(outcome.solved);
    assert_eq!(vec![Twist::ccw(layer(Axis::R))], outcome.twists);
}
