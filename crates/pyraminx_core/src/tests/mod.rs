use crate::*;

mod geometry;
mod scenarios;

fn solved() -> PyraminxState {
    PyraminxState::new()
}

fn state_after(twists: &[Twist]) -> PyraminxState {
    let mut state = solved();
    state.apply_twists(twists.iter().copied());
    state
}

fn layer(axis: Axis) -> Section {
    Section::layer(axis)
}
