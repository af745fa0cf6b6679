//! Text rendering of the puzzle as four triangular faces.

use std::fmt;

use owo_colors::OwoColorize;
use pyraminx_core::{Color, Face, PyraminxState};
use pyraminx_prefs::Preferences;

/// Slots of [`Face::positions()`] in each row of a face, from the first
/// corner of the face down to the edge between the other two.
///
/// Rows alternate between upward- and downward-pointing triangles, starting
/// and ending with upward ones.
const ROWS: [&[usize]; 3] = [&[3], &[6, 0, 8], &[4, 1, 7, 2, 5]];

/// Renders every face of the puzzle.
///
/// If `colored` is false, each facelet is written as the first two letters of
/// its color name instead of a colored triangle.
pub(crate) fn render(state: &PyraminxState, prefs: &Preferences, colored: bool) -> String {
    Net {
        state,
        prefs,
        colored,
    }
    .to_string()
}

/// Text view of the four faces.
struct Net<'a> {
    state: &'a PyraminxState,
    prefs: &'a Preferences,
    colored: bool,
}
impl fmt::Display for Net<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            self.fmt_face(f, face)?;
        }
        if self.state.is_solved() {
            writeln!(f, "solved")?;
        }
        Ok(())
    }
}
impl Net<'_> {
    fn fmt_face(&self, f: &mut fmt::Formatter<'_>, face: Face) -> fmt::Result {
        let colors = self.state.face_colors(face);
        let cell_width = if self.colored { 1 } else { 2 };
        writeln!(f, "{face}")?;
        for (row_index, row) in ROWS.iter().enumerate() {
            let indent = (cell_width + 1) * (ROWS.len() - 1 - row_index);
            write!(f, "  {:indent$}", "")?;
            for (i, &slot) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let glyph = if i % 2 == 0 { '▲' } else { '▼' };
                write!(f, "{}", facelet_str(self.prefs, colors[slot], glyph, self.colored))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn facelet_str(prefs: &Preferences, color: Color, glyph: char, colored: bool) -> String {
    let face_color = prefs.face_color(color);
    match (colored, face_color) {
        (true, Some(c)) => {
            let [r, g, b] = c.rgb.rgb;
            glyph.truecolor(r, g, b).to_string()
        }
        (_, Some(c)) => abbreviation(&c.name),
        (_, None) => abbreviation(&color.to_string()),
    }
}

fn abbreviation(name: &str) -> String {
    let mut chars = name.chars();
    let first = chars.next().map_or('?', |c| c.to_ascii_uppercase());
    let second = chars.next().unwrap_or(' ');
    format!("{first}{second}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pyraminx_core::{Axis, Section, Twist};

    use super::*;

    #[test]
    fn test_render_solved() {
        let prefs = Preferences::default();
        let expected = "\
LRB
        Ye
     Ye Ye Ye
  Ye Ye Ye Ye Ye
BUL
        Pi
     Pi Pi Pi
  Pi Pi Pi Pi Pi
ULR
        Gr
     Gr Gr Gr
  Gr Gr Gr Gr Gr
RBU
        Pu
     Pu Pu Pu
  Pu Pu Pu Pu Pu
solved
";
        assert_eq!(expected, render(&PyraminxState::new(), &prefs, false));
    }

    #[test]
    fn test_render_after_twist() {
        let prefs = Preferences::default();
        let mut state = PyraminxState::new();
        state.apply_twist(Twist::cw(Section::layer(Axis::L)));
        let rendered = render(&state, &prefs, false);
        let lrb: Vec<&str> = rendered.lines().skip(1).take(3).collect();
        // `L` is the first corner of LRB, so its layer covers the top two rows.
        assert_eq!(vec!["        Pi", "     Pi Pi Pi", "  Ye Ye Ye Ye Ye"], lrb);
        assert!(!rendered.ends_with("solved\n"));
    }
}
