use cube_core::{Color, CubeState, Face};
use owo_colors::{DynColors, OwoColorize};

fn swatch(color: Color) -> DynColors {
    match color {
        Color::White => DynColors::Rgb(255, 255, 255),
        Color::Yellow => DynColors::Rgb(255, 213, 0),
        Color::Red => DynColors::Rgb(196, 30, 58),
        Color::Orange => DynColors::Rgb(255, 88, 0),
        Color::Blue => DynColors::Rgb(0, 81, 186),
        Color::Green => DynColors::Rgb(0, 158, 96),
        Color::Unknown => DynColors::Rgb(90, 90, 90),
    }
}

fn push_row(out: &mut String, row: &[Color; 3]) {
    for &color in row {
        let label = color.letter().unwrap_or('?');
        out.push_str(&format!(" {label} ").black().on_color(swatch(color)).to_string());
    }
}

/// The same unfolded net as `CubeState`'s `Display`, but with each facelet
/// drawn as a coloured block.
pub fn colored_net(cube: &CubeState) -> String {
    let mut out = String::new();
    let pad = " ".repeat(10);

    for row in cube.face(Face::Up) {
        out.push_str(&pad);
        push_row(&mut out, row);
        out.push('\n');
    }

    for r in 0..3 {
        for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back].into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_row(&mut out, &cube.face(face)[r]);
        }
        out.push('\n');
    }

    for row in cube.face(Face::Down) {
        out.push_str(&pad);
        push_row(&mut out, row);
        out.push('\n');
    }

    out
}
