use std::io::BufRead;

use log::{debug, warn};
use thiserror::Error;

use crate::facelet::{Color, CubeState, Face, FaceGrid};

/// Something that can look at one face of the cube, like a camera with a 3×3
/// grid overlay.
pub trait CaptureSource {
    /// Read the face currently presented. `None` when the source can't
    /// deliver anything at all; individual cells may still be `Unknown`.
    fn sample(&mut self) -> Option<FaceGrid>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("The capture source is not available")]
    Unavailable,
}

/// Take up to `samples` samples and keep, for every cell, the colour seen most
/// often. `Unknown` readings don't vote; a cell with nothing but `Unknown`
/// readings stays `Unknown`. On a tie the colour seen first wins.
pub fn capture_face(source: &mut impl CaptureSource, samples: usize) -> Option<FaceGrid> {
    let taken = (0..samples.max(1)).filter_map(|_| source.sample()).collect::<Vec<_>>();

    if taken.is_empty() {
        return None;
    }

    debug!("Capture: {} of {} samples usable", taken.len(), samples.max(1));

    let mut out = [[Color::Unknown; 3]; 3];

    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            // Order of first sighting, with counts.
            let mut votes: Vec<(Color, usize)> = Vec::new();

            for grid in &taken {
                let color = grid[row][col];
                if color == Color::Unknown {
                    continue;
                }

                match votes.iter_mut().find(|(seen, _)| *seen == color) {
                    Some((_, count)) => *count += 1,
                    None => votes.push((color, 1)),
                }
            }

            let mut best: Option<(Color, usize)> = None;
            for (color, count) in votes {
                if best.is_none_or(|(_, best_count)| count > best_count) {
                    best = Some((color, count));
                }
            }

            if let Some((color, _)) = best {
                *cell = color;
            }
        }
    }

    Some(out)
}

/// Capture one face straight into `cube`.
///
/// # Errors
///
/// `CaptureError::Unavailable` if the source never delivered a sample. The
/// cube is left untouched in that case.
pub fn scan_face(
    cube: &mut CubeState,
    face: Face,
    source: &mut impl CaptureSource,
    samples: usize,
) -> Result<(), CaptureError> {
    let grid = capture_face(source, samples).ok_or(CaptureError::Unavailable)?;
    cube.set_face(face, grid);
    Ok(())
}

/// Faces typed in by hand, one per line: nine colour letters in row-major
/// order. Whitespace is ignored and `?` or `x` marks a cell that couldn't be
/// read. End of input, or a line that can't be read as a face, counts as the
/// source being unavailable.
pub struct TextCapture<R> {
    reader: R,
}

impl<R: BufRead> TextCapture<R> {
    pub fn new(reader: R) -> TextCapture<R> {
        TextCapture { reader }
    }
}

fn parse_face_line(line: &str) -> Option<FaceGrid> {
    let cells = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '?' | 'x' | 'X' => Some(Color::Unknown),
            c => Color::from_letter(c),
        })
        .collect::<Option<Vec<_>>>()?;

    if cells.len() != 9 {
        return None;
    }

    let mut grid = [[Color::Unknown; 3]; 3];
    for (i, color) in cells.into_iter().enumerate() {
        grid[i / 3][i % 3] = color;
    }

    Some(grid)
}

impl<R: BufRead> CaptureSource for TextCapture<R> {
    fn sample(&mut self) -> Option<FaceGrid> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!("Could not read a face: {e}");
                    return None;
                }
            }

            if line.trim().is_empty() {
                continue;
            }

            let grid = parse_face_line(&line);
            if grid.is_none() {
                warn!("`{}` is not nine colour letters", line.trim());
            }
            return grid;
        }
    }
}
