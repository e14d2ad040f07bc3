//! Console output: banner, captured matrices and status messages.
//!
//! Everything here writes to a caller-supplied sink so the exact text can be
//! checked without a terminal.

use std::io::Write;

use anyhow::Result;

use crate::constants::digit::{
    SEPARATOR_WIDTH, SHADE_GLYPH, SHADE_THRESHOLD, SOLID_GLYPH, SOLID_THRESHOLD,
};
use crate::constants::timing::CAPTURE_INTERVAL_SECS;
use crate::normalize::DigitMatrix;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub fn glyph(value: f32) -> char {
    if value > SOLID_THRESHOLD {
        SOLID_GLYPH
    } else if value > SHADE_THRESHOLD {
        SHADE_GLYPH
    } else {
        ' '
    }
}

pub fn write_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Digit Capture Application Started")?;
    writeln!(out, "- Draw digits with mouse/stylus")?;
    writeln!(
        out,
        "- Canvas automatically resets every {} seconds",
        CAPTURE_INTERVAL_SECS
    )?;
    writeln!(out, "- Press ESC to exit")?;
    writeln!(out, "{}", separator())?;
    Ok(())
}

pub fn write_digit(out: &mut impl Write, matrix: &DigitMatrix) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", separator())?;
    writeln!(out, "Captured digit as 28x28 matrix (normalized 0-1):")?;
    writeln!(out, "{}", separator())?;

    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
        writeln!(out, "{}", line.join(" "))?;
    }

    writeln!(out)?;
    writeln!(out, "Visual representation:")?;
    for row in matrix.rows() {
        let line: String = row.iter().map(|&v| glyph(v)).collect();
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

pub fn write_empty(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "No drawing detected!")?;
    Ok(())
}

pub fn write_reset(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", separator())?;
    writeln!(out, "Canvas reset - Ready for new input")?;
    writeln!(out, "{}", separator())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use image::{GrayImage, Luma};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("utf-8 output")
    }

    fn sample_matrix() -> DigitMatrix {
        let mut raster = GrayImage::new(120, 120);
        for y in 20..100 {
            for x in 50..70 {
                raster.put_pixel(x, y, Luma([255]));
            }
        }
        normalize(&raster).expect("drawing present")
    }

    #[rstest]
    #[case(1.0, '█')]
    #[case(0.51, '█')]
    #[case(0.5, '▒')]
    #[case(0.11, '▒')]
    #[case(0.1, ' ')]
    #[case(0.0, ' ')]
    fn glyph_thresholds(#[case] value: f32, #[case] expected: char) {
        assert_eq!(glyph(value), expected);
    }

    #[test]
    fn banner_lists_controls() {
        let text = render(|out| write_banner(out));
        assert_eq!(
            text,
            "Digit Capture Application Started\n\
             - Draw digits with mouse/stylus\n\
             - Canvas automatically resets every 30 seconds\n\
             - Press ESC to exit\n\
             ==================================================\n"
        );
    }

    #[test]
    fn reset_and_empty_messages() {
        assert_eq!(render(|out| write_empty(out)), "\nNo drawing detected!\n");
        assert_eq!(
            render(|out| write_reset(out)),
            "\n==================================================\n\
             Canvas reset - Ready for new input\n\
             ==================================================\n"
        );
    }

    #[test]
    fn digit_report_layout() {
        let matrix = sample_matrix();
        let text = render(|out| write_digit(out, &matrix));
        let lines: Vec<&str> = text.lines().collect();

        // blank, separator, header, separator, 28 rows, blank, label, 28 rows
        assert_eq!(lines.len(), 4 + 28 + 2 + 28);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "Captured digit as 28x28 matrix (normalized 0-1):");
        assert_eq!(lines[3], "=".repeat(50));
        assert_eq!(lines[32], "");
        assert_eq!(lines[33], "Visual representation:");

        for (row, line) in lines[4..32].iter().enumerate() {
            let cells: Vec<&str> = line.split(' ').collect();
            assert_eq!(cells.len(), 28);
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!(*cell, format!("{:.2}", matrix.get(row, col)));
            }
        }

        for (row, line) in lines[34..].iter().enumerate() {
            let glyphs: Vec<char> = line.chars().collect();
            assert_eq!(glyphs.len(), 28);
            for (col, g) in glyphs.iter().enumerate() {
                assert_eq!(*g, glyph(matrix.get(row, col)));
            }
        }
    }

    #[test]
    fn visual_shows_vertical_bar() {
        let matrix = sample_matrix();
        let text = render(|out| write_digit(out, &matrix));
        let middle = text.lines().nth(34 + 14).expect("visual row");
        assert_eq!(middle.chars().nth(14), Some(SOLID_GLYPH));
        assert_eq!(middle.chars().next(), Some(' '));
    }
}
