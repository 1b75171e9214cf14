//! Affirmation text overlay.
//!
//! Only the first sentence of the affirmation is shown; anything after the
//! first `.` is dropped. The clause is word-wrapped against the measured
//! width of the current font.

use crate::constants::*;
use crate::surface::{Paint, Shadow, Surface, SurfaceResult, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// First non-empty `.`-separated clause, trimmed.
pub fn first_clause(text: &str) -> Option<&str> {
    text.split('.').map(str::trim).find(|s| !s.is_empty())
}

/// Greedy word wrap using `measure` for the running line width. A single
/// word wider than `max_width` still gets its own line.
pub fn wrap_words<F>(clause: &str, max_width: f64, mut measure: F) -> SurfaceResult<Vec<String>>
where
    F: FnMut(&str) -> SurfaceResult<f64>,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in clause.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate)? > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// Positions each wrapped line; the first sits at `0.4h`.
pub fn layout<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    text: &str,
) -> SurfaceResult<Vec<TextLine>> {
    let Some(clause) = first_clause(text) else {
        return Ok(Vec::new());
    };
    surface.set_font(TEXT_FONT);
    let max_width = width - TEXT_SIDE_MARGIN;
    let lines = wrap_words(clause, max_width, |s| surface.measure_text(s))?;
    let top = height * TEXT_TOP_FRACTION;
    Ok(lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            text,
            x: width / 2.0,
            y: top + i as f64 * TEXT_LINE_HEIGHT,
        })
        .collect())
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    text: &str,
) -> SurfaceResult<Vec<TextLine>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let lines = layout(surface, width, height, text)?;
    if lines.is_empty() {
        return Ok(lines);
    }

    surface.set_text_align(TextAlign::Center);
    surface.set_fill(&Paint::Color(TEXT_FILL.into()))?;
    surface.set_shadow(&Shadow {
        color: TEXT_SHADOW_COLOR.to_string(),
        blur: TEXT_SHADOW_BLUR,
        offset_x: TEXT_SHADOW_OFFSET,
        offset_y: TEXT_SHADOW_OFFSET,
    });
    let mut result = Ok(());
    for line in &lines {
        result = surface.fill_text(&line.text, line.x, line.y);
        if result.is_err() {
            break;
        }
    }
    // shadow must not leak into the next frame's background
    surface.set_shadow(&Shadow::none());
    result.map(|()| lines)
}
