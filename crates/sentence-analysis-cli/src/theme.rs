//! Terminal rendering of the engine's style contract.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use sentence_analysis_engine::{
    Background, NoteColor, RenderToken,
    format::{Border, Decoration, NoteSegment, Swatch, TokenStyle, Weight},
};

pub fn swatch_color(swatch: Swatch) -> Color {
    match swatch {
        Swatch::Blue => Color::Rgb(0x25, 0x63, 0xeb),
        Swatch::Green => Color::Rgb(0x16, 0xa3, 0x4a),
        Swatch::Red => Color::Rgb(0xdc, 0x26, 0x26),
        Swatch::Orange => Color::Rgb(0xea, 0x58, 0x0c),
        Swatch::Purple => Color::Rgb(0x93, 0x33, 0xea),
        Swatch::Pink => Color::Rgb(0xdb, 0x27, 0x77),
        Swatch::Gray => Color::Rgb(0x6b, 0x72, 0x80),
    }
}

pub fn background_color(bg: Background) -> Color {
    match bg {
        Background::ClauseBlue => Color::Rgb(0xdb, 0xea, 0xfe),
        Background::ClauseGreen => Color::Rgb(0xdc, 0xfc, 0xe7),
        Background::ClauseOrange => Color::Rgb(0xff, 0xed, 0xd5),
        Background::ClausePurple => Color::Rgb(0xf3, 0xe8, 0xff),
        Background::ClausePink => Color::Rgb(0xfc, 0xe7, 0xf3),
        Background::SoftGray => Color::Rgb(0xe5, 0xe7, 0xeb),
    }
}

pub fn note_color(color: NoteColor) -> Color {
    match color {
        NoteColor::Green => swatch_color(Swatch::Green),
        NoteColor::Blue => swatch_color(Swatch::Blue),
        NoteColor::Red => swatch_color(Swatch::Red),
    }
}

pub fn token_style(style: &TokenStyle) -> Style {
    let mut out = Style::default();
    if let Some(swatch) = style.color {
        out = out.fg(swatch_color(swatch));
    }
    if let Some(bg) = style.background {
        out = out.bg(background_color(bg));
    }
    if style.weight == Weight::Bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    match style.decoration {
        Decoration::None => {}
        Decoration::Underline(swatch) => {
            out = out
                .add_modifier(Modifier::UNDERLINED)
                .underline_color(swatch_color(swatch));
        }
        Decoration::Marker(_) => out = out.add_modifier(Modifier::REVERSED),
        Decoration::Strike => out = out.add_modifier(Modifier::CROSSED_OUT),
    }
    out
}

/// Spans for one token. Box, oval and ox marks draw as edge glyphs around the text.
pub fn token_spans(token: &RenderToken<'_>) -> Vec<Span<'static>> {
    let style = token_style(&token.style);
    let glyph = token.glyph.to_string();
    match token.style.border {
        Border::None => vec![Span::styled(glyph, style)],
        Border::Box(swatch) => framed(glyph, style, swatch, ("[", "]")),
        Border::Oval(swatch) => framed(glyph, style, swatch, ("(", ")")),
        Border::Ox(swatch) => framed(glyph, style, swatch, ("", "○")),
    }
}

fn framed(glyph: String, style: Style, swatch: Swatch, edges: (&str, &str)) -> Vec<Span<'static>> {
    let edge = style.fg(swatch_color(swatch)).add_modifier(Modifier::BOLD);
    vec![
        Span::styled(edges.0.to_string(), edge),
        Span::styled(glyph, style),
        Span::styled(edges.1.to_string(), edge),
    ]
}

/// Spans for a segmented note. Plain runs take the token's note colour.
pub fn note_spans(segments: &[NoteSegment], color: Option<NoteColor>) -> Vec<Span<'static>> {
    let plain = color.map_or_else(Style::default, |c| Style::default().fg(note_color(c)));
    segments
        .iter()
        .map(|segment| match segment.mark {
            None => Span::styled(segment.text.clone(), plain),
            Some(mark) => {
                let mut style = Style::default().fg(swatch_color(mark.swatch()));
                if mark.weight() == Weight::Bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Span::styled(segment.text.clone(), style)
            }
        })
        .collect()
}
