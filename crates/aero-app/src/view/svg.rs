use super::color::Rgba;
use super::scene::{AirfoilScene, Anchor};
use std::fmt::Write;

fn stroke_attrs(color: Rgba) -> String {
    if color.a == 255 {
        format!("stroke=\"{}\"", color.to_hex())
    } else {
        format!(
            "stroke=\"#{:02x}{:02x}{:02x}\" stroke-opacity=\"{:.3}\"",
            color.r,
            color.g,
            color.b,
            color.opacity()
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Standalone SVG document for a scene, with an optional title line.
pub fn render_svg(scene: &AirfoilScene, title: Option<&str>) -> String {
    let style = &scene.style;
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = style.width,
        h = style.height
    );
    if let Some(title) = title {
        let _ = writeln!(
            out,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"14\" fill=\"{}\">{}</text>",
            style.pad,
            style.pad * 0.6,
            style.label.to_hex(),
            escape(title)
        );
    }

    if !scene.outline.is_empty() {
        let mut d = String::new();
        for (i, [x, y]) in scene.outline.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.2},{y:.2}");
        }
        let _ = writeln!(
            out,
            "  <path d=\"{d}\" fill=\"none\" {} stroke-width=\"{}\"/>",
            stroke_attrs(style.outline),
            style.outline_width
        );
    }

    for seg in &scene.segments {
        let _ = writeln!(
            out,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {} stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            seg.from[0],
            seg.from[1],
            seg.to[0],
            seg.to[1],
            stroke_attrs(seg.color),
            style.segment_width
        );
    }

    for [from, to] in &scene.axes {
        let _ = writeln!(
            out,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            from[0],
            from[1],
            to[0],
            to[1],
            stroke_attrs(style.axis)
        );
    }

    for label in &scene.labels {
        let anchor = match label.anchor {
            Anchor::Start => "start",
            Anchor::End => "end",
        };
        let _ = writeln!(
            out,
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{anchor}\" font-family=\"sans-serif\" font-size=\"12\" fill=\"{}\">{}</text>",
            label.pos[0],
            label.pos[1],
            style.label.to_hex(),
            escape(&label.text)
        );
    }

    out.push_str("</svg>\n");
    out
}
