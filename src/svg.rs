//! SVG rendering of a pipeline result.
//!
//! One `<path>` for the trajectory and one `<circle>` per fix, each carrying a
//! `<title>` tooltip. Pure function, returns a `String`.

use std::fmt::Write;

use crate::color::{self, MarkerRole};
use crate::track::{TrackResult, Viewport};

#[derive(Debug, Clone)]
pub struct SvgStyle {
    pub marker_radius: f64,
    pub endpoint_radius: f64,
    pub color_by_time: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            marker_radius: 3.0,
            endpoint_radius: 6.0,
            color_by_time: false,
        }
    }
}

/// Escape the XML special characters for text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn render_svg(result: &TrackResult, viewport: &Viewport, style: &SvgStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background: {bg}">"#,
        w = viewport.width,
        h = viewport.height,
        bg = color::hex(color::TRACK_BACKGROUND),
    );

    if result.is_empty() {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle">No tracking data available</text>"#,
            viewport.width / 2.0,
            viewport.height / 2.0
        );
        out.push_str("</svg>\n");
        return out;
    }

    write_track_line(&mut out, result, style);
    write_markers(&mut out, result, style);

    out.push_str("</svg>\n");
    out
}

fn write_track_line(out: &mut String, result: &TrackResult, style: &SvgStyle) {
    let pts = &result.projected;
    if style.color_by_time && pts.len() > 1 {
        // One segment per leg so each can take its own colour.
        let gradient = color::time_gradient(pts.len() - 1);
        for (leg, colour) in pts.windows(2).zip(gradient) {
            let _ = writeln!(
                out,
                r#"<line class="track-line" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2" />"#,
                leg[0].x,
                leg[0].y,
                leg[1].x,
                leg[1].y,
                color::hex(colour)
            );
        }
        return;
    }

    let mut d = String::new();
    for (i, p) in pts.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd} {:.2} {:.2}", p.x, p.y);
    }
    let _ = writeln!(
        out,
        r#"<path class="track-line" d="{d}" fill="none" stroke="{}" stroke-width="2" />"#,
        color::hex(color::TRACK_LINE)
    );
}

fn write_markers(out: &mut String, result: &TrackResult, style: &SvgStyle) {
    let len = result.projected.len();
    for (i, (p, point)) in result.projected.iter().zip(&result.points).enumerate() {
        let role = color::marker_role(i, len);
        let radius = match role {
            MarkerRole::Point => style.marker_radius,
            MarkerRole::Start | MarkerRole::End => style.endpoint_radius,
        };
        let _ = writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{radius}" fill="{}" stroke="white" stroke-width="2"><title>{}</title></circle>"#,
            p.x,
            p.y,
            color::hex(color::marker_color(role)),
            xml_escape(&point.label())
        );
    }
}
