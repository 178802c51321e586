//! SVG brush primitives shared by the content generators.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::core::DVec2;
use crate::terrain::NoiseField;

/// Format a coordinate with one decimal place.
pub fn num(v: f64) -> String {
    format!("{:.1}", v)
}

fn points_attr(points: &[DVec2]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", num(p.x), num(p.y));
    }
    out
}

/// Closed filled shape with an outline.
pub fn polygon(points: &[DVec2], fill: &str, stroke: &str, width: f64) -> String {
    format!(
        "<polyline points='{}' style='fill:{};stroke:{};stroke-width:{}'/>",
        points_attr(points),
        fill,
        stroke,
        num(width)
    )
}

/// Open line with no fill.
pub fn line(points: &[DVec2], stroke: &str, width: f64) -> String {
    polygon(points, "none", stroke, width)
}

/// Tapered ink stroke along `points`.
///
/// The stroke swells towards the middle, and its width wobbles with the
/// noise field sampled on a slice selected by `phase`.
pub fn stroke(
    noise: &dyn NoiseField,
    points: &[DVec2],
    width: f64,
    color: &str,
    phase: f64,
) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let last = points.len() - 1;
    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());

    for (i, p) in points.iter().enumerate() {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(last)];
        let dir = (next - prev).normalize_or_zero();
        let normal = DVec2::new(-dir.y, dir.x);

        let t = i as f64 / last as f64;
        let taper = (t * PI).sin().powf(0.5);
        let wobble = 0.5 + noise.unit(t * 4.0, phase, 0.5);
        let half = width * taper * wobble * 0.5;

        left.push(*p + normal * half);
        right.push(*p - normal * half);
    }

    right.reverse();
    left.extend(right);
    polygon(&left, color, color, 0.0)
}

/// Small filled circle.
pub fn dot(center: DVec2, radius: f64, color: &str) -> String {
    format!(
        "<circle cx='{}' cy='{}' r='{}' style='fill:{}'/>",
        num(center.x),
        num(center.y),
        num(radius),
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::ConstantNoise;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(1.26), "1.3");
        assert_eq!(num(-3.0), "-3.0");
        assert_eq!(num(f64::NAN), "NaN");
    }

    #[test]
    fn test_polygon_markup() {
        let pts = [DVec2::new(0.0, 0.0), DVec2::new(10.0, 5.0)];
        let svg = polygon(&pts, "white", "black", 1.0);
        assert_eq!(
            svg,
            "<polyline points='0.0,0.0 10.0,5.0' style='fill:white;stroke:black;stroke-width:1.0'/>"
        );
    }

    #[test]
    fn test_stroke_needs_two_points() {
        let noise = ConstantNoise(0.0);
        assert!(stroke(&noise, &[DVec2::ZERO], 3.0, "black", 0.0).is_empty());
    }

    #[test]
    fn test_stroke_outline_doubles_points() {
        let noise = ConstantNoise(0.0);
        let pts: Vec<DVec2> = (0..5).map(|i| DVec2::new(i as f64 * 10.0, 0.0)).collect();
        let svg = stroke(&noise, &pts, 4.0, "black", 1.0);
        let attr = svg.split('\'').nth(1).unwrap();
        assert_eq!(attr.split(' ').count(), 10);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_dot_markup() {
        let svg = dot(DVec2::new(1.0, 2.0), 3.0, "red");
        assert!(svg.starts_with("<circle cx='1.0' cy='2.0' r='3.0'"));
    }
}
