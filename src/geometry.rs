//! Stateless polygon and point helpers shared by the generation stages.

use std::cmp::Ordering;

use crate::model::Point;

/// Arithmetic mean of the vertices. Degenerate input is tolerated: an empty
/// slice yields the origin rather than NaN.
pub fn centroid(vertices: &[Point]) -> Point {
    if vertices.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for v in vertices {
        sum_x += v.x;
        sum_y += v.y;
    }
    let n = vertices.len() as f64;
    Point::new(sum_x / n, sum_y / n)
}

pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// 2D cross product of the vectors a->b and a->c. Positive for a left turn,
/// negative for a right turn, zero when collinear.
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Convex hull via Graham scan: anchor at the lowest point (ties broken by
/// smallest x), sort the rest by polar angle around it (ties broken by
/// nearer distance first), then sweep, popping anything that fails to make a
/// strict left turn. Fewer than 3 points are returned unchanged.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    let mut low = 0;
    for i in 1..sorted.len() {
        if sorted[i].y < sorted[low].y || (sorted[i].y == sorted[low].y && sorted[i].x < sorted[low].x)
        {
            low = i;
        }
    }
    sorted.swap(0, low);
    let anchor = sorted[0];

    sorted[1..].sort_by(|a, b| {
        let angle_a = (a.y - anchor.y).atan2(a.x - anchor.x);
        let angle_b = (b.y - anchor.y).atan2(b.x - anchor.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                let dist_a = (a.x - anchor.x).powi(2) + (a.y - anchor.y).powi(2);
                let dist_b = (b.x - anchor.x).powi(2) + (b.y - anchor.y).powi(2);
                dist_a.partial_cmp(&dist_b).unwrap_or(Ordering::Equal)
            })
    });

    let mut hull = vec![sorted[0], sorted[1]];
    for &p in &sorted[2..] {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// Ray-casting point-in-polygon test.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        if (yi > point.y) != (yj > point.y)
            && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
