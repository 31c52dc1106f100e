//! Point rasterization for 2D primitives

use glam::IVec2;

/// Pixels covered by a filled circle.
///
/// Walks the `2r x 2r` box around the centre, keeping offsets with
/// `dx² + dy² <= r²`. Offsets run over `(-r, r]` on each axis.
pub fn filled_circle(center: IVec2, radius: i32) -> Vec<IVec2> {
    if radius <= 0 {
        return Vec::new();
    }

    let diameter = radius * 2;
    let mut points = Vec::with_capacity((diameter * diameter) as usize);
    for w in 0..diameter {
        for h in 0..diameter {
            let dx = radius - w;
            let dy = radius - h;
            if dx * dx + dy * dy <= radius * radius {
                points.push(IVec2::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}
