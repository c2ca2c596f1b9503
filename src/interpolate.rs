use egui::{Pos2, pos2};

use crate::raster::Shape;

/// Bridges two consecutive drag samples with a single filled polygon.
///
/// A fast drag can move many pixels between samples; stamping only at the
/// new sample would leave gaps. The returned hexagon is the convex hull of
/// the two square stamps of half-width `half` centered at `from` and `to`,
/// so filling it is equivalent to stamping at every point of the segment
/// between them. When `from == to` it degenerates to the single stamp.
///
/// The result is symmetric in `from`/`to` as a filled-pixel set.
pub fn bridge(from: Pos2, to: Pos2, half: f32) -> Shape {
    // Normalize so `from` is the upper sample; the union is symmetric.
    let (from, to) = if from.y > to.y { (to, from) } else { (from, to) };

    let points = if from.x <= to.x {
        // Bridge the top/left corners of `from` to the bottom/right of `to`.
        vec![
            pos2(from.x - half, from.y - half),
            pos2(from.x + half, from.y - half),
            pos2(to.x + half, to.y - half),
            pos2(to.x + half, to.y + half),
            pos2(to.x - half, to.y + half),
            pos2(from.x - half, from.y + half),
        ]
    } else {
        // Mirror case: top/right of `from` down to bottom/left of `to`.
        vec![
            pos2(from.x - half, from.y - half),
            pos2(from.x + half, from.y - half),
            pos2(from.x + half, from.y + half),
            pos2(to.x + half, to.y + half),
            pos2(to.x - half, to.y + half),
            pos2(to.x - half, to.y - half),
        ]
    };
    Shape::Polygon(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Shape, fill_shape};
    use egui::Color32;

    const W: usize = 20;
    const H: usize = 20;

    fn rasterize(shape: &Shape) -> Vec<bool> {
        let mut pixels = vec![Color32::WHITE; W * H];
        fill_shape(&mut pixels, W, H, shape, Color32::BLACK);
        pixels.iter().map(|c| *c == Color32::BLACK).collect()
    }

    #[test]
    fn coincident_samples_reduce_to_the_stamp() {
        let p = pos2(7.5, 7.5);
        let bridged = rasterize(&bridge(p, p, 1.5));
        let stamped = rasterize(&Shape::stamp(p, 3.0));
        assert_eq!(bridged, stamped);
    }

    #[test]
    fn bridging_is_symmetric() {
        let cases = [
            (pos2(2.5, 3.5), pos2(12.5, 9.5)),  // from.x <= to.x
            (pos2(14.5, 2.5), pos2(4.5, 11.5)), // from.x > to.x
            (pos2(3.5, 10.5), pos2(15.5, 10.5)), // horizontal
            (pos2(6.5, 2.5), pos2(6.5, 16.5)),  // vertical
        ];
        for (a, b) in cases {
            assert_eq!(rasterize(&bridge(a, b, 1.0)), rasterize(&bridge(b, a, 1.0)), "{a:?} <-> {b:?}");
        }
    }

    #[test]
    fn horizontal_bridge_leaves_no_gaps() {
        let set = rasterize(&bridge(pos2(2.5, 5.5), pos2(16.5, 5.5), 0.5));
        for x in 2..=16 {
            assert!(set[5 * W + x], "gap at x={x}");
        }
    }

    #[test]
    fn diagonal_bridge_contains_both_stamps() {
        let a = pos2(3.5, 3.5);
        let b = pos2(14.5, 12.5);
        let bridged = rasterize(&bridge(a, b, 1.0));
        for stamp in [a, b] {
            let stamped = rasterize(&Shape::stamp(stamp, 2.0));
            for i in 0..W * H {
                assert!(!stamped[i] || bridged[i], "stamp pixel {i} missing from bridge");
            }
        }
    }
}
