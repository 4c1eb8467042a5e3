use crate::render::{Canvas, RenderError, ACCENT, GRID, INK};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 260;
const SPHERE_R: f32 = 88.0;
// Oblique projection factor for the y axis (depth).
const DEPTH_SKEW: f32 = 0.35;

/// One Bloch sphere per qubit, drawn as an oblique projection with the
/// reduced-state vector in red. Entangled qubits sit at the origin.
pub fn render_bloch(vectors: &[[f64; 3]; 2]) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let centers = [(128.0f32, 122.0f32), (352.0f32, 122.0f32)];

    for (qubit, (&(cx, cy), vector)) in centers.iter().zip(vectors.iter()).enumerate() {
        canvas.circle_outline(cx, cy, SPHERE_R, INK);
        // Equator ellipse.
        let steps = 96;
        for step in 0..steps {
            let angle = std::f32::consts::TAU * step as f32 / steps as f32;
            let (px, py) = project(cx, cy, angle.cos(), angle.sin(), 0.0);
            canvas.disc(px, py, 0.5, GRID);
        }
        // Axes: x to the right, y into the page, z up.
        let (xx, xy) = project(cx, cy, 1.0, 0.0, 0.0);
        let (yx, yy) = project(cx, cy, 0.0, 1.0, 0.0);
        let (zx, zy) = project(cx, cy, 0.0, 0.0, 1.0);
        canvas.line(cx, cy, xx, xy, GRID);
        canvas.line(cx, cy, yx, yy, GRID);
        canvas.line(cx, cy, zx, zy, GRID);

        let [x, y, z] = *vector;
        let norm = (x * x + y * y + z * z).sqrt();
        if norm < 1e-6 {
            // Maximally mixed reduction: mark the origin.
            canvas.disc(cx, cy, 4.0, ACCENT);
        } else {
            let (tx, ty) = project(cx, cy, x as f32, y as f32, z as f32);
            canvas.line(cx, cy, tx, ty, ACCENT);
            canvas.disc(tx, ty, 4.0, ACCENT);
        }

        // Qubit label beneath the sphere.
        let glyph_h = 14.0;
        canvas.glyph('q', cx - glyph_h, cy + SPHERE_R + 14.0, glyph_h, INK);
        canvas.glyph(
            if qubit == 0 { '0' } else { '1' },
            cx + 2.0,
            cy + SPHERE_R + 14.0,
            glyph_h,
            INK,
        );
    }

    canvas.into_png()
}

fn project(cx: f32, cy: f32, x: f32, y: f32, z: f32) -> (f32, f32) {
    (
        cx + SPHERE_R * (x - DEPTH_SKEW * y),
        cy - SPHERE_R * (z - DEPTH_SKEW * y * 0.6),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{assert_png_dimensions, has_ink};

    #[test]
    fn renders_decodable_png_with_expected_dimensions() {
        let bytes = render_bloch(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
        assert_png_dimensions(&bytes, WIDTH, HEIGHT);
        assert!(has_ink(&bytes));
    }

    #[test]
    fn renders_nonzero_vectors() {
        let bytes = render_bloch(&[[1.0, 0.0, 0.0], [0.0, 0.0, -1.0]]).unwrap();
        assert!(has_ink(&bytes));
    }
}
