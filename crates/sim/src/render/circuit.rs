use crate::circuit::Gate;
use crate::render::{Canvas, RenderError, BACKGROUND, INK};

const HEIGHT: u32 = 220;
const WIRE_Y: [f32; 2] = [70.0, 150.0];
const LEFT_PAD: f32 = 64.0;
const COLUMN_W: f32 = 68.0;
const RIGHT_PAD: f32 = 40.0;
const BOX: f32 = 34.0;

/// Circuit diagram: one column per gate plus a trailing measurement column,
/// drawn over two horizontal wires.
pub fn render_circuit(gates: &[Gate]) -> Result<Vec<u8>, RenderError> {
    // Gate columns + measurement column.
    let columns = gates.len() + 1;
    let width = (LEFT_PAD + COLUMN_W * columns as f32 + RIGHT_PAD) as u32;
    let mut canvas = Canvas::new(width, HEIGHT);

    for (qubit, &wire_y) in WIRE_Y.iter().enumerate() {
        canvas.line(LEFT_PAD - 24.0, wire_y, width as f32 - 16.0, wire_y, INK);
        let glyph_h = 13.0;
        canvas.glyph('q', 14.0, wire_y - glyph_h / 2.0, glyph_h, INK);
        canvas.glyph(
            if qubit == 0 { '0' } else { '1' },
            14.0 + glyph_h,
            wire_y - glyph_h / 2.0,
            glyph_h,
            INK,
        );
    }

    for (col, gate) in gates.iter().enumerate() {
        let x = LEFT_PAD + COLUMN_W * (col as f32 + 0.5);
        match gate {
            Gate::H(q) => gate_box(&mut canvas, x, WIRE_Y[*q as usize], 'H'),
            Gate::X(q) => gate_box(&mut canvas, x, WIRE_Y[*q as usize], 'X'),
            Gate::Z(q) => gate_box(&mut canvas, x, WIRE_Y[*q as usize], 'Z'),
            Gate::Cx { control, target } => {
                let control_y = WIRE_Y[*control as usize];
                let target_y = WIRE_Y[*target as usize];
                canvas.line(x, control_y, x, target_y, INK);
                canvas.disc(x, control_y, 5.0, INK);
                // CNOT target: circle with crosshair.
                let r = 12.0;
                canvas.disc(x, target_y, r, BACKGROUND);
                canvas.circle_outline(x, target_y, r, INK);
                canvas.line(x - r, target_y, x + r, target_y, INK);
                canvas.line(x, target_y - r, x, target_y + r, INK);
            }
        }
    }

    let measure_x = LEFT_PAD + COLUMN_W * (gates.len() as f32 + 0.5);
    for &wire_y in &WIRE_Y {
        gate_box(&mut canvas, measure_x, wire_y, 'M');
    }

    canvas.into_png()
}

fn gate_box(canvas: &mut Canvas, cx: f32, cy: f32, label: char) {
    canvas.fill_rect(cx - BOX / 2.0, cy - BOX / 2.0, BOX, BOX, BACKGROUND);
    canvas.rect_outline(cx - BOX / 2.0, cy - BOX / 2.0, BOX, BOX, INK);
    let glyph_h = BOX * 0.5;
    let glyph_w = glyph_h * 0.7;
    canvas.glyph(label, cx - glyph_w / 2.0, cy - glyph_h / 2.0, glyph_h, INK);
}
