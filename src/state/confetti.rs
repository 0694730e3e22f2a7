// Confetti particle descriptors. Motion itself is CSS; this only picks the
// per-particle parameters from a caller-supplied random source in [0, 1).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfettiShape {
    Heart,
    Square,
    Circle,
    Triangle,
}

const SHAPES: [ConfettiShape; 4] = [
    ConfettiShape::Heart,
    ConfettiShape::Square,
    ConfettiShape::Circle,
    ConfettiShape::Triangle,
];

pub const PALETTE: [&str; 12] = [
    "#ff69b4", "#ff1493", "#ff0000", "#ff4500", "#9370db", "#4169e1", "#ffd700", "#ff6b6b",
    "#4facfe", "#00f2fe", "#cd853f", "#da70d6",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub start_x: f64,
    /// Negative: particles start above the top edge.
    pub start_y: f64,
    pub sway: f64,
    pub rotation_deg: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub color: &'static str,
    pub shape: ConfettiShape,
}

fn pick<T: Copy>(items: &[T], r: f64) -> T {
    let i = ((r * items.len() as f64) as usize).min(items.len() - 1);
    items[i]
}

pub fn spawn_particles(count: u32, width: f64, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            start_x: rng() * width,
            start_y: -20.0 - rng() * 100.0,
            sway: (rng() - 0.5) * width * 0.8,
            rotation_deg: rng() * 360.0,
            duration_ms: 2000 + (rng() * 1000.0) as u32,
            delay_ms: i * 10, // stagger
            color: pick(&PALETTE, rng()),
            shape: pick(&SHAPES, rng()),
        })
        .collect()
}
