/// One trigonometric octave: `(sin(x * frequency) + cos(z * frequency)) * amplitude`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseOctave {
    pub frequency: f64,
    pub amplitude: f64,
}

impl NoiseOctave {
    pub const fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    #[inline]
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        ((x * self.frequency).sin() + (z * self.frequency).cos()) * self.amplitude
    }
}

/// Rolling hills used on every island interior
pub const HILL_OCTAVES: [NoiseOctave; 2] = [NoiseOctave::new(0.01, 10.0), NoiseOctave::new(0.03, 5.0)];

/// Deterministic hill noise at a world position. No seed, no state.
#[inline]
pub fn hill_noise(x: f64, z: f64) -> f64 {
    HILL_OCTAVES
        .iter()
        .fold(0.0, |acc, octave| acc + octave.sample(x, z))
}
