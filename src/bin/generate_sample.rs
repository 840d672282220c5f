//! Writes a small synthetic `winequality-red.csv` so the analysis pipeline
//! can be exercised without downloading the published dataset.

const HEADER: [&str; 12] = [
    "fixed acidity",
    "volatile acidity",
    "citric acid",
    "residual sugar",
    "chlorides",
    "free sulfur dioxide",
    "total sulfur dioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
    "quality",
];

/// Rows per quality label, roughly matching the real dataset's imbalance.
const LABEL_COUNTS: [(i64, usize); 6] = [(3, 4), (4, 20), (5, 250), (6, 230), (7, 70), (8, 6)];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthetic sample around typical red-wine values; alcohol and acidity
/// drift with the quality label so the charts have visible structure.
fn sample_row(rng: &mut SimpleRng, quality: i64) -> Vec<String> {
    let q = quality as f64;
    let alcohol = rng.gauss(8.6 + 0.45 * (q - 3.0), 0.45).max(8.0);
    let volatile = rng.gauss(0.95 - 0.08 * (q - 3.0), 0.08).max(0.1);
    vec![
        format!("{:.1}", rng.gauss(8.3, 1.6).max(4.5)),
        format!("{volatile:.3}"),
        format!("{:.2}", rng.gauss(0.27, 0.18).clamp(0.0, 1.0)),
        format!("{:.1}", rng.gauss(2.5, 1.2).max(0.9)),
        format!("{:.3}", rng.gauss(0.087, 0.03).max(0.012)),
        format!("{:.0}", rng.gauss(15.9, 9.0).max(1.0)),
        format!("{:.0}", rng.gauss(46.0, 30.0).max(6.0)),
        format!("{:.5}", rng.gauss(0.9967, 0.0018)),
        format!("{:.2}", rng.gauss(3.31, 0.15)),
        format!("{:.2}", rng.gauss(0.66, 0.16).max(0.33)),
        format!("{alcohol:.1}"),
        format!("{quality}"),
    ]
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "winequality-red.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer.write_record(HEADER).expect("Failed to write header");

    let mut rows = 0usize;
    for &(quality, count) in &LABEL_COUNTS {
        for _ in 0..count {
            writer
                .write_record(sample_row(&mut rng, quality))
                .expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} samples to {output_path}");
}
