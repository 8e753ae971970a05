use serde_json::{json, Value as JsonValue};

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

const NOMINAL_CAPACITY_AH: f64 = 5.0;
const CUTOFF_VOLTAGE: f64 = 2.5;
const STEPS: usize = 50;

/// Open-circuit voltage of a generic NMC cell at a state of charge in [0, 1].
fn ocv(soc: f64) -> f64 {
    3.2 + 0.9 * soc - 0.4 * (-12.0 * soc).exp()
}

/// One constant-current discharge down to the cutoff voltage.
fn simulate(c_rate: f64, temperature: f64, rng: &mut SimpleRng) -> JsonValue {
    // Resistance grows in the cold and available capacity shrinks with rate.
    let resistance = 0.02 * (1.0 + (25.0 - temperature).max(0.0) / 20.0);
    let usable = NOMINAL_CAPACITY_AH
        * (1.0 - 0.04 * (c_rate - 1.0).max(0.0))
        * (1.0 - 0.005 * (25.0 - temperature).max(0.0));
    let current = c_rate * NOMINAL_CAPACITY_AH;
    let duration_s = usable / current * 3600.0;

    let mut time = Vec::with_capacity(STEPS);
    let mut voltage = Vec::with_capacity(STEPS);
    let mut capacity = Vec::with_capacity(STEPS);
    let mut currents = Vec::with_capacity(STEPS);
    let mut energy_wh = 0.0;

    for i in 0..STEPS {
        let t = duration_s * i as f64 / (STEPS - 1) as f64;
        let q = current * t / 3600.0;
        let soc = (1.0 - q / usable).clamp(0.0, 1.0);
        let v = (ocv(soc) - current * resistance + rng.gauss(0.0, 0.002)).max(CUTOFF_VOLTAGE);

        if let (Some(&prev_t), Some(&prev_v)) = (time.last(), voltage.last()) {
            let dt_h = (t - prev_t) / 3600.0;
            energy_wh += current * 0.5 * (v + prev_v) * dt_h;
        }

        time.push(t);
        voltage.push(v);
        capacity.push(q);
        currents.push(current);
    }

    json!({
        "parameters": {
            "C-rate": c_rate,
            "Temperature [°C]": temperature,
            "Nominal cell capacity [A.h]": NOMINAL_CAPACITY_AH,
        },
        "outputs": {
            "Time [s]": time,
            "Voltage [V]": voltage,
            "Capacity [A.h]": capacity,
            "Current [A]": currents,
        },
        "metrics": {
            "Capacity [Ah]": usable,
            "Energy [Wh]": energy_wh,
        },
    })
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let c_rates = [0.5, 1.0, 2.0];
    let temperatures = [0.0, 25.0, 45.0];

    let mut results = Vec::new();
    for &temperature in &temperatures {
        for &c_rate in &c_rates {
            results.push(simulate(c_rate, temperature, &mut rng));
        }
    }

    let output_dir = std::path::Path::new("public");
    std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
    let output_path = output_dir.join("results.json");
    let file = std::fs::File::create(&output_path).expect("Failed to create output file");
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &results)
        .expect("Failed to write results");

    println!(
        "Wrote {} results ({STEPS} steps each) to {}",
        results.len(),
        output_path.display()
    );
}
