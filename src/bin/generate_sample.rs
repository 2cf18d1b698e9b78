use serde_json::{json, Value};

const FERTILITY_SERIES: &str = "Fertility rate, total (births per woman)";
const GDP_SERIES: &str = "GDP per capita (current US$)";

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

fn main() {
    let mut rng = SimpleRng::new(42);

    // (name, ISO-3 code, 2014 fertility, 2014 GDP per capita, GDP growth/yr)
    let countries: &[(&str, &str, f64, f64, f64)] = &[
        ("Angola", "AGO", 5.9, 5100.0, 0.99),
        ("Australia", "AUS", 1.8, 62500.0, 1.01),
        ("Bangladesh", "BGD", 2.2, 1100.0, 1.06),
        ("Belgium", "BEL", 1.7, 47700.0, 1.02),
        ("Brazil", "BRA", 1.8, 12100.0, 0.98),
        ("Chad", "TCD", 6.3, 1000.0, 1.00),
        ("China", "CHN", 1.6, 7700.0, 1.07),
        ("Egypt", "EGY", 3.4, 3400.0, 1.02),
        ("Ethiopia", "ETH", 4.6, 570.0, 1.08),
        ("France", "FRA", 2.0, 43000.0, 1.01),
        ("Germany", "DEU", 1.5, 48000.0, 1.01),
        ("India", "IND", 2.3, 1570.0, 1.05),
        ("Japan", "JPN", 1.4, 38100.0, 1.00),
        ("Kenya", "KEN", 3.9, 1370.0, 1.04),
        ("Mexico", "MEX", 2.2, 10900.0, 1.01),
        ("Niger", "NER", 7.2, 430.0, 1.02),
        ("Nigeria", "NGA", 5.6, 3200.0, 0.99),
        ("Norway", "NOR", 1.8, 97000.0, 1.00),
        ("United States", "USA", 1.9, 55100.0, 1.03),
        ("Vietnam", "VNM", 2.0, 2050.0, 1.06),
    ];

    let mut rows: Vec<Value> = Vec::new();

    for &(name, code, fertility_2014, gdp_2014, growth) in countries {
        for year in 2014..=2024 {
            let t = (year - 2014) as f64;

            // Fertility drifts slowly downwards; GDP compounds.
            let fertility = (fertility_2014 - 0.04 * t + rng.gauss(0.0, 0.05)).max(0.9);
            let gdp = gdp_2014 * growth.powf(t) * (1.0 + rng.gauss(0.0, 0.03));

            // A few holes, the way real indicator exports have them.
            let fertility = (rng.next_f64() >= 0.04).then_some(fertility);
            let gdp = (rng.next_f64() >= 0.04).then_some(gdp);

            let mut fertility_row = json!({
                "Country Name": name,
                "Country Code": code,
                "Year": year,
                "Series Name_y": FERTILITY_SERIES,
            });
            if let Some(f) = fertility {
                fertility_row["Fertility Rate"] = json!(round2(f));
            }
            rows.push(fertility_row);

            let mut gdp_row = json!({
                "Country Name": name,
                "Country Code": code,
                "Year": year,
                "Series Name_y": GDP_SERIES,
            });
            if let Some(f) = fertility {
                gdp_row["Fertility Rate"] = json!(round2(f));
            }
            if let Some(g) = gdp {
                gdp_row["GDP"] = json!(round2(g));
            }
            rows.push(gdp_row);
        }
    }

    let output_path = "fertility_gdp_2014_2024.json";
    let text = serde_json::to_string_pretty(&rows).expect("Failed to serialize rows");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!(
        "Wrote {} rows ({} countries × 11 years × 2 series) to {output_path}",
        rows.len(),
        countries.len()
    );
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
