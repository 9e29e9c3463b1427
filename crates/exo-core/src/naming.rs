use rand::prelude::*;

const PREFIXES: &[&str] = &[
    "Aegis", "Nova", "Vortex", "Titan", "Ion", "Zenith", "Helix", "Quantum",
];
const MIDDLES: &[&str] = &[
    "Prime", "Arc", "Pulse", "Core", "Specter", "Sentinel", "Flux", "Strata",
];
const MODELS: &[&str] = &["X7", "MK-II", "9", "VX", "ALPHA", "7R", "NOVA", "R3"];

const MIDDLE_PROBABILITY: f64 = 0.65;
const VERSION_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random suit designations, reproducible from a seed.
pub struct SuitNamer {
    rng: StdRng,
}

impl SuitNamer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS / browser entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// `Prefix[ Middle]-Model`, e.g. `Nova Flux-MK-II`.
    pub fn suit_name(&mut self) -> String {
        let prefix = PREFIXES.choose(&mut self.rng).copied().unwrap_or("Nova");
        let model = MODELS.choose(&mut self.rng).copied().unwrap_or("X7");
        let base = if self.rng.gen_bool(MIDDLE_PROBABILITY) {
            let middle = MIDDLES.choose(&mut self.rng).copied().unwrap_or("Core");
            format!("{} {}", prefix, middle)
        } else {
            prefix.to_string()
        };
        format!("{}-{}", base, model)
    }

    /// Six uppercase base-36 characters.
    pub fn version_id(&mut self) -> String {
        (0..VERSION_LEN)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}
