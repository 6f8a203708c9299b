pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod report {
    /// Seconds beyond which a single test is flagged as slow.
    pub const DEFAULT_SLOW_THRESHOLD: f64 = 0.5;
}
