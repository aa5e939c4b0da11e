//! Check command: print the resolved configuration.

use crate::config::AppConfig;

/// Runs the check command.
pub fn run(config: &AppConfig) {
    println!("{}", describe(config));
}

fn describe(config: &AppConfig) -> String {
    let generator = &config.generator;
    let seed = generator
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());
    format!(
        "randarray v{}\nlog_level: {}\nlayout:    {}\ndelay:     {:?}\nseed:      {}",
        array_core::VERSION,
        config.log_level,
        generator.layout,
        generator.workload().duration(),
        seed
    )
}
