//! Headless frame trace of the binary.
//! Steps the simulation at a fixed frame rate and prints one row per sampled frame.
//!
//! Usage: trace [--frames N] [--fps F] [--every K] [key=value ...]
//! e.g.   trace --frames 600 orbitalInclination=30 timeSpeed=5

use pulsar_core::SetParameter;
use pulsar_physics::orbit;
use pulsar_sim::BinarySystem;
use std::f64::consts::TAU;

struct TraceOptions {
    frames: u32,
    fps: f64,
    every: u32,
    edits: Vec<SetParameter>,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            frames: 240,
            fps: 60.0,
            every: 20,
            edits: Vec::new(),
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<TraceOptions, String> {
    let mut opts = TraceOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" | "--fps" | "--every" => {
                let raw = args.next().ok_or_else(|| format!("{arg} needs a value"))?;
                match arg.as_str() {
                    "--frames" => opts.frames = raw.parse().map_err(|e| format!("--frames: {e}"))?,
                    "--every" => opts.every = raw.parse().map_err(|e| format!("--every: {e}"))?,
                    _ => opts.fps = raw.parse().map_err(|e| format!("--fps: {e}"))?,
                }
            }
            _ => {
                let (key, value) = arg
                    .split_once('=')
                    .ok_or_else(|| format!("expected key=value, got `{arg}`"))?;
                let value: f64 = value.parse().map_err(|e| format!("{key}: {e}"))?;
                opts.edits
                    .push(SetParameter::from_key(key, value).map_err(|e| e.to_string())?);
            }
        }
    }

    if !(opts.fps.is_finite() && opts.fps > 0.0) {
        return Err("--fps must be positive".into());
    }
    opts.every = opts.every.max(1);
    Ok(opts)
}

fn main() {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut system = BinarySystem::default();
    for edit in &opts.edits {
        if let Err(e) = system.apply(*edit) {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }

    let p = system.params();
    let period = orbit::orbital_period(p.total_mass()).unwrap_or(f64::NAN);
    println!(
        "pulsar {:.2} M☉ r={:.3} | companion {:.2} M☉ r={:.3} | period {:.2}s | incl {:.1}°",
        p.pulsar_mass(),
        p.pulsar_orbit_radius(),
        p.companion_mass(),
        p.companion_orbit_radius(),
        period,
        p.orbital_inclination(),
    );
    println!(
        "{:>6} {:>9} {:>8} {:>26} {:>26} {:>8}",
        "frame", "t_sim", "phase°", "pulsar (x, y, z)", "companion (x, y, z)", "spin"
    );

    let dt = 1.0 / opts.fps;
    for frame in 1..=opts.frames {
        let elapsed = frame as f64 * dt;
        let f = match system.tick(dt, elapsed) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("frame {frame}: {e}");
                std::process::exit(1);
            }
        };
        if frame % opts.every != 0 {
            continue;
        }
        let a = f.pulsar.translation;
        let b = f.companion.translation;
        println!(
            "{:>6} {:>9.3} {:>8.2} ({:>7.3}, {:>7.3}, {:>7.3}) ({:>7.3}, {:>7.3}, {:>7.3}) {:>8.3}",
            frame,
            f.sim_time,
            f.orbital_phase.rem_euclid(TAU).to_degrees(),
            a.x,
            a.y,
            a.z,
            b.x,
            b.y,
            b.z,
            f.spin_angle / TAU,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_core::ParameterName;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_defaults() {
        let opts = parse_args(args(&[])).unwrap();
        assert_eq!(opts.frames, 240);
        assert!(opts.edits.is_empty());
    }

    #[test]
    fn test_parse_edits_and_flags() {
        let opts = parse_args(args(&["--frames", "10", "timeSpeed=5", "pulsarMass=2"])).unwrap();
        assert_eq!(opts.frames, 10);
        assert_eq!(
            opts.edits,
            vec![
                SetParameter::new(ParameterName::TimeSpeed, 5.0),
                SetParameter::new(ParameterName::PulsarMass, 2.0),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = parse_args(args(&["warpFactor=5"])).err().unwrap();
        assert!(err.contains("warpFactor"));
        assert!(parse_args(args(&["--fps", "0"])).is_err());
        assert!(parse_args(args(&["nonsense"])).is_err());
    }
}
