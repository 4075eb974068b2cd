//! Command-line configuration for the simulator binary.

use crate::scheduler::{PolicyKind, SelectionStrategy, Ticks, DEFAULT_TIME_QUANTUM};
use clap::{App, Arg, ArgMatches};
use std::{path::PathBuf, time::Duration};

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Process file; the built-in demo set is used when absent.
    pub input: Option<PathBuf>,
    pub policy: PolicyKind,
    pub selection: SelectionStrategy,
    /// Delay between replayed segments in the terminal UI.
    pub tick_rate: Duration,
    /// Print the results instead of replaying them in the terminal UI.
    pub headless: bool,
    pub verbosity: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: None,
            policy: PolicyKind::ShortestJobFirst,
            selection: SelectionStrategy::Heap,
            tick_rate: DEFAULT_TICK_RATE,
            headless: false,
            verbosity: 0,
        }
    }
}

impl SimulationConfig {
    pub fn from_args() -> Self {
        Self::from_matches(&app().get_matches())
    }

    pub fn from_arg_list<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(&app().get_matches_from_safe(args)?))
    }

    // Every value below already passed its validator.
    fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();

        let time_quantum = matches
            .value_of("quantum")
            .and_then(|value| value.parse::<Ticks>().ok())
            .unwrap_or(DEFAULT_TIME_QUANTUM);

        let policy = match matches.value_of("policy") {
            Some("priority") => PolicyKind::Priority,
            Some("rr") => PolicyKind::RoundRobin { time_quantum },
            _ => defaults.policy,
        };

        Self {
            input: matches.value_of("input").map(PathBuf::from),
            policy,
            selection: matches
                .value_of("selection")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.selection),
            tick_rate: matches
                .value_of("tick-ms")
                .and_then(|value| value.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_rate),
            headless: matches.is_present("headless"),
            verbosity: matches.occurrences_of("verbose"),
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("cpu-scheduling-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates SJF, priority and round-robin CPU scheduling")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Process file, one `burst arrival priority` triple per line"),
        )
        .arg(
            Arg::with_name("policy")
                .short("p")
                .long("policy")
                .takes_value(true)
                .possible_values(&["sjf", "priority", "rr"])
                .default_value("sjf")
                .help("Scheduling policy"),
        )
        .arg(
            Arg::with_name("quantum")
                .short("q")
                .long("quantum")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(valid_integer)
                .help("Time quantum for round robin"),
        )
        .arg(
            Arg::with_name("selection")
                .long("selection")
                .takes_value(true)
                .possible_values(&["heap", "linear"])
                .default_value("heap")
                .help("Selection mechanism for SJF and priority scheduling"),
        )
        .arg(
            Arg::with_name("tick-ms")
                .long("tick-ms")
                .takes_value(true)
                .validator(valid_millis)
                .help("Milliseconds between replayed segments"),
        )
        .arg(
            Arg::with_name("headless")
                .long("headless")
                .help("Print the results table instead of starting the terminal UI"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase log verbosity"),
        )
}

fn valid_integer(value: String) -> Result<(), String> {
    value
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| format!("Invalid integer: {}", value))
}

fn valid_millis(value: String) -> Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("Invalid number of milliseconds: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_arg_list(["cpu-scheduling-sim"]).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_round_robin_with_quantum() {
        let config = SimulationConfig::from_arg_list([
            "cpu-scheduling-sim",
            "--policy",
            "rr",
            "-q",
            "4",
            "--headless",
            "-vv",
        ])
        .unwrap();

        assert_eq!(config.policy, PolicyKind::RoundRobin { time_quantum: 4 });
        assert!(config.headless);
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn test_non_positive_quantum_reaches_the_engine() {
        let args = ["cpu-scheduling-sim", "-p", "rr", "-q", "-3"];
        let config = SimulationConfig::from_arg_list(args).unwrap();
        assert_eq!(config.policy, PolicyKind::RoundRobin { time_quantum: -3 });
    }

    #[test]
    fn test_input_and_selection() {
        let config = SimulationConfig::from_arg_list([
            "cpu-scheduling-sim",
            "-i",
            "procs.txt",
            "-p",
            "priority",
            "--selection",
            "linear",
            "--tick-ms",
            "50",
        ])
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("procs.txt")));
        assert_eq!(config.policy, PolicyKind::Priority);
        assert_eq!(config.selection, SelectionStrategy::LinearScan);
        assert_eq!(config.tick_rate, Duration::from_millis(50));
    }

    #[test]
    fn test_rejects_unknown_policy_and_bad_quantum() {
        let rejected = [
            ["cpu-scheduling-sim", "-p", "fifo"],
            ["cpu-scheduling-sim", "-q", "two"],
            ["cpu-scheduling-sim", "--tick-ms", "-5"],
        ];
        for args in rejected {
            assert!(SimulationConfig::from_arg_list(args).is_err());
        }
    }
}
