//! Command-line and environment configuration.

use crate::error::CafeError;
use crate::order_actor::{
    AccuracyPolicy, EarlyCompletionPolicy, GenerationGate, PredictionPolicy, QueueSettings,
};
use chrono::{FixedOffset, TimeDelta};
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateKind {
    /// Generate at most once per interval.
    Interval,
    /// Generate with a fixed probability on every poll.
    Probability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PredictionKind {
    /// Each order starts brewing after the one in front.
    Chained,
    /// Each order starts brewing when it is placed.
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccuracyKind {
    /// Early and late count the same.
    Symmetric,
    /// Only lateness lowers accuracy.
    LatenessOnly,
}

/// Café order-queue simulator.
#[derive(Parser, Debug, Clone)]
#[command(name = "cafe-queue")]
#[command(about = "Simulated café order queue with completion-time predictions")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "CAFE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Directory holding index.html and the other frontend files
    #[arg(long, env = "CAFE_STATIC_DIR", default_value = "frontend")]
    pub static_dir: PathBuf,

    /// Fixed UTC offset, in whole hours, of every timestamp the café produces
    #[arg(long, env = "CAFE_UTC_OFFSET_HOURS", default_value = "9", allow_negative_numbers = true)]
    pub utc_offset_hours: i32,

    /// How polls decide whether to generate an order
    #[arg(long, env = "CAFE_GATE", value_enum, default_value = "interval")]
    pub gate: GateKind,

    /// Minimum seconds between generated orders (interval gate)
    #[arg(long, env = "CAFE_GENERATION_INTERVAL_SECS", default_value = "5")]
    pub generation_interval_secs: u64,

    /// Chance that a poll generates an order (probability gate)
    #[arg(long, env = "CAFE_GENERATION_PROBABILITY", default_value = "0.3")]
    pub generation_probability: f64,

    /// How completion times are predicted
    #[arg(long, env = "CAFE_PREDICTION", value_enum, default_value = "chained")]
    pub prediction: PredictionKind,

    /// How each completion is scored in the summary
    #[arg(long, env = "CAFE_ACCURACY", value_enum, default_value = "symmetric")]
    pub accuracy: AccuracyKind,

    /// Deviation in seconds at which an order scores zero accuracy
    #[arg(long, env = "CAFE_TOLERANCE_SECS", default_value = "180")]
    pub tolerance_secs: f64,

    /// Leave early completions out of the summary
    #[arg(long, env = "CAFE_DISCARD_EARLY")]
    pub discard_early_completions: bool,

    /// Start generating orders without waiting for POST /start
    #[arg(long, env = "CAFE_AUTO_START")]
    pub auto_start: bool,

    /// Seed for the order generator; random when absent
    #[arg(long, env = "CAFE_SEED")]
    pub seed: Option<u64>,

    /// Request buffer size of the café actor
    #[arg(long, default_value = "32")]
    pub channel_capacity: usize,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, env = "CAFE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct CafeConfig {
    pub bind: SocketAddr,
    pub static_dir: PathBuf,
    pub offset: FixedOffset,
    pub settings: QueueSettings,
    pub seed: Option<u64>,
    pub channel_capacity: usize,
}

impl Args {
    pub fn into_config(self) -> Result<CafeConfig, CafeError> {
        let offset = self
            .utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                CafeError::Config(format!(
                    "UTC offset of {} hours is out of range",
                    self.utc_offset_hours
                ))
            })?;

        let gate = match self.gate {
            GateKind::Interval => {
                let secs = i64::try_from(self.generation_interval_secs)
                    .ok()
                    .and_then(TimeDelta::try_seconds)
                    .ok_or_else(|| {
                        CafeError::Config(format!(
                            "Generation interval of {}s is out of range",
                            self.generation_interval_secs
                        ))
                    })?;
                GenerationGate::Interval(secs)
            }
            GateKind::Probability => {
                let p = self.generation_probability;
                if !(0.0..=1.0).contains(&p) {
                    return Err(CafeError::Config(format!(
                        "Generation probability must be within [0, 1], got {}",
                        p
                    )));
                }
                GenerationGate::Probability(p)
            }
        };

        if !self.tolerance_secs.is_finite() || self.tolerance_secs <= 0.0 {
            return Err(CafeError::Config(format!(
                "Tolerance must be a positive number of seconds, got {}",
                self.tolerance_secs
            )));
        }

        let settings = QueueSettings {
            gate,
            prediction: match self.prediction {
                PredictionKind::Chained => PredictionPolicy::Chained,
                PredictionKind::Independent => PredictionPolicy::Independent,
            },
            early_completions: if self.discard_early_completions {
                EarlyCompletionPolicy::Discard
            } else {
                EarlyCompletionPolicy::Record
            },
            accuracy: match self.accuracy {
                AccuracyKind::Symmetric => AccuracyPolicy::Symmetric,
                AccuracyKind::LatenessOnly => AccuracyPolicy::LatenessOnly,
            },
            tolerance_seconds: self.tolerance_secs,
            start_operating: self.auto_start,
        };

        Ok(CafeConfig {
            bind: SocketAddr::new(self.host, self.port),
            static_dir: self.static_dir,
            offset,
            settings,
            seed: self.seed,
            channel_capacity: self.channel_capacity,
        })
    }
}
