use serde::Deserialize;

/// Root configuration for the demo binary.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub producer: ProducerConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Timers and sample ranges for the producing feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProducerConfig {
    /// Interval between temperature samples (default: 3000).
    #[serde(default = "default_temperature_interval_ms")]
    pub temperature_interval_ms: u64,
    /// Interval between greetings (default: 2000).
    #[serde(default = "default_greeting_interval_ms")]
    pub greeting_interval_ms: u64,
    /// Lowest sampled temperature, inclusive (default: -1).
    #[serde(default = "default_temperature_min")]
    pub temperature_min: i32,
    /// Highest sampled temperature, exclusive (default: 40).
    #[serde(default = "default_temperature_max")]
    pub temperature_max: i32,
    /// Greetings picked at random.
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,
}

/// How long the demo runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Stop after this many seconds; 0 runs until Ctrl-C.
    #[serde(default)]
    pub duration_secs: u64,
}

fn default_temperature_interval_ms() -> u64 {
    3000
}

fn default_greeting_interval_ms() -> u64 {
    2000
}

fn default_temperature_min() -> i32 {
    -1
}

fn default_temperature_max() -> i32 {
    40
}

fn default_greetings() -> Vec<String> {
    ["Hello", "Bonjour", "Hola", "Nǐ Hǎo"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            temperature_interval_ms: default_temperature_interval_ms(),
            greeting_interval_ms: default_greeting_interval_ms(),
            temperature_min: default_temperature_min(),
            temperature_max: default_temperature_max(),
            greetings: default_greetings(),
        }
    }
}
