use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Banner printed above the built-in song.
pub const BUILTIN_BANNER: &[&str] = &[
    r"",
    r"  __   __ ___   _  _  _____ ",
    r"  \ \ / // _ \ | \| ||_   _|",
    r"   \ V /| (_) || .` |  | |  ",
    r"    |_|  \___/ |_|\_|  |_|  ",
    r"",
    r"    ~ Sai Seng Zawm Fah [ ၼ မ်ႉတႃ ယို င်ႈ ႁူၺ်ႇ ] ~",
];

/// Built-in song as (text, start delay, per-cluster delay) in seconds.
const BUILTIN_LINES: &[(&str, f64, f64)] = &[
    ("ၵေႃႉလႆႈ ၶၢမ်ႇ ၼႆႉ မၢၵ်ႇ ႁူဝ် ၸႂ် ပဵၼ် ၾႆး ယူႇ", 0.2, 0.14),
    ("\nၸူႉ ၶႂ်ႈ ပၢႆႊ ႁူႉ ဝႃႈ ပေႉ ၸႂ် သိူ ဝ်း ၸႂ် ၶၢတ်ႇ ယ ဝ်ႉ ", 0.3, 0.13),
    ("\nတေ ဢ ဝ် ၸႂ် ႁၵ်ႉ ပႅင်း ႁဵတ်း ၼ မ်ႉ တႃ ", 0.5, 0.1),
    ("\nၵူၼ်း ၸၢႆး ၶႂ်ႈ ယွ ၼ်း တွ ၼ်ႈ ထို င် ", 0.6, 0.1),
    ("\nၶေႃႈ ၵႂၢမ်း တို ၼ်း ဢ မ်ႇ လႅ ၼ် သ င်ႁၵ်ႉ မႂ်းသု တ်း ပိူၼ်ႈ ........", 0.7, 0.1),
    ("\nလ မ်ႇ ၽဵ င်း ၵႂၢမ်း ႁၵ်ႉ သိူ ဝ်း မူၼ်ႈ ......", 0.8, 0.11),
    ("\nတေ လႆႈ လႅ ၵ်ႈ ၶေႃႈ ၵႂၢမ်း ပဵၼ် ၼ မ်ႉ တႃ ", 0.9, 0.08),
    ("\nႁႆႇ တို င်ႈ သေ ႁွင်ႉ ၽဵ င်း ၵႂၢမ်း ၵေႃႈ", 1.0, 0.09),
    ("\nဢ မ်ႇ ၸ ပ်း လွ ၵ်း ၸ ပ်း လၢႆး သ င် ", 1.1, 0.08),
    ("\nဢ မ်ႇ ႁူႉ တေ ႁဵတ်း ၸိူ င်ႉ ၼႆ လႆႈ တိူ ဝ်ႉ ၸႂ်.............", 1.2, 0.12),
    ("\nတေႃႇ ၼ မ်ႉ တႃ ၵူၼ်း ၸၢႆး ပေႃး လႆႈ ယို င်ႈ ႁူၺ်ႇ မႃး ..........", 1.3, 0.13),
    ("\nEditing By ♡ Sai Yont Sein♡ ", 1.4, 0.2),
];

/// One line of lyrics together with its timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    pub text: String,
    /// Wait before the first cluster is written.
    #[serde(with = "seconds", default)]
    pub start_delay: Duration,
    /// Wait after each cluster is written.
    #[serde(with = "seconds", default)]
    pub char_delay: Duration,
}

impl LyricLine {
    pub fn new(text: impl Into<String>, start_delay: Duration, char_delay: Duration) -> Self {
        Self {
            text: text.into(),
            start_delay,
            char_delay,
        }
    }

    /// Builds a line from delays expressed in seconds. Negative or
    /// non-finite values are treated as zero.
    pub fn from_secs(text: impl Into<String>, start_delay: f64, char_delay: f64) -> Self {
        Self::new(text, secs_or_zero(start_delay), secs_or_zero(char_delay))
    }
}

/// Banner plus the lines that are animated below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricSheet {
    #[serde(default = "builtin_banner")]
    pub banner: Vec<String>,
    pub lines: Vec<LyricLine>,
}

impl LyricSheet {
    pub fn builtin() -> Self {
        Self {
            banner: builtin_banner(),
            lines: BUILTIN_LINES
                .iter()
                .map(|(text, start, per_char)| LyricLine::from_secs(*text, *start, *per_char))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON lyric sheet from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading lyric sheet");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn builtin_banner() -> Vec<String> {
    BUILTIN_BANNER.iter().map(|line| line.to_string()).collect()
}

fn secs_or_zero(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

/// Serde adapter storing a [`Duration`] as floating point seconds.
mod seconds {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            de::Error::custom(format!(
                "delay must be a finite, non-negative number of seconds, got {secs}"
            ))
        })
    }
}
