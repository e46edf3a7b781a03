use clap::ValueEnum;
use mfview_engine::{EmbedFormat, QexpFormat};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum QexpStyle {
    Oneline,
    Short,
    All,
}

impl fmt::Display for QexpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        QexpFormat::from(*self).fmt(f)
    }
}

impl From<QexpStyle> for QexpFormat {
    fn from(style: QexpStyle) -> Self {
        match style {
            QexpStyle::Oneline => QexpFormat::Oneline,
            QexpStyle::Short => QexpFormat::Short,
            QexpStyle::All => QexpFormat::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum EmbedKind {
    Embed,
    AnalyticEmbed,
    Satake,
    SatakeAngle,
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EmbedFormat::from(*self).fmt(f)
    }
}

impl From<EmbedKind> for EmbedFormat {
    fn from(kind: EmbedKind) -> Self {
        match kind {
            EmbedKind::Embed => EmbedFormat::Embed,
            EmbedKind::AnalyticEmbed => EmbedFormat::AnalyticEmbed,
            EmbedKind::Satake => EmbedFormat::Satake,
            EmbedKind::SatakeAngle => EmbedFormat::SatakeAngle,
        }
    }
}
