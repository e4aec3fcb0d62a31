//! Shared fixtures: a manager wired to in-memory sinks.

#![allow(dead_code)]

use gumo_logging::{LoggerManager, MemorySink, OutputFormat, Settings};

pub struct Capture {
    pub manager: LoggerManager,
    pub normal: MemorySink,
    pub error: MemorySink,
}

pub fn settings(format: OutputFormat) -> Settings {
    Settings {
        project_id: "myproj".to_string(),
        format,
        source_location: true,
    }
}

pub fn capture(format: OutputFormat) -> Capture {
    let normal = MemorySink::new();
    let error = MemorySink::new();
    let manager = LoggerManager::builder()
        .settings(settings(format))
        .normal_sink(normal.clone())
        .error_sink(error.clone())
        .build();
    Capture {
        manager,
        normal,
        error,
    }
}

pub fn parse(line: &str) -> serde_json::Value {
    serde_json::from_str(line).unwrap()
}
