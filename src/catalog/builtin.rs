//! Built-in catalog entries

/// Component types recognized without a warning, in completion order
pub const KNOWN_COMPONENTS: &[&str] = &[
    "prometheus.scrape",
    "prometheus.remote_write",
    "prometheus.exporter.unix",
    "loki.source.file",
    "loki.write",
    "otelcol.receiver.otlp",
    "otelcol.exporter.otlp",
    "discovery.kubernetes",
    "discovery.file",
    "local.file",
];

/// Attribute names offered by completion
pub const COMMON_ATTRIBUTES: &[&str] = &[
    "forward_to",
    "targets",
    "endpoint",
    "url",
    "role",
    "scrape_interval",
    "log_level",
];

/// Hover descriptions for the components that have one
pub const COMPONENT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("prometheus.scrape", "Scrapes Prometheus metrics from targets."),
    (
        "prometheus.remote_write",
        "Sends Prometheus metrics to a remote endpoint.",
    ),
    ("loki.write", "Sends logs to a Loki endpoint."),
    (
        "discovery.kubernetes",
        "Discovers targets from Kubernetes API.",
    ),
];

/// Types under this prefix are never reported as unknown
pub const LOCAL_COMPONENT_PREFIX: &str = "local.";
