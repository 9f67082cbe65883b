//! Classification of Puppet output lines.
//!
//! Every line read from a Puppet run is turned into a list of [`Signal`]s
//! before the tracker touches its state. A single line may carry several
//! signals (an evaluation-start marker with a `(N of M)` counter is both a
//! [`Signal::Discovery`] and a [`Signal::Start`]); they are returned in the
//! order the tracker applies them.
//!
//! # Examples
//!
//! ```rust
//! use kafo::tracker::{classify, Signal};
//!
//! let signals = classify("MONITOR_RESOURCE File[/etc/motd]");
//! assert_eq!(
//!     signals,
//!     vec![Signal::Registration { resource: "File[/etc/motd]".into() }]
//! );
//!
//! assert_eq!(classify("Notice: Applied catalog"), vec![Signal::Unmatched]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Resource declared by the installer's monitoring hook.
static MONITOR_RESOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w*MONITOR_RESOURCE (?P<resource>[^\]]+\])").expect("valid MONITOR_RESOURCE regex")
});

/// Puppet evaltrace start, with the `(N of M)` counter Puppet 6.6+ appends.
static EVALTRACE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"/?(?P<resource>.+\]): Starting to evaluate the resource( \((?P<count>\d+) of (?P<total>\d+)\))?",
    )
    .expect("valid EVALTRACE_START regex")
});

static EVALTRACE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/?(?P<resource>.+\]): Evaluated in [\d\.]+ seconds")
        .expect("valid EVALTRACE_END regex")
});

static PREFETCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Prefetching .* resources for").expect("valid PREFETCH regex")
});

/// Last `Type[title]` segment of a `Stage[...]/.../Type[title]` path.
static CANONICAL_RESOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Stage.*/(?P<resource>.*\[.*\])$").expect("valid resource path regex")
});

/// One recognised meaning of an output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Puppet reported its position as `count of total` (1-based).
    Discovery { count: u64, total: u64 },
    /// A resource was announced through `MONITOR_RESOURCE`.
    Registration { resource: String },
    /// Puppet started evaluating a resource.
    ///
    /// `canonical` holds the bare `Type[title]` identifier when it could be
    /// extracted from the resource path.
    Start {
        resource: String,
        canonical: Option<String>,
    },
    /// Puppet finished evaluating a resource.
    Completion {
        resource: String,
        canonical: Option<String>,
    },
    /// Puppet is prefetching a provider's resources.
    Prefetch,
    /// Nothing recognisable on this line.
    Unmatched,
}

/// Classify a single line of Puppet output.
///
/// Never fails: partial or malformed markers are simply not reported. The
/// returned list is never empty; a line without any marker yields
/// `[Signal::Unmatched]`.
pub fn classify(line: &str) -> Vec<Signal> {
    let mut signals = Vec::new();

    if let Some(start) = EVALTRACE_START.captures(line) {
        let counter = start
            .name("count")
            .zip(start.name("total"))
            .and_then(|(count, total)| {
                Some((count.as_str().parse::<u64>().ok()?, total.as_str().parse::<u64>().ok()?))
            });
        if let Some((count, total)) = counter {
            // Puppet counts from 1; anything else is not a usable position.
            if count >= 1 && total >= 1 {
                signals.push(Signal::Discovery { count, total });
            }
        }
    }

    if let Some(monitor) = MONITOR_RESOURCE.captures(line) {
        signals.push(Signal::Registration {
            resource: monitor["resource"].to_string(),
        });
    }

    if let Some(start) = EVALTRACE_START.captures(line) {
        let resource = start["resource"].to_string();
        signals.push(Signal::Start {
            canonical: canonical_resource(&resource),
            resource,
        });
    }

    if let Some(end) = EVALTRACE_END.captures(line) {
        let resource = end["resource"].to_string();
        signals.push(Signal::Completion {
            canonical: canonical_resource(&resource),
            resource,
        });
    }

    if PREFETCH.is_match(line) {
        signals.push(Signal::Prefetch);
    }

    if signals.is_empty() {
        signals.push(Signal::Unmatched);
    }
    signals
}

/// Extract the `Type[title]` identifier from a resource path.
///
/// Returns `None` when the path is not rooted at a `Stage`.
pub fn canonical_resource(resource: &str) -> Option<String> {
    CANONICAL_RESOURCE
        .captures(resource)
        .map(|found| found["resource"].to_string())
}
