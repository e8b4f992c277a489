use std::cmp::Ordering;
use std::env;

// Backends we can bind, one per build
#[derive(PartialEq, Eq, Debug)]
struct Backend {
    name: &'static str,
    target_feature: &'static str,
    target_archs: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl Backend {
    // Priority order between backends (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all accelerated backends implemented in this crate
    fn accelerated() -> Vec<Backend> {
        vec![Backend {
            name: "sse2",
            target_feature: "sse2",
            target_archs: &["x86", "x86_64"],
            cfg_flag: "sse",
            detected: false,
        }]
    }
}

impl Ord for Backend {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for Backend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Detection trait so new probes can be added without touching the selection logic
trait BackendDetector {
    fn detect(&self, backends: &mut [Backend]);
    fn is_applicable(&self) -> bool;
}

// Reads the features cargo resolved for the compilation target, which stays
// correct when cross-compiling (unlike probing the host CPU).
struct TargetFeatureDetector;
impl BackendDetector for TargetFeatureDetector {
    fn detect(&self, backends: &mut [Backend]) {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

        for backend in backends.iter_mut() {
            backend.detected = backend.target_archs.contains(&arch.as_str())
                && features.split(',').any(|f| f == backend.target_feature);
        }
    }

    fn is_applicable(&self) -> bool {
        env::var("CARGO_CFG_TARGET_ARCH").is_ok()
    }
}

/// What the build asked for, from the cargo feature or the environment.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Auto,
    Scalar,
    Named(String),
}

impl Request {
    fn from_env() -> Request {
        if env::var_os("CARGO_FEATURE_FORCE_SCALAR").is_some() {
            return Request::Scalar;
        }

        match env::var("QUADLANE_BACKEND") {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "" | "auto" => Request::Auto,
                "scalar" | "fallback" => Request::Scalar,
                other => Request::Named(other.to_string()),
            },
            Err(_) => Request::Auto,
        }
    }
}

struct Selector;
impl Selector {
    fn detectors() -> Vec<Box<dyn BackendDetector>> {
        vec![Box::new(TargetFeatureDetector)]
    }

    fn detect(backends: &mut [Backend]) {
        for detector in Self::detectors() {
            if detector.is_applicable() {
                detector.detect(backends);
                break;
            }
        }
    }

    fn apply(backends: &mut [Backend], request: &Request) {
        backends.sort();

        let cfg_flag = match request {
            Request::Scalar => "fallback",
            Request::Auto => backends
                .iter()
                .find(|backend| backend.detected)
                .map(|backend| backend.cfg_flag)
                .unwrap_or("fallback"),
            Request::Named(name) => {
                match backends.iter().find(|b| b.name == name || b.cfg_flag == name) {
                    Some(backend) if backend.detected => backend.cfg_flag,
                    Some(_) => {
                        println!(
                            "cargo:warning=QUADLANE_BACKEND={name} is not available for this target, using the scalar backend"
                        );
                        "fallback"
                    }
                    None => {
                        println!(
                            "cargo:warning=unknown QUADLANE_BACKEND={name}, using the scalar backend"
                        );
                        "fallback"
                    }
                }
            }
        };

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=QUADLANE_BACKEND");

    let request = Request::from_env();

    let mut backends = Backend::accelerated();
    Selector::detect(&mut backends);
    Selector::apply(&mut backends, &request);
}
