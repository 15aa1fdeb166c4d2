pub mod build_info;
pub mod paths;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "agro_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // A subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Uppercases the first character of `value`, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_handles_ascii_and_empty() {
        assert_eq!(capitalize("siembra"), "Siembra");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ñandú"), "Ñandú");
    }
}
