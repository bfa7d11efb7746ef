//! Build-time settings.

/// Parser endpoint used when `API_HOST` is not set at build time.
pub const DEFAULT_API_HOST: &str = "http://localhost:9292";

/// Sentence the submission form starts with.
pub const DEFAULT_CODE: &str = "(Liz) [knows] (Jack).";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

pub const VIEWPORT: Viewport = Viewport {
	width: 800.0,
	height: 500.0,
};

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	pub api_host: String,
	pub viewport: Viewport,
}

impl AppConfig {
	pub fn from_env() -> Self {
		Self::with_api_host(option_env!("API_HOST"))
	}

	fn with_api_host(host: Option<&str>) -> Self {
		let api_host = host
			.map(str::trim)
			.filter(|h| !h.is_empty())
			.unwrap_or(DEFAULT_API_HOST)
			.to_owned();
		Self {
			api_host,
			viewport: VIEWPORT,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn falls_back_to_localhost() {
		assert_eq!(AppConfig::with_api_host(None).api_host, DEFAULT_API_HOST);
		assert_eq!(AppConfig::with_api_host(Some("  ")).api_host, DEFAULT_API_HOST);
	}

	#[test]
	fn uses_configured_host() {
		let config = AppConfig::with_api_host(Some("https://aspen.example.org"));
		assert_eq!(config.api_host, "https://aspen.example.org");
		assert_eq!(config.viewport, VIEWPORT);
	}
}
