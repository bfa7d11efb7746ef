use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no global `window`")]
	NoWindow,

	#[error("no document on window")]
	NoDocument,

	#[error("canvas has no 2d context")]
	NoContext,

	#[error("JavaScript error: {0}")]
	Js(String),

	#[error("parse service answered with HTTP {status}")]
	HttpStatus { status: u16 },

	#[error("invalid parse service response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
