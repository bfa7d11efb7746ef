//! Client for the remote sentence-to-graph parser.

use log::info;
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::{Error, Result};
use crate::graph::raw::{ParseRequest, RawGraph};

/// A parser result: the typed graph plus the JSON exactly as the parser sent it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedGraph {
	pub graph: RawGraph,
	pub json: Value,
}

impl Default for ParsedGraph {
	fn default() -> Self {
		Self {
			graph: RawGraph::default(),
			json: Value::Object(Default::default()),
		}
	}
}

/// POST `code` to the parser at `endpoint` and return the graph it produced.
pub async fn parse_code(endpoint: &str, code: &str) -> Result<ParsedGraph> {
	info!("Pulling data from: {endpoint}");
	let body = serde_json::to_string(&ParseRequest { code })?;

	let headers = Headers::new()?;
	headers.set("Content-Type", "application/json")?;
	let init = RequestInit::new();
	init.set_method("POST");
	init.set_headers(&headers);
	init.set_body(&body.into());
	let request = Request::new_with_str_and_init(endpoint, &init)?;

	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(Error::HttpStatus {
			status: response.status(),
		});
	}
	let text = JsFuture::from(response.text()?).await?;
	decode_graph(&text.as_string().unwrap_or_default())
}

/// Unwrap `{ result: { graph } }`. Missing keys yield an empty graph; broken JSON is an error.
pub fn decode_graph(body: &str) -> Result<ParsedGraph> {
	let mut envelope: Value = serde_json::from_str(body)?;
	let json = envelope
		.pointer_mut("/result/graph")
		.map(Value::take)
		.filter(|graph| !graph.is_null())
		.unwrap_or_else(|| Value::Object(Default::default()));
	let graph = RawGraph::deserialize(&json)?;
	Ok(ParsedGraph { graph, json })
}

/// Identifies one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Orders submissions so a slow earlier response cannot overwrite a newer one.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
	issued: u64,
}

impl RequestSequencer {
	pub fn issue(&mut self) -> Ticket {
		self.issued += 1;
		Ticket(self.issued)
	}

	/// Only the newest submission may update the display.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.issued
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_envelope() {
		let parsed = decode_graph(
			r#"{"result": {"graph": {
				"nodes": [
					{"id": "liz", "attributes": {"name": "Liz"}},
					{"id": "jack", "attributes": {"name": "Jack"}}
				],
				"edges": [{"source": "liz", "target": "jack", "reciprocal": false, "label": "knows"}]
			}}}"#,
		)
		.unwrap();
		assert_eq!(parsed.graph.nodes.len(), 2);
		assert_eq!(parsed.graph.edges[0].label.as_deref(), Some("knows"));
	}

	#[test]
	fn raw_json_keeps_unknown_fields() {
		let parsed = decode_graph(
			r#"{"result": {"graph": {
				"nodes": [{"id": "liz", "attributes": {"name": "Liz"}, "kind": "person"}],
				"edges": [],
				"source_code": "(Liz)."
			}}}"#,
		)
		.unwrap();
		assert_eq!(parsed.json["nodes"][0]["kind"], "person");
		assert_eq!(parsed.json["source_code"], "(Liz).");
		assert_eq!(parsed.graph.nodes[0].id, "liz");
	}

	#[test]
	fn missing_graph_is_empty() {
		for body in [r#"{"result": {}}"#, "{}", r#"{"result": {"graph": null}}"#] {
			let parsed = decode_graph(body).unwrap();
			assert_eq!(parsed, ParsedGraph::default());
			assert_eq!(parsed.json.to_string(), "{}");
		}
	}

	#[test]
	fn broken_json_is_an_error() {
		assert!(matches!(decode_graph("{\"result\":"), Err(Error::Decode(_))));
	}

	#[test]
	fn stale_tickets_are_rejected() {
		let mut seq = RequestSequencer::default();
		let first = seq.issue();
		assert!(seq.is_current(first));

		let second = seq.issue();
		assert!(!seq.is_current(first));
		assert!(seq.is_current(second));
		assert!(first < second);
	}
}
