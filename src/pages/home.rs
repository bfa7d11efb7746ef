use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};

use crate::api::{self, ParsedGraph, RequestSequencer};
use crate::components::code_form::CodeForm;
use crate::components::relation_graph::RelationGraph;
use crate::components::result_data::ResultData;
use crate::config::AppConfig;

/// Form, raw result and graph, stacked.
#[component]
pub fn Home() -> impl IntoView {
	let config = AppConfig::from_env();
	let viewport = config.viewport;
	let result = RwSignal::new(ParsedGraph::default());
	let graph = Signal::derive(move || result.with(|r| r.graph.clone()));
	let json = Signal::derive(move || result.with(|r| r.json.clone()));
	let sequencer = StoredValue::new(RequestSequencer::default());

	let on_submit = move |code: String| {
		let Some(ticket) = sequencer.try_update_value(|s| s.issue()) else {
			return;
		};
		let endpoint = config.api_host.clone();
		spawn_local(async move {
			match api::parse_code(&endpoint, &code).await {
				Ok(parsed)
					if sequencer
						.try_with_value(|s| s.is_current(ticket))
						.unwrap_or(false) =>
				{
					result.set(parsed)
				}
				Ok(_) => warn!("dropping stale response for {:?}", ticket),
				Err(err) => error!("parse request failed, keeping previous graph: {err}"),
			}
		});
	};

	view! {
		<div class="aspen-app">
			<CodeForm on_submit=on_submit />
			<ResultData result=json />
			<RelationGraph data=graph viewport=viewport />
		</div>
	}
}
