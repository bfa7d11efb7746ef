use leptos::prelude::*;
use serde_json::Value;

/// Read-only JSON of the last graph the parser returned, exactly as it arrived.
#[component]
pub fn ResultData(#[prop(into)] result: Signal<Value>) -> impl IntoView {
	let json = move || result.with(Value::to_string);

	view! {
		<div style="width: 300px;">
			<textarea cols="70" rows="8" readonly=true prop:value=json></textarea>
		</div>
	}
}
