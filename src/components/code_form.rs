use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::DEFAULT_CODE;

/// Text area for an Aspen sentence. Submitting hands the current text to `on_submit`.
#[component]
pub fn CodeForm(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
	let (code, set_code) = signal(DEFAULT_CODE.to_string());

	let submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		on_submit.run(code.get_untracked());
	};

	view! {
		<form on:submit=submit>
			<textarea
				cols="70"
				rows="8"
				required=true
				prop:value=move || code.get()
				on:input=move |ev| set_code.set(event_target_value(&ev))
			></textarea>
			<br />
			<button type="submit">"Convert Aspen"</button>
		</form>
	}
}
