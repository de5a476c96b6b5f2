//! Fetch, then render, in one `spawn_local` task.

use std::cell::Cell;

use roster_core::{
    finish_pass, render_document, FetchedDocument, PassOutcome, RosterConfig, RosterError,
    RosterResult,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;

use crate::dom::DomContainer;

/// Best-effort text for a rejected promise or thrown value
pub(crate) fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and read the whole body as text. The status is reported, not
/// judged; [`render_document`] decides what a non-2xx means.
pub async fn fetch_document(url: &str) -> RosterResult<FetchedDocument> {
    let window = web_sys::window().ok_or_else(|| RosterError::Fetch("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| RosterError::Fetch(describe(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| RosterError::Fetch(describe(e)))?;

    let text = response.text().map_err(|e| RosterError::Fetch(describe(e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| RosterError::Fetch(describe(e)))?
        .as_string()
        .ok_or_else(|| RosterError::Decode("response body is not text".into()))?;

    Ok(FetchedDocument::new(response.status(), body))
}

/// One full pass. Any failure is logged once inside [`finish_pass`].
pub async fn run_pass(config: RosterConfig) -> PassOutcome {
    let result = async {
        let document = fetch_document(&config.data_url).await?;
        let mut container = DomContainer::find(&config.container_id)?;
        render_document(document, &config, &mut container)
    }
    .await;
    finish_pass(result)
}

thread_local! {
    static SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

/// Start the page's one pass once the document is parsed: right away unless
/// it is still loading, otherwise on `DOMContentLoaded`. A missing container
/// then surfaces as a logged failure from [`run_pass`].
///
/// Only the first call schedules anything; later calls return `false` so a
/// container is never filled twice.
pub fn schedule(config: RosterConfig) -> bool {
    if SCHEDULED.with(|s| s.replace(true)) {
        log::warn!("roster pass already scheduled, ignoring");
        return false;
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        finish_pass(Err(RosterError::MissingContainer(config.container_id)));
        return true;
    };

    if document.ready_state() != "loading" {
        spawn_local(async move {
            run_pass(config).await;
        });
        return true;
    }

    log::debug!("waiting for DOMContentLoaded before rendering");
    let on_ready = Closure::once_into_js(move || {
        spawn_local(async move {
            run_pass(config).await;
        });
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        finish_pass(Err(RosterError::Fetch(format!(
            "could not wait for DOMContentLoaded: {}",
            describe(e)
        ))));
    }
    true
}
