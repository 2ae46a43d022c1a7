//! Browser file-input helpers shared by upload and profile forms.

/// First selected file of the input that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn file_from_input(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast as _;
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// First selected file of a referenced input element.
#[cfg(feature = "hydrate")]
pub fn file_from_ref(node: &leptos::prelude::NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    use leptos::prelude::Get as _;
    node.get()?.files()?.get(0)
}

/// Object URL for a local preview of `file`. The browser reclaims these
/// when the document goes away; short-lived forms don't revoke eagerly.
#[cfg(feature = "hydrate")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
