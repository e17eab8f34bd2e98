//! Browser file input -> [`ImageUpload`].

#[cfg(feature = "hydrate")]
use crate::net::types::ImageUpload;

/// Content type used when the browser does not report one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Read the selected file's bytes.
///
/// # Errors
///
/// Returns a display string if the browser refuses to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_image(file: &web_sys::File) -> Result<ImageUpload, String> {
    use wasm_bindgen_futures::JsFuture;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = file.type_();
    Ok(ImageUpload {
        filename: file.name(),
        content_type: if content_type.is_empty() { FALLBACK_CONTENT_TYPE.to_owned() } else { content_type },
        bytes,
    })
}

/// First file selected in an `<input type="file">`.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}
