//! File input that uploads a roadmap thumbnail as soon as one is chosen.

use leptos::prelude::*;

/// Thumbnail picker. Validates the selection, uploads it, and publishes the
/// hosted URL into `image_url` for the save call to pick up.
#[component]
pub fn ThumbnailInput(image_url: RwSignal<Option<String>>) -> impl IntoView {
    let status = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                image_url.set(None);
                status.set(String::new());
                return;
            };

            let mime_type = file.type_();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as usize;
            if let Err(reason) = crate::net::upload::validate_image(&mime_type, size) {
                status.set(reason.to_owned());
                return;
            }

            status.set(format!("Uploading {}...", file.name()));
            leptos::task::spawn_local(async move {
                let Ok(bytes) = read_file_bytes(&file).await else {
                    status.set("Could not read the selected file.".to_owned());
                    return;
                };
                match crate::net::upload::upload_image(&bytes, &mime_type).await {
                    Ok(url) => {
                        image_url.set(Some(url));
                        status.set("Thumbnail uploaded".to_owned());
                    }
                    Err(e) => status.set(format!("Upload failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = image_url;
        }
    };

    view! {
        <div class="thumbnail-input">
            <label class="thumbnail-input__label" for="thumbnail-file">
                "Thumbnail"
            </label>
            <input
                id="thumbnail-file"
                class="thumbnail-input__file"
                type="file"
                accept=".jpeg,.jpg,.png,.webp"
                node_ref=input_ref
                on:change=on_change
            />
            <Show when=move || !status.get().is_empty()>
                <span class="thumbnail-input__status">{move || status.get()}</span>
            </Show>
        </div>
    }
}

#[cfg(feature = "csr")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, ()> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
