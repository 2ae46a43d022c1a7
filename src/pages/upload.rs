//! Upload page: video + thumbnail pickers with local previews.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::state::toast::Toasts;

/// Require a title and both files; returns the trimmed title.
fn validate_upload(title: &str, has_video: bool, has_thumbnail: bool) -> Result<String, &'static str> {
    if !has_video || !has_thumbnail {
        return Err("Please select both video and thumbnail files");
    }
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    Ok(title.to_owned())
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);

    let video_input = NodeRef::<leptos::html::Input>::new();
    let thumbnail_input = NodeRef::<leptos::html::Input>::new();
    let video_preview = RwSignal::new(String::new());
    let video_label = RwSignal::new(String::new());
    let thumbnail_preview = RwSignal::new(String::new());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let on_video_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = crate::util::files::file_from_input(&ev) {
                video_label.set(format!(
                    "{} ({})",
                    file.name(),
                    crate::util::format::format_file_size(file.size() as u64)
                ));
                if let Some(url) = crate::util::files::preview_url(&file) {
                    video_preview.set(url);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_thumbnail_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = crate::util::files::file_from_input(&ev)
                .as_ref()
                .and_then(crate::util::files::preview_url)
            {
                thumbnail_preview.set(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get() {
            return;
        }
        let (has_video, has_thumbnail) = {
            #[cfg(feature = "hydrate")]
            {
                (
                    crate::util::files::file_from_ref(&video_input).is_some(),
                    crate::util::files::file_from_ref(&thumbnail_input).is_some(),
                )
            }
            #[cfg(not(feature = "hydrate"))]
            {
                (false, false)
            }
        };
        let title_value = match validate_upload(&title.get(), has_video, has_thumbnail) {
            Ok(value) => value,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let (Some(video_file), Some(thumbnail_file)) = (
                crate::util::files::file_from_ref(&video_input),
                crate::util::files::file_from_ref(&thumbnail_input),
            ) else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("title", &title_value);
            let _ = form.append_with_str("description", description.get().trim());
            let _ = form.append_with_blob("videoFile", &video_file);
            let _ = form.append_with_blob("thumbnail", &thumbnail_file);

            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_videos::upload_video(&form).await {
                    Ok(_) => {
                        toasts.success("Video uploaded successfully!");
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(message) => {
                        toasts.error(&message);
                        uploading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = title_value;
        }
    };

    view! {
        <div class="page upload">
            <div class="page__heading">
                <h1>"Upload Video"</h1>
                <p>"Share your content with the world"</p>
            </div>

            <form class="upload__form" on:submit=on_submit>
                <section class="card">
                    <h2>"Video File"</h2>
                    <Show when=move || !video_preview.get().is_empty()>
                        <video class="upload__video-preview" controls src=move || video_preview.get()></video>
                        <p class="upload__file-label">{move || video_label.get()}</p>
                    </Show>
                    <label class="upload__dropzone">
                        <span>"Click to upload video"</span>
                        <span class="upload__hint">"MP4, WebM, or OGV (max 100MB)"</span>
                        <input
                            class="upload__file-input"
                            type="file"
                            accept="video/*"
                            node_ref=video_input
                            on:change=on_video_change
                        />
                    </label>
                </section>

                <section class="card">
                    <h2>"Thumbnail"</h2>
                    <Show when=move || !thumbnail_preview.get().is_empty()>
                        <img class="upload__thumbnail-preview" src=move || thumbnail_preview.get() alt="Thumbnail preview"/>
                    </Show>
                    <label class="upload__dropzone">
                        <span>"Click to upload thumbnail"</span>
                        <input
                            class="upload__file-input"
                            type="file"
                            accept="image/*"
                            node_ref=thumbnail_input
                            on:change=on_thumbnail_change
                        />
                    </label>
                </section>

                <section class="card">
                    <h2>"Details"</h2>
                    <label class="upload__label">
                        "Title"
                        <input
                            class="upload__input"
                            type="text"
                            placeholder="Give your video a title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="upload__label">
                        "Description"
                        <textarea
                            class="upload__textarea"
                            placeholder="Tell viewers about your video"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                </section>

                <button class="btn btn--primary upload__submit" type="submit" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload Video" }}
                </button>
            </form>
        </div>
    }
}
