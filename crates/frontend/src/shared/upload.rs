//! Multipart bodies and local image previews

use contracts::shared::multipart::MultipartFields;
use leptos::ev::Event;
use leptos::prelude::event_target;
use web_sys::{File, FormData, HtmlInputElement, Url};

/// Builds the request body from text fields plus named files
pub fn build_form_data(fields: &MultipartFields, files: &[(&str, &File)]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;

    for (key, value) in fields.iter() {
        form.append_with_str(key, value)
            .map_err(|e| format!("Failed to append field {}: {:?}", key, e))?;
    }
    for (key, file) in files {
        form.append_with_blob_and_filename(key, file, &file.name())
            .map_err(|e| format!("Failed to append file {}: {:?}", key, e))?;
    }

    Ok(form)
}

/// First file picked in an `<input type="file">`, if any
pub fn picked_file(ev: &Event) -> Option<File> {
    let input: HtmlInputElement = event_target(ev);
    let file = input.files().and_then(|files| files.get(0));
    // Allow re-picking the same file
    input.set_value("");
    file
}

/// Temporary `blob:` URL for previewing a picked file
pub fn preview_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Failed to create preview URL: {:?}", e);
            None
        }
    }
}

pub fn revoke_preview(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
