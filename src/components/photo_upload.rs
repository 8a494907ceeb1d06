//! Photo Upload Component
//!
//! File picker feeding the registration's optional photo attachment.
//! Files over the 2 MB cap are rejected before being read.
//!
//! The `status` signal is owned by the form page, not by this component,
//! and the read runs on a root-scope task. Navigating to another step
//! mid-read therefore does not abort it: the late result still lands in
//! the status signal, and the form applies it to the shared store.

use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::warn;

use ceis_core::{photo, PhotoAttachment};

/// Lifecycle of the optional photo attachment.
#[derive(Clone, PartialEq)]
pub enum UploadStatus {
    Idle,
    /// Read in flight; carries the filename
    Processing(String),
    /// Validated and encoded, pending in the store
    Ready(PhotoAttachment),
    TooLarge,
    Failed(String),
}

/// Write through the signal if it is still alive. The task can outlive the
/// whole form; results arriving after teardown are dropped.
fn set_status(mut status: Signal<UploadStatus>, value: UploadStatus) {
    if let Ok(mut slot) = status.try_write() {
        *slot = value;
    }
}

/// Properties for the PhotoUpload component
#[derive(Clone, PartialEq, Props)]
pub struct PhotoUploadProps {
    /// Attachment lifecycle, owned by the form page
    pub status: Signal<UploadStatus>,
    /// Label shown above the upload box
    #[props(default)]
    pub label: String,
    /// Accepted-format hint shown inside the box
    #[props(default)]
    pub hint: String,
}

#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let status = props.status;

    let pick = move |_| {
        // Detached from this component's scope so step navigation does not
        // cancel an in-flight read.
        spawn_forever(async move {
            // Blocking native dialog, kept off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .set_title("Select Photo")
                    .pick_file()
            })
            .await;

            let Ok(Some(path)) = picked else {
                return;
            };

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "photo".to_string());
            set_status(status, UploadStatus::Processing(name.clone()));

            // Size gate from metadata, before reading the file
            match tokio::fs::metadata(&path).await {
                Ok(meta) => {
                    if photo::check_size(meta.len()).is_err() {
                        warn!(size = meta.len(), "photo over size limit");
                        set_status(status, UploadStatus::TooLarge);
                        return;
                    }
                }
                Err(e) => {
                    set_status(status, UploadStatus::Failed(e.to_string()));
                    return;
                }
            }

            match tokio::fs::read(&path).await {
                Ok(bytes) => match photo::attachment_from_bytes(&name, &bytes) {
                    Ok(attachment) => set_status(status, UploadStatus::Ready(attachment)),
                    Err(e) => set_status(status, UploadStatus::Failed(e.to_string())),
                },
                Err(e) => set_status(status, UploadStatus::Failed(e.to_string())),
            }
        });
    };

    let status_line = match &*status.read() {
        UploadStatus::Idle => None,
        UploadStatus::Processing(name) => Some((format!("Processing {name}..."), "upload-status")),
        UploadStatus::Ready(att) => Some((format!("Attached: {}", att.name), "upload-status ready")),
        UploadStatus::TooLarge => Some((
            "Photo exceeds the 2 MB limit. Please choose a smaller file.".to_string(),
            "upload-status failed",
        )),
        UploadStatus::Failed(msg) => {
            Some((format!("Could not attach photo: {msg}"), "upload-status failed"))
        }
    };
    let attached = matches!(&*status.read(), UploadStatus::Ready(_));

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label", "{props.label}" }
            }
            div { class: "glass-card upload-box",
                button {
                    class: "glass-btn",
                    r#type: "button",
                    onclick: pick,
                    "Choose a Photo"
                }
                if attached {
                    button {
                        class: "glass-btn danger",
                        r#type: "button",
                        style: "margin-left: 1rem;",
                        onclick: move |_| set_status(status, UploadStatus::Idle),
                        "Remove"
                    }
                }
                if !props.hint.is_empty() {
                    p { class: "upload-status", "{props.hint}" }
                }
                if let Some((text, class)) = status_line {
                    p { class: "{class}", "{text}" }
                }
            }
        }
    }
}
