//! Desktop app components built on the shared UI kit.

mod nav_header;
mod photo_upload;
mod signature_pad;
mod success_view;
mod zodiac_picker;

pub use nav_header::NavHeader;
pub use photo_upload::{PhotoUpload, UploadStatus};
pub use signature_pad::SignaturePadView;
pub use success_view::SuccessView;
pub use zodiac_picker::ZodiacPicker;
