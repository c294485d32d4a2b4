// src/ui/mod.rs
pub mod page;
pub mod toast;

pub use page::{Page, Region, ScrollRequest, TransientCue, TriggerButton, UploadVisual};
pub use toast::{ToastKind, Toasts};
