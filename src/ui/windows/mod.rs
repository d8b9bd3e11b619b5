//! Views drawn by the app: the central content view and floating panels.

pub mod content_view;
pub mod inspector_view;
pub mod message_box;
