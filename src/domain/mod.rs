pub mod canvas;
pub mod icon_image;
pub mod icon_request;
pub mod label_font;
pub mod output_dir;
