use crate::scene::model::{ElementProps, Elements};

/// Static logo card: the logo centered on a transparent background.
pub fn write_logo_card(asset: &str, out: &mut Elements) {
    out.insert("logo", ElementProps::new(0).asset(asset));
}
