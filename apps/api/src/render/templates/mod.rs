//! The six fixed layouts. Each module exposes `render(&CvModel, &Labels)`.

pub mod academic;
pub mod classic;
pub mod creative;
pub mod minimal;
pub mod modern;
pub mod tech;

use crate::models::cv::PersonalInfo;
use crate::render::content::{contact_items, ContactKind};
use crate::render::html::Html;

/// Contact details as inline items. Each item carries a `data-contact` kind so
/// the client can attach its own icons.
pub(crate) fn write_contacts(
    html: &mut Html,
    info: &PersonalInfo,
    container_style: &str,
    item_style: &str,
) {
    let items = contact_items(info);
    if items.is_empty() {
        return;
    }
    html.open("div", "cv-contact", container_style);
    for (kind, value) in items {
        let kind = match kind {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Location => "location",
        };
        html.open_attrs("span", &[("data-contact", kind), ("style", item_style)])
            .text(value)
            .close("span");
    }
    html.close("div");
}

/// Skills rendered as rounded chips.
pub(crate) fn write_chips(html: &mut Html, skills: &[&str], container_style: &str, chip_style: &str) {
    html.open("ul", "cv-chips", container_style);
    for skill in skills {
        html.element("li", "", chip_style, skill);
    }
    html.close("ul");
}
