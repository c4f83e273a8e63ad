use crate::core::{ElementSize, SizeSource};
use glam::DVec2;
use web_sys as web;

/// Pointer position relative to the top-left of `el`, in CSS pixels.
#[inline]
pub fn pointer_element_px(ev: &web::MouseEvent, el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

#[inline]
pub fn element_size(el: &web::Element) -> ElementSize {
    let rect = el.get_bounding_client_rect();
    ElementSize::new(rect.width(), rect.height())
}

/// Live sizes of the map container and its base image.
pub struct MapElements<'a> {
    pub container: &'a web::HtmlElement,
    pub image: &'a web::HtmlImageElement,
}

impl SizeSource for MapElements<'_> {
    fn container_size(&self) -> ElementSize {
        element_size(self.container)
    }

    fn natural_size(&self) -> Option<ElementSize> {
        let (w, h) = (self.image.natural_width(), self.image.natural_height());
        (self.image.complete() && w > 0 && h > 0).then(|| ElementSize::new(w as f64, h as f64))
    }
}
