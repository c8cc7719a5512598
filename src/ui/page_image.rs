// SPDX-License-Identifier: MPL-2.0
//! Widget drawing the current page with the viewer transform applied.
//!
//! The image is fitted into the pane (minus a margin), then scaled about the
//! pane center and shifted by the pan offset. The offset is expressed at
//! natural size, so it grows with the scale. Anything outside the pane is
//! clipped.

use crate::ui::animation::Frame;
use crate::ui::design_tokens::{opacity, palette, radius, spacing};
use iced::advanced::image::Renderer as ImageRenderer;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::widget::image;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Shadow, Size, Theme, Vector};

pub struct PageImage {
    handle: image::Handle,
    aspect_ratio: f32,
    frame: Frame,
}

impl PageImage {
    #[must_use]
    pub fn new(handle: image::Handle, aspect_ratio: f32, frame: Frame) -> Self {
        Self {
            handle,
            aspect_ratio,
            frame,
        }
    }
}

/// Largest rectangle of the given aspect ratio centered in `area`.
fn fit(area: Rectangle, aspect_ratio: f32) -> Rectangle {
    if area.width <= 0.0 || area.height <= 0.0 || aspect_ratio <= 0.0 {
        return Rectangle::new(area.center(), Size::ZERO);
    }

    let size = if area.width / area.height > aspect_ratio {
        Size::new(area.height * aspect_ratio, area.height)
    } else {
        Size::new(area.width, area.width / aspect_ratio)
    };
    let center = area.center();

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Where the image lands inside `bounds` for the given transform.
#[must_use]
pub fn image_bounds(bounds: Rectangle, aspect_ratio: f32, scale: f32, offset: Vector) -> Rectangle {
    let margin = spacing::MD.min(bounds.width / 4.0).min(bounds.height / 4.0);
    let area = Rectangle {
        x: bounds.x + margin,
        y: bounds.y + margin,
        width: bounds.width - 2.0 * margin,
        height: bounds.height - 2.0 * margin,
    };
    let fitted = fit(area, aspect_ratio);

    let size = Size::new(fitted.width * scale, fitted.height * scale);
    let center = bounds.center() + offset * scale;

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

impl<Message> Widget<Message, Theme, iced::Renderer> for PageImage {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let target = image_bounds(
            bounds,
            self.aspect_ratio,
            self.frame.scale,
            Vector::new(self.frame.offset_x, self.frame.offset_y),
        );
        let alpha = self.frame.opacity;
        if alpha <= 0.0 {
            return;
        }

        renderer.with_layer(bounds, |renderer| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: target,
                    border: iced::Border {
                        radius: radius::MD.into(),
                        ..iced::Border::default()
                    },
                    shadow: Shadow {
                        color: Color {
                            a: opacity::OVERLAY_SUBTLE * alpha,
                            ..palette::BLACK
                        },
                        offset: Vector::new(2.0, 2.0),
                        blur_radius: 12.0,
                    },
                    snap: true,
                },
                Color::TRANSPARENT,
            );

            let image = iced::advanced::image::Image::<image::Handle> {
                handle: self.handle.clone(),
                filter_method: iced::advanced::image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: alpha,
                snap: true,
                border_radius: radius::MD.into(),
            };

            renderer.draw_image(image, target, bounds);
        });
    }
}

impl<'a, Message: 'a> From<PageImage> for Element<'a, Message> {
    fn from(widget: PageImage) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(432.0, 632.0))
    }

    #[test]
    fn natural_size_fits_inside_margin() {
        // Square image in a portrait pane: width-limited.
        let rect = image_bounds(pane(), 1.0, 1.0, Vector::ZERO);
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 400.0);
        assert_eq!(rect.center(), pane().center());
    }

    #[test]
    fn wide_pane_is_height_limited() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(1032.0, 232.0));
        let rect = image_bounds(bounds, 1.0, 1.0, Vector::ZERO);
        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.width, 200.0);
    }

    #[test]
    fn scale_grows_about_pane_center() {
        let rect = image_bounds(pane(), 1.0, 2.0, Vector::ZERO);
        assert_eq!(rect.width, 800.0);
        assert_eq!(rect.center(), pane().center());
    }

    #[test]
    fn offset_is_multiplied_by_scale() {
        let rect = image_bounds(pane(), 1.0, 2.0, Vector::new(30.0, 40.0));
        let center = pane().center();
        assert_eq!(rect.center(), Point::new(center.x + 60.0, center.y + 80.0));
    }

    #[test]
    fn empty_pane_yields_empty_image() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::ZERO);
        let rect = image_bounds(bounds, 1.5, 1.0, Vector::ZERO);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
