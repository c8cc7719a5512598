// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The single screen stacks, bottom to top: the page image, the info panel
//! (top), the drawer (top right) and the control bar (bottom). The chrome
//! swallows presses, so gestures only start on the image itself.

use super::Message;
use crate::catalog::AssetLibrary;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Frame;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page_image::PageImage;
use crate::ui::{control_bar, drawer, info_panel, styles};
use crate::viewer::Viewer;
use fluent_bundle::FluentValue;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, mouse_area, text, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a Viewer,
    pub assets: &'a AssetLibrary,
    pub frame: Frame,
    /// Startup warning, already translated.
    pub notice: Option<String>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let snapshot = ctx.viewer.snapshot();

    let page = view_page(&ctx);

    let info = container(shield(
        info_panel::view(info_panel::ViewContext {
            i18n: ctx.i18n,
            visible: snapshot.info_panel_visible,
            scale: snapshot.scale,
            offset: snapshot.offset,
            notice: ctx.notice.clone(),
        })
        .map(Message::Viewer),
    ))
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::LG, spacing::MD]);

    let mut layers = vec![page, info.into()];

    // Chrome appears with the entry fade-in.
    if ctx.frame.opacity > 0.0 {
        let drawer = container(shield(
            drawer::view(drawer::ViewContext {
                i18n: ctx.i18n,
                pages: ctx.viewer.catalog().pages(),
                assets: ctx.assets,
                current_page_id: snapshot.current_page_id,
                open: snapshot.drawer_open,
                progress: ctx.frame.drawer,
            })
            .map(Message::Viewer),
        ))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(iced::Padding::ZERO.top(spacing::LG * 3.0));

        let controls = container(shield(
            control_bar::view(control_bar::ViewContext {
                i18n: ctx.i18n,
                scale: ctx.viewer.state().scale(),
            })
            .map(Message::Viewer),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(iced::Padding::ZERO.bottom(spacing::LG + spacing::XS));

        layers.push(drawer.into());
        layers.push(controls.into());
    }

    let layers = Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas)
        .into()
}

/// Captures presses that reach the chrome without hitting an enabled
/// control (disabled buttons, backgrounds, padding).
fn shield<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    mouse_area(content).on_press(Message::ChromePressed).into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page = ctx.viewer.current_page();

    match ctx.assets.get(page.image_name()) {
        Some(asset) => {
            PageImage::new(asset.handle.clone(), asset.aspect_ratio(), ctx.frame).into()
        }
        None => {
            let message = ctx.i18n.tr_with_args(
                "page-missing-image",
                &[("name", FluentValue::from(page.image_name()))],
            );
            container(text(message).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
    }
}
