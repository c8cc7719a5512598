// SPDX-License-Identifier: MPL-2.0
//! Thumbnail drawer anchored to the right edge of the window.
//!
//! Closed, only the chevron handle shows. Opening slides the strip in and
//! fades the thumbnails with it; `progress` is the tweened open amount.

use crate::catalog::{AssetLibrary, Page, PageId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::viewer::Event;
use fluent_bundle::FluentValue;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, image, text, tooltip, Row},
    Element, Length,
};

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pages: &'a [Page],
    pub assets: &'a AssetLibrary,
    pub current_page_id: PageId,
    pub open: bool,
    /// 0.0 = closed, 1.0 = fully open.
    pub progress: f32,
}

/// Visible width for a given open amount.
#[must_use]
pub fn visible_width(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    sizing::DRAWER_HANDLE_WIDTH + (sizing::DRAWER_WIDTH - sizing::DRAWER_HANDLE_WIDTH) * progress
}

fn thumbnail<'a>(ctx: &ViewContext<'a>, page: &'a Page) -> Element<'a, Event> {
    let label = ctx.i18n.tr_with_args(
        "drawer-page",
        &[("id", FluentValue::from(page.id().value()))],
    );
    let content: Element<'a, Event> = match ctx.assets.get(&page.thumbnail_name()) {
        Some(asset) => image(asset.handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .opacity(ctx.progress)
            .into(),
        None => container(text(label.clone()).size(typography::CAPTION))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let selected = page.id() == ctx.current_page_id;
    let thumb = button(content)
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(selected));
    // Hidden thumbnails must not be tappable.
    let thumb = if ctx.progress > opacity::OVERLAY_SUBTLE {
        thumb.on_press(Event::ThumbnailSelected(page.id()))
    } else {
        thumb
    };

    tooltip(thumb, text(label), tooltip::Position::Bottom).into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Event> {
    let (chevron, hint) = if ctx.open {
        ("›", "drawer-close")
    } else {
        ("‹", "drawer-open")
    };

    let handle = tooltip(
        button(
            container(text(chevron).size(typography::TITLE_MD))
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .width(Length::Fixed(sizing::DRAWER_HANDLE_WIDTH))
        .height(Length::Fill)
        .on_press(Event::DrawerHandleTapped)
        .style(styles::button::drawer_handle),
        text(ctx.i18n.tr(hint)),
        tooltip::Position::Left,
    );

    let thumbnails = ctx.pages.iter().map(|page| thumbnail(&ctx, page));

    let strip = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(handle)
        .extend(thumbnails);

    container(strip)
        .padding([spacing::MD, 0.0])
        .width(Length::Fixed(visible_width(ctx.progress)))
        .height(Length::Fixed(sizing::THUMBNAIL + 2.0 * spacing::MD + 2.0 * spacing::XXS))
        .clip(true)
        .style(styles::container::drawer(ctx.progress.max(opacity::OVERLAY_MEDIUM)))
        .into()
}
