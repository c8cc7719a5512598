// SPDX-License-Identifier: MPL-2.0
//! Readout of the current scale and pan offset.
//!
//! A small toggle stays on screen at all times; the readout next to it shows
//! or hides with the info-panel flag.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::viewer::{Event, Offset};
use fluent_bundle::FluentValue;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Row},
    Element, Length,
};

/// Contextual data needed to render the info panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visible: bool,
    pub scale: f32,
    pub offset: Offset,
    /// Startup warning, already translated.
    pub notice: Option<String>,
}

/// `1.0` -> `"1.00"`.
#[must_use]
pub fn format_scale(scale: f32) -> String {
    format!("{scale:.2}")
}

/// Offsets are shown in whole logical pixels.
#[must_use]
pub fn format_offset(value: f32) -> String {
    // Avoids printing "-0".
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let toggle = button(text("ⓘ").size(typography::TITLE_MD))
        .on_press(Event::InfoPanelToggled)
        .style(styles::button::drawer_handle)
        .padding(spacing::XXS);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle);

    if ctx.visible {
        let scale = ctx.i18n.tr_with_args(
            "info-scale",
            &[("scale", FluentValue::from(format_scale(ctx.scale)))],
        );
        let offset = ctx.i18n.tr_with_args(
            "info-offset",
            &[
                ("x", FluentValue::from(format_offset(ctx.offset.x))),
                ("y", FluentValue::from(format_offset(ctx.offset.y))),
            ],
        );

        row = row
            .push(text(scale).size(typography::BODY))
            .push(text(offset).size(typography::BODY));
    }

    if let Some(notice) = ctx.notice {
        row = row.push(
            container(text(notice).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::container::notice),
        );
    }

    container(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Shrink)
        .style(styles::container::info_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_two_decimals() {
        assert_eq!(format_scale(1.0), "1.00");
        assert_eq!(format_scale(2.5), "2.50");
    }

    #[test]
    fn offset_is_rounded() {
        assert_eq!(format_offset(30.4), "30");
        assert_eq!(format_offset(-12.6), "-13");
    }

    #[test]
    fn negative_zero_offset_prints_zero() {
        assert_eq!(format_offset(-0.2), "0");
    }
}
