// SPDX-License-Identifier: MPL-2.0
//! Scale control bar: zoom out, reset, zoom in.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::viewer::{ControlKind, Event, Scale};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Row},
    Element, Length,
};

/// Contextual data needed to render the control bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scale: Scale,
}

/// Whether pressing `kind` at `scale` would change anything. Reset is always
/// live.
#[must_use]
pub fn is_enabled(kind: ControlKind, scale: Scale) -> bool {
    match kind {
        ControlKind::ZoomOut => !scale.is_min(),
        ControlKind::Reset => true,
        ControlKind::ZoomIn => !scale.is_max(),
    }
}

fn glyph(kind: ControlKind) -> &'static str {
    match kind {
        ControlKind::ZoomOut => "−",
        ControlKind::Reset => "⤢",
        ControlKind::ZoomIn => "+",
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let buttons = ControlKind::ALL.iter().map(|&kind| {
        let label = Row::new()
            .spacing(spacing::XXS)
            .push(text(glyph(kind)).size(typography::TITLE_MD))
            .push(text(ctx.i18n.tr(kind.i18n_key())).size(typography::CAPTION))
            .align_y(iced::alignment::Vertical::Center);

        button(container(label).align_x(Horizontal::Center).width(Length::Fill))
            .width(Length::Fixed(sizing::CONTROL_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe(
                is_enabled(kind, ctx.scale).then_some(Event::ControlPressed(kind)),
            )
            .style(styles::button::control)
            .into()
    });

    container(Row::with_children(buttons).spacing(spacing::SM))
        .padding([spacing::SM, spacing::LG - 4.0])
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::state::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn zoom_out_disabled_at_natural_size() {
        let scale = Scale::new(MIN_SCALE);
        assert!(!is_enabled(ControlKind::ZoomOut, scale));
        assert!(is_enabled(ControlKind::ZoomIn, scale));
        assert!(is_enabled(ControlKind::Reset, scale));
    }

    #[test]
    fn zoom_in_disabled_at_max() {
        let scale = Scale::new(MAX_SCALE);
        assert!(is_enabled(ControlKind::ZoomOut, scale));
        assert!(!is_enabled(ControlKind::ZoomIn, scale));
    }

    #[test]
    fn both_directions_enabled_in_between() {
        let scale = Scale::new(2.5);
        assert!(ControlKind::ALL
            .iter()
            .all(|&kind| is_enabled(kind, scale)));
    }
}
