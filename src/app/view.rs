// SPDX-License-Identifier: MPL-2.0
//! View composition for the application root.

use super::{App, Message};
use crate::ui::clock_canvas::ClockCanvas;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, column, container, text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let clock = ClockCanvas::new(&app.face, &app.cache, app.clock.as_ref()).into_element();

    let label = if app.highlighted {
        "Restore second hand"
    } else {
        "Highlight second hand"
    };
    let toggle = button(
        text(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::SM])
    .on_press(Message::ToggleSecondHand);

    let content = column![clock, toggle]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
