// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a control panel under the toast board.

use super::Message;
use crate::domain::alert::Severity;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::toasts::{self, severity_color};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length};

pub fn view<'a>(
    board: Element<'a, toasts::Message>,
    total: usize,
    announcement: Option<String>,
) -> Element<'a, Message> {
    let plain = severity_row(Message::Show);
    let grouped = severity_row(Message::ShowGrouped);

    let close_all = action_button("Close all", palette::GRAY_400, Message::CloseAll);
    let export = action_button(
        "Export diagnostics",
        palette::NEUTRAL,
        Message::ExportDiagnostics,
    );
    let actions = Row::new().spacing(spacing::XS).push(close_all).push(export);

    // Polite live region: repeats the newest alert for screen readers.
    let status = match announcement {
        Some(text) => format!("{total} on screen · {text}"),
        None => format!("{total} on screen · Esc closes all"),
    };

    let controls = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Alerts").size(typography::TITLE_MD))
        .push(Text::new("Show").size(typography::BODY))
        .push(plain)
        .push(Text::new("Show grouped").size(typography::BODY))
        .push(grouped)
        .push(actions)
        .push(Text::new(status).size(typography::CAPTION));

    let panel = Container::new(
        Container::new(controls)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(panel)
        .push(board.map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn severity_row<'a>(message: fn(Severity) -> Message) -> Row<'a, Message> {
    Severity::INDEXED
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &severity| {
            row.push(action_button(
                severity.as_str(),
                severity_color(severity),
                message(severity),
            ))
        })
}

fn action_button<'a>(label: &str, color: Color, message: Message) -> Element<'a, Message> {
    button(Text::new(label.to_string()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::accent(color))
        .on_press(message)
        .into()
}
