//! Board panel: the ordered page structure

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::scroll_offset;
use crate::app::App;
use crate::controller::DragItem;
use crate::models::catalog::INTRO_TYPE;
use crate::models::{Focus, PlacedCard};
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE,
    CYAN_DIM, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::truncate_chars;

/// Card height: border + content + border
const CARD_HEIGHT: u16 = 3;

pub fn render_board(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Board;
    let dragging = app.controller.dragging();
    let border_color = if dragging.is_some() {
        AMBER_WARNING
    } else if focused {
        CYAN_PRIMARY
    } else {
        BORDER_SUBTLE
    };

    let title = format!(" Structure ({}) ", app.board.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.board.is_empty() {
        let hint = match dragging {
            Some(DragItem::Definition(def)) => format!("Entrée : déposer « {} »", def.label),
            _ => "Déposez des cartes ici".to_string(),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(paragraph, middle);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let offset = scroll_offset(app.board_index, visible);
    let numbers = strate_numbers(app.board.cards());

    for (row, (i, card)) in app
        .board
        .cards()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let state = CardState {
            selected: i == app.board_index,
            focused,
            carried: matches!(dragging, Some(DragItem::Card(id)) if *id == card.id),
            drop_target: dragging.is_some() && i == app.board_index,
        };
        render_card(card_area, card, numbers[i], state, app.animation_tick, frame);
    }
}

#[derive(Debug, Clone, Copy)]
struct CardState {
    selected: bool,
    focused: bool,
    carried: bool,
    drop_target: bool,
}

/// Bracketed hint after the label: the variant when it adds information,
/// else the card type
fn card_tag(card: &PlacedCard) -> String {
    match card.variant_label() {
        Some(variant) if variant != card.label => format!(" [{}]", variant),
        Some(_) => String::new(),
        None => format!(" [{}]", card.card_type),
    }
}

/// Strate number of each card; `None` for the intro card
fn strate_numbers(cards: &[PlacedCard]) -> Vec<Option<usize>> {
    let mut counter = 0;
    cards
        .iter()
        .map(|card| {
            if card.card_type == INTRO_TYPE {
                None
            } else {
                counter += 1;
                Some(counter)
            }
        })
        .collect()
}

fn render_card(
    area: Rect,
    card: &PlacedCard,
    number: Option<usize>,
    state: CardState,
    tick: u64,
    frame: &mut Frame,
) {
    let border_color = if state.drop_target {
        get_pulse_color(tick, AMBER_WARNING, CYAN_DIM)
    } else if state.selected && state.focused {
        CYAN_PRIMARY
    } else {
        BORDER_SUBTLE
    };
    let bg_color = if state.selected { BG_TERTIARY } else { BG_SECONDARY };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let (indicator, indicator_color) = if state.carried {
        ("⇅", AMBER_WARNING)
    } else if number.is_none() {
        ("◆", CYAN_PRIMARY)
    } else {
        ("●", CYAN_DIM)
    };
    let prefix = match number {
        Some(n) => format!("#{} ", n),
        None => "Intro ".to_string(),
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let tag = card_tag(card);
    let available = inner_width
        .saturating_sub(prefix.chars().count() + 2)
        .saturating_sub(tag.chars().count());

    let line = Line::from(vec![
        Span::styled(format!("{} ", indicator), Style::default().fg(indicator_color)),
        Span::styled(
            prefix,
            Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_chars(&card.label, available),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled(tag, Style::default().fg(TEXT_MUTED)),
    ]);

    frame.render_widget(Paragraph::new(line).block(card_block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CardType;

    fn card(card_type: CardType) -> PlacedCard {
        PlacedCard {
            id: card_type.to_string(),
            card_type,
            label: card_type.to_string(),
            variant: None,
            note_text: String::new(),
        }
    }

    #[test]
    fn test_card_tag_prefers_variant_label() {
        let mut proposed = card(CardType::Texte);
        proposed.label = "Nos savoir-faire".to_string();
        proposed.variant = Some("magazine".to_string());
        assert_eq!(card_tag(&proposed), " [Strates colonnes magazine]");

        proposed.label = "Strates colonnes magazine".to_string();
        assert_eq!(card_tag(&proposed), "");

        assert_eq!(card_tag(&card(CardType::Avis)), " [avis]");
    }

    #[test]
    fn test_strate_numbers_skip_intro() {
        let cards = vec![
            card(CardType::Avis),
            card(CardType::Diaporama),
            card(CardType::Video),
        ];
        assert_eq!(strate_numbers(&cards), vec![Some(1), None, Some(2)]);
    }
}
