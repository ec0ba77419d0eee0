use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{Focus, TuiView};

pub(crate) fn draw(f: &mut Frame, view: &TuiView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_form(f, chunks[0], view);
    draw_list(f, chunks[1], view);
    draw_total(f, chunks[2], view);
    draw_footer(f, chunks[3], view);
}

fn draw_form(f: &mut Frame, area: Rect, view: &TuiView) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let name_title = match view.editing_id {
        Some(id) => format!("Name (editing item {})", id),
        None => "Name".to_string(),
    };

    f.render_widget(
        field_widget(&view.name_input, &name_title, view.focus == Focus::Name),
        fields[0],
    );
    f.render_widget(
        field_widget(&view.price_input, "Price", view.focus == Focus::Price),
        fields[1],
    );
}

fn field_widget<'a>(value: &'a str, title: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}

fn draw_list(f: &mut Frame, area: Rect, view: &TuiView) {
    let block = Block::default().borders(Borders::ALL).title("Items");

    if !view.list_visible {
        let placeholder = Paragraph::new(Text::from(
            "No items yet. Type a name and a price, then press Enter.",
        ))
        .style(Style::default().add_modifier(Modifier::DIM))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut style = Style::default();
            if view.focus == Focus::List && index == view.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if view.editing_id == Some(item.id) {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            Line::styled(
                format!(
                    " {:>4}  {}: {}{}",
                    item.id, item.name, view.currency, item.price
                ),
                style,
            )
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_total(f: &mut Frame, area: Rect, view: &TuiView) {
    let total = Line::from(vec![
        Span::styled("Total: ", Style::default().add_modifier(Modifier::DIM)),
        Span::styled(
            format!("{}{}", view.currency, view.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(total), area);
}

fn draw_footer(f: &mut Frame, area: Rect, view: &TuiView) {
    let hints = if view.edit_mode {
        "Enter: update | Ctrl-D: delete | Esc: cancel"
    } else {
        "Enter: add | Tab: focus | e: edit row | Ctrl-K: clear all | Esc: quit"
    };

    let mut lines = vec![Line::from(hints)];
    if let Some(status) = &view.status {
        lines.push(Line::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        ));
    }

    let footer = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
