//! TUI rendering
//!
//! Single-screen layout: banner row, quote display, filter line, add form,
//! help bar. All data comes from the controller's `AppSnapshot`; the input
//! form state lives on the UI thread.

use ratatui::prelude::*;
use ratatui::widgets::*;

use quoth::select::ALL_CATEGORIES;

use crate::app::state::{AppSnapshot, QuoteDisplay};

/// Message shown when the current filter matches nothing
pub const EMPTY_FILTER_TEXT: &str = "No quotes in this category yet.";

const IDLE_TEXT: &str = "Press 'n' for a quote.";

/// Which form field is being edited, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    EditText,
    EditCategory,
}

/// Add-form state owned by the UI thread
#[derive(Debug, Default)]
pub struct InputState {
    pub mode: InputMode,
    pub text: String,
    pub category: String,
}

impl InputState {
    /// Leave the form and discard its contents
    pub fn reset(&mut self) {
        self.mode = InputMode::Normal;
        self.text.clear();
        self.category.clear();
    }
}

pub fn draw(f: &mut Frame, snapshot: &AppSnapshot, input: &InputState) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Quoth v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // banner (blank when none)
        Constraint::Min(5),    // quote display
        Constraint::Length(1), // filter / count line
        Constraint::Length(3), // add form
        Constraint::Length(1), // help bar
    ])
    .split(inner);

    draw_banner(f, snapshot, chunks[0]);
    draw_quote(f, snapshot, chunks[1]);
    draw_filter_line(f, snapshot, chunks[2]);
    draw_form(f, input, chunks[3]);
    draw_help(f, input, chunks[4]);
}

fn draw_banner(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let Some(banner) = &snapshot.banner else {
        return;
    };

    let style = if banner.is_error {
        Style::default().fg(Color::White).bg(Color::Red).bold()
    } else {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    };

    let line = Line::from(Span::styled(format!(" {} ", banner.message), style));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_quote(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let block = Block::default()
        .title(" Quote ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = match &snapshot.display {
        QuoteDisplay::Quote(quote) => {
            Line::from(Span::styled(quote.to_string(), Style::default().fg(Color::White)))
        }
        QuoteDisplay::EmptyCategory => Line::from(Span::styled(
            EMPTY_FILTER_TEXT,
            Style::default().fg(Color::Yellow),
        )),
        QuoteDisplay::Idle => Line::from(Span::styled(
            IDLE_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_filter_line(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let line = Line::from(vec![
        Span::styled("  Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(&snapshot.filter, Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled("Quotes: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            snapshot.quote_count.to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled("Categories: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            // "all" plus each real category
            (snapshot.categories.len() + 1).to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw(" ("),
        Span::styled(ALL_CATEGORIES, Style::default().fg(Color::DarkGray)),
        Span::raw(if snapshot.categories.is_empty() { "" } else { ", " }),
        Span::styled(
            snapshot.categories.join(", "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(")"),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_form(f: &mut Frame, input: &InputState, area: Rect) {
    if input.mode == InputMode::Normal {
        return;
    }

    let field = |label: &str, value: &str, active: bool| {
        let value_style = if active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{value}{cursor}"), value_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "  Add a quote",
            Style::default().fg(Color::Cyan).bold(),
        )),
        field("Text", &input.text, input.mode == InputMode::EditText),
        field(
            "Category",
            &input.category,
            input.mode == InputMode::EditCategory,
        ),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_help(f: &mut Frame, input: &InputState, area: Rect) {
    let help = if input.mode == InputMode::Normal {
        Line::from(vec![
            Span::styled("  'n' ", Style::default().fg(Color::Yellow)),
            Span::raw("quote  "),
            Span::styled("'f' ", Style::default().fg(Color::Yellow)),
            Span::raw("filter  "),
            Span::styled("'a' ", Style::default().fg(Color::Yellow)),
            Span::raw("add  "),
            Span::styled("'i' ", Style::default().fg(Color::Yellow)),
            Span::raw("import  "),
            Span::styled("'e' ", Style::default().fg(Color::Yellow)),
            Span::raw("export  "),
            Span::styled("'s' ", Style::default().fg(Color::Yellow)),
            Span::raw("sync  "),
            Span::styled("'q' ", Style::default().fg(Color::Yellow)),
            Span::raw("quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("  Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("next field / submit  "),
            Span::styled("Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("cancel"),
        ])
    };

    f.render_widget(Paragraph::new(help), area);
}
