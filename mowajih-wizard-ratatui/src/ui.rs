//! Rendering of the navigation shell and both views.

use mowajih::{
    InputAffordance, NAV_LINKS, NO_ANSWERS, NO_RECOMMENDATIONS, QuestionnaireView,
    RecommendationService, Route, Session, SummaryView,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{Theme, UiState};

const PLACEHOLDER_OPTION: &str = "Select an option";

pub(crate) fn draw_ui<S: RecommendationService>(
    frame: &mut Frame,
    ui: &UiState,
    session: &Session<S>,
    theme: &Theme,
    title: &str,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(frame.area());

    draw_sidebar(frame, columns[0], session, theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Content
            Constraint::Length(2), // Status
            Constraint::Length(2), // Help
        ])
        .split(columns[1]);

    let header = Paragraph::new(title.to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    let help_text = match session.route() {
        Route::Questionnaire => draw_questionnaire(frame, chunks[1], ui, session, theme),
        Route::Summary => draw_summary(frame, chunks[1], ui, &session.summary_view(), theme),
    };

    let status = if ui.busy {
        Paragraph::new("Submitting your answers...").style(Style::default().fg(theme.secondary))
    } else if let Some(notice) = session.notice() {
        Paragraph::new(notice.to_string()).style(Style::default().fg(theme.error).bold())
    } else {
        Paragraph::new("")
    };
    frame.render_widget(status.alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn draw_sidebar<S: RecommendationService>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S>,
    theme: &Theme,
) {
    let items: Vec<ListItem> = NAV_LINKS
        .iter()
        .map(|link| {
            let style = if session.navigator().is_active(link) {
                Style::default().fg(theme.highlight).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!(" {}", link.label)).style(style)
        })
        .collect();

    let nav = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Navigation ")
            .title_style(Style::default().fg(theme.primary).bold()),
    );
    frame.render_widget(nav, area);
}

fn draw_questionnaire<S: RecommendationService>(
    frame: &mut Frame,
    area: Rect,
    ui: &UiState,
    session: &Session<S>,
    theme: &Theme,
) -> &'static str {
    let QuestionnaireView::Prompt {
        prompt,
        input,
        response: _,
        submit_label,
        submit_enabled,
        progress: (current, total),
    } = session.questionnaire_view()
    else {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(theme.text))
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return "Tab: Summary  Esc: Quit";
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(3), // Question prompt
            Constraint::Min(3),    // Input area
            Constraint::Length(1), // Submit button
        ])
        .split(area);

    let progress = Paragraph::new(format!(" {current} / {total} "))
        .style(Style::default().fg(theme.secondary))
        .alignment(Alignment::Center);
    frame.render_widget(progress, chunks[0]);

    let prompt = Paragraph::new(prompt)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, chunks[1]);

    let help = match &input {
        InputAffordance::TextField | InputAffordance::NumberField => {
            let title = if matches!(input, InputAffordance::NumberField) {
                " Enter a number... "
            } else {
                " Enter your response... "
            };
            let input_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title)
                .title_style(Style::default().fg(theme.secondary));
            let input_widget = Paragraph::new(ui.draft.clone())
                .style(Style::default().fg(theme.text))
                .block(input_block);
            frame.render_widget(input_widget, chunks[2]);

            let cursor = ui.cursor_pos.min(ui.draft.chars().count()) as u16;
            frame.set_cursor_position((chunks[2].x + 1 + cursor, chunks[2].y + 1));
            "Enter: Next  Tab: Summary  Esc: Quit"
        }
        InputAffordance::Choice { options } => {
            let items: Vec<ListItem> = std::iter::once(PLACEHOLDER_OPTION)
                .chain(options.iter().map(String::as_str))
                .enumerate()
                .map(|(i, option)| {
                    let style = if i == ui.selected_option {
                        Style::default().fg(theme.highlight).bold()
                    } else if i == 0 {
                        Style::default().fg(theme.disabled)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("  {option}")).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(" Select Option ")
                        .title_style(Style::default().fg(theme.secondary)),
                )
                .highlight_symbol("► ");

            let mut list_state = ListState::default();
            list_state.select(Some(ui.selected_option));
            frame.render_stateful_widget(list, chunks[2], &mut list_state);
            "↑/↓: Select  Enter: Next  Tab: Summary  Esc: Quit"
        }
    };

    let button_style = if submit_enabled && !ui.busy {
        Style::default().fg(theme.success).bold()
    } else {
        Style::default().fg(theme.disabled)
    };
    let button = Paragraph::new(format!("[ {submit_label} ]"))
        .style(button_style)
        .alignment(Alignment::Center);
    frame.render_widget(button, chunks[3]);

    help
}

fn draw_summary(
    frame: &mut Frame,
    area: Rect,
    ui: &UiState,
    summary: &SummaryView,
    theme: &Theme,
) -> &'static str {
    let heading = Style::default().fg(theme.primary).bold();
    let label = Style::default().fg(theme.secondary).bold();
    let text_style = Style::default().fg(theme.text);
    let muted = Style::default().fg(theme.disabled);

    let mut lines = vec![Line::styled("Your Answers", heading)];
    if summary.answers.is_empty() {
        lines.push(Line::styled(NO_ANSWERS, muted));
    }
    for (prompt, value) in &summary.answers {
        lines.push(Line::styled(prompt.clone(), text_style.bold()));
        lines.push(Line::styled(format!("  {value}"), text_style));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Recommended Programs", heading));
    if summary.recommendations.is_empty() {
        lines.push(Line::styled(NO_RECOMMENDATIONS, muted));
    }
    for card in &summary.recommendations {
        lines.push(Line::default());
        lines.push(Line::styled(
            card.title.clone(),
            Style::default().fg(theme.highlight).bold(),
        ));
        lines.push(Line::styled(card.description.clone(), text_style));
        for (name, value) in [
            ("Opportunities: ", &card.opportunities),
            ("Access Conditions: ", &card.access_conditions),
            ("Relevance Score: ", &card.score),
        ] {
            lines.push(Line::from(vec![
                Span::styled(name, label),
                Span::styled(value.clone(), text_style),
            ]));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((ui.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .title(" Summary ")
                .title_style(Style::default().fg(theme.success).bold()),
        );
    frame.render_widget(paragraph, area);

    "↑/↓: Scroll  r: Restart  Tab: Questionnaire  Esc: Quit"
}

#[cfg(test)]
mod tests {
    use mowajih::{Question, Recommendation, TestService};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(session: &Session<TestService>, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| draw_ui(frame, ui, session, &Theme::default(), "Mowajih"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn loading_without_questions() {
        let session = Session::new(TestService::new());
        let screen = render(&session, &UiState::default());
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Questionnaire"));
        assert!(screen.contains("Summary"));
    }

    #[test]
    fn question_with_choices() {
        let mut session = Session::new(TestService::new());
        session.load_questions(vec![Question::dropdown(2, "Pick one", ["A", "B"])]);
        let screen = render(&session, &UiState::default());

        assert!(screen.contains("Pick one"));
        assert!(screen.contains(PLACEHOLDER_OPTION));
        assert!(screen.contains("[ Submit ]"));
        assert!(screen.contains(" 1 / 1 "));
    }

    #[test]
    fn empty_summary_renders_no_data() {
        let session = Session::new(TestService::new()).starting_at(Route::Summary);
        let screen = render(&session, &UiState::default());
        assert!(screen.contains(NO_ANSWERS));
        assert!(screen.contains(NO_RECOMMENDATIONS));
    }

    #[tokio::test]
    async fn summary_shows_recommendation_fields() {
        let service = TestService::new().with_recommendations(vec![Recommendation {
            title: Some("Prog1".into()),
            description: Some("d".into()),
            opportunities: vec!["x".into()],
            access_conditions: Some("none".into()),
            score: Some(0.87),
        }]);
        let mut session = Session::new(service);
        session.load_questions(vec![
            Question::text(1, "What is your name?"),
            Question::dropdown(2, "Pick one", ["A", "B"]),
        ]);
        for value in ["Ada", "B"] {
            session.set_response(value);
            session.next().await;
        }

        let screen = render(&session, &UiState::default());
        for expected in ["Prog1", "Opportunities: x", "Access Conditions: none", "0.87", "Ada"] {
            assert!(screen.contains(expected), "missing {expected:?}:\n{screen}");
        }
    }

    #[tokio::test]
    async fn notice_is_shown_after_failed_submission() {
        let mut session = Session::new(TestService::new().failing("refused"));
        session.load_questions(vec![Question::text(1, "Name?")]);
        session.set_response("Ada");
        session.next().await;

        let screen = render(&session, &UiState::default());
        assert!(screen.contains("Could not submit your answers"));
        assert!(screen.contains("[ Retry ]"));
    }
}
