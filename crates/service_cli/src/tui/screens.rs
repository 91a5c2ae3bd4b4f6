//! Screen rendering functions for the TUI.

use super::form::InputField;
use super::state::{AppState, Dialog, Screen};
use cashflow_core::valuation::ValuationReport;
use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table, Wrap,
    },
};

/// Draw the whole application: header, current screen, footer and any dialog
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state);

    match state.screen {
        Screen::Calculator => draw_calculator(frame, chunks[1], state),
        Screen::Chart => draw_chart(frame, chunks[1], state),
        Screen::Schedule => draw_schedule(frame, chunks[1], state),
    }

    draw_footer(frame, chunks[2], state.screen);

    if let Some(dialog) = &state.dialog {
        draw_dialog(frame, area, dialog);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " NPV and FV Calculator - {} ({} periods) ",
        state.screen.title(),
        state.form.convention()
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let footer_text = match screen {
        Screen::Calculator => {
            " [F1]Calc [F2]Chart [F3]Schedule [F4]Convention [F5]Calculate | [Tab]Next [Enter]Set/Calc | [Esc]Quit "
        }
        Screen::Chart | Screen::Schedule => {
            " [F1]Calc [F2]Chart [F3]Schedule [F4]Convention | [Up/Down]Scroll | [q]Quit "
        }
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Draw the input form and the NPV/FV labels
pub fn draw_calculator(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let form = &state.form;
    let fields = [form.periods_field(), form.rate_field()]
        .into_iter()
        .chain(form.cash_flow_fields().iter());

    // Keep the focused field visible when the form is taller than the area
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let skip = (form.focus_index() + 1).saturating_sub(visible.max(1));

    let lines: Vec<Line> = fields
        .enumerate()
        .skip(skip)
        .map(|(i, field)| field_line(field, i == form.focus_index()))
        .collect();

    let inputs = Paragraph::new(lines)
        .block(Block::default().title(" Inputs ").borders(Borders::ALL));
    frame.render_widget(inputs, chunks[0]);

    let results = Paragraph::new(vec![
        Line::from(result_span(state.npv_label(), state.report.as_ref().map(|r| r.npv))),
        Line::from(result_span(state.fv_label(), state.report.as_ref().map(|r| r.fv))),
    ])
    .block(Block::default().title(" Results ").borders(Borders::ALL));
    frame.render_widget(results, chunks[1]);
}

fn field_line(field: &InputField, focused: bool) -> Line<'_> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:>28}: ", field.label), label_style),
        Span::raw(field.value.as_str()),
        Span::styled(cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])
}

fn result_span(text: String, value: Option<f64>) -> Span<'static> {
    let color = match value {
        Some(v) if v < 0.0 => Color::Red,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };
    Span::styled(format!(" {text}"), Style::default().fg(color))
}

/// Draw the cash-flow timeline next to the discount/compound factors
pub fn draw_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(report) = &state.report else {
        draw_placeholder(frame, area, " Cash Flows Timeline ");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    draw_cash_flow_chart(frame, charts[0], report, state.decimals);
    draw_factor_chart(frame, charts[1], report);

    // NPV bottom left, FV bottom right
    let summary = Block::default().borders(Borders::ALL);
    let inner = summary.inner(chunks[1]);
    frame.render_widget(summary, chunks[1]);
    frame.render_widget(
        Paragraph::new(state.npv_label()).alignment(Alignment::Left),
        inner,
    );
    frame.render_widget(
        Paragraph::new(state.fv_label()).alignment(Alignment::Right),
        inner,
    );
}

fn draw_cash_flow_chart(frame: &mut Frame, area: Rect, report: &ValuationReport, decimals: usize) {
    let cash_flows = report.cash_flow_points();
    let present_values = report.present_value_points();

    let datasets = vec![
        Dataset::default()
            .name("Cash Flow")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&cash_flows),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&cash_flows),
        Dataset::default()
            .name("Present Value")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&present_values),
    ];

    let x_bounds = x_bounds(report);
    let y_bounds = value_bounds(
        cash_flows
            .iter()
            .chain(present_values.iter())
            .map(|&(_, y)| y),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Cash Flows Timeline ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Periods")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(period_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Cash Flows")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(value_labels(y_bounds, decimals)),
        );

    frame.render_widget(chart, area);
}

fn draw_factor_chart(frame: &mut Frame, area: Rect, report: &ValuationReport) {
    let discount = report.discount_factor_points();
    let compound = report.compound_factor_points();

    let datasets = vec![
        Dataset::default()
            .name("Discount 1/(1+r)^t")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&discount),
        Dataset::default()
            .name("Compound (1+r)^t")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&compound),
    ];

    let x_bounds = x_bounds(report);
    let y_bounds = value_bounds(discount.iter().chain(compound.iter()).map(|&(_, y)| y));

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Factors ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Periods")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(period_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(value_labels(y_bounds, 3)),
        );

    frame.render_widget(chart, area);
}

/// Draw the per-period valuation table
pub fn draw_schedule(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(report) = &state.report else {
        draw_placeholder(frame, area, " Schedule ");
        return;
    };

    let d = state.decimals;
    let header_cells = ["Period", "Cash Flow", "DF", "PV", "CF", "FV"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = report
        .periods
        .iter()
        .skip(state.schedule_offset)
        .map(|p| {
            Row::new(vec![
                Cell::from(p.time.to_string()),
                Cell::from(format!("{:.*}", d, p.cash_flow)),
                Cell::from(format!("{:.6}", p.discount_factor)),
                Cell::from(format!("{:.*}", d, p.present_value)).style(Style::default().fg(
                    if p.present_value >= 0.0 {
                        Color::Green
                    } else {
                        Color::Red
                    },
                )),
                Cell::from(format!("{:.6}", p.compound_factor)),
                Cell::from(format!("{:.*}", d, p.future_value)),
            ])
        });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Min(14),
    ];

    let title = format!(
        " Schedule | rate {} | FV at period {} ",
        report.rate, report.horizon
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let text = Paragraph::new(Line::from(Span::styled(
        "No results yet - fill in the form and press Enter or F5",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup = centered_rect(60, 30, area);
    let mut lines: Vec<Line> = dialog.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] OK",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

/// Rectangle of `percent_x` by `percent_y` centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// X axis from the first to the last period, never degenerate
fn x_bounds(report: &ValuationReport) -> [f64; 2] {
    let first = report.periods.first().map_or(0.0, |p| p.time as f64);
    let last = report.periods.last().map_or(first, |p| p.time as f64);
    if last > first {
        [first, last]
    } else {
        [first - 0.5, first + 0.5]
    }
}

/// Y axis covering every value with 10% headroom, never degenerate
pub(crate) fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        let pad = max.abs().max(1.0) * 0.1;
        return [min - pad, max + pad];
    }
    [min - span * 0.1, max + span * 0.1]
}

fn period_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|t| Span::raw(format!("{:.0}", t)))
        .collect()
}

fn value_labels(bounds: [f64; 2], decimals: usize) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.*}", decimals, v)))
        .collect()
}
