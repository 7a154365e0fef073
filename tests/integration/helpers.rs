use chatpane::app::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Build a minimal `App` for integration testing.
/// No real terminal -- just state with a mounted 120x40 viewport.
pub fn test_app() -> App {
    App::test_default()
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

/// Render one frame into the test backend.
pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| chatpane::ui::render(f, app)).expect("draw");
}

/// Render until the smooth feed scroll has settled (bounded).
pub fn draw_settled(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    for _ in 0..40 {
        draw(terminal, app);
        if app.scroll_offset == app.scroll_target {
            break;
        }
    }
}

/// The text content of one backend row, right-trimmed.
pub fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_owned()
}

pub fn key(app: &mut App, code: KeyCode) {
    chatpane::app::handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn click(app: &mut App, column: u16, row: u16) {
    chatpane::app::handle_terminal_event(
        app,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }),
    );
}

pub fn wheel(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    chatpane::app::handle_terminal_event(
        app,
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }),
    );
}
