//! Activity panel showing the captured log records.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::style::Theme;

/// Height of the activity panel, borders included.
pub const ACTIVITY_HEIGHT: u16 = 6;

pub fn render_activity(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	let block = Block::bordered()
		.border_set(border::ROUNDED)
		.border_style(theme.border())
		.title("Activity");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.output_separator(' ')
		.output_timestamp(Some("%H:%M".to_string()))
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.style(theme.prompt)
		.style_error(Style::new().fg(Color::Red))
		.style_warn(Style::new().fg(Color::Yellow))
		.style_info(theme.prompt)
		.style_debug(theme.empty)
		.style_trace(theme.empty)
		.state(state);
	frame.render_widget(widget, area);
}
