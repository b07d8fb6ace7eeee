pub(crate) mod layout;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::mode::{MENU, Mode};
use crate::components::rows::{RowSource, build_rows, last_word};
use crate::components::tables::{
	TABLE_BORDER_ROWS, TABLE_HEADER_ROWS, TableSpec, column_constraints, resolve_column_widths,
};
use crate::components::{
	render_activity, render_editor, render_empty, render_footer, render_menu, render_table,
};

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let panel_open = matches!(self.session.mode, Mode::Menu { .. } | Mode::Editing(_));
		let areas = layout::split(frame.area(), self.viewport, panel_open);

		self.render_header(frame, areas.header);
		if let Some(panel) = areas.panel {
			self.render_panel(frame, panel);
		}
		self.render_records(frame, areas.table);
		render_activity(frame, areas.activity, &self.activity, &self.theme);

		let focused = self.session.mode.input_focused();
		self.input.render(frame, areas.input, focused, &self.theme);
		render_footer(frame, areas.footer, &self.session.mode, &self.theme);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let title = Line::from(vec![
			Span::styled(" Hawk ", self.theme.header),
			Span::styled(format!("· {}", self.session.kind.title()), self.theme.prompt),
		]);
		frame.render_widget(Paragraph::new(title), area);

		let today = self.session.records.today().format("%d/%m/%Y").to_string();
		let date = Paragraph::new(Span::styled(format!("{today} "), self.theme.empty))
			.alignment(Alignment::Right);
		frame.render_widget(date, area);
	}

	fn render_panel(&self, frame: &mut Frame, area: Rect) {
		match &self.session.mode {
			Mode::Menu { cursor } => {
				let items = MENU.iter().map(|item| item.label()).collect::<Vec<_>>();
				render_menu(frame, area, &items, *cursor, &self.theme);
			}
			Mode::Editing(editor) => {
				let collection = self.session.collection();
				let fields = collection
					.position(editor.handle)
					.and_then(|index| collection.fields(index).ok())
					.unwrap_or_default();
				render_editor(frame, area, &fields, editor.field, editor.typing, &self.theme);
			}
			_ => {}
		}
	}

	fn render_records(&mut self, frame: &mut Frame, area: Rect) {
		let rows_height =
			usize::from(area.height).saturating_sub(TABLE_BORDER_ROWS + TABLE_HEADER_ROWS);
		let count = self.session.collection().count();
		let page = self.session.pager.page(count, rows_height);

		let collection = self.session.collection();
		let headers = collection.columns();
		let widths = column_constraints(headers);
		let column_widths = resolve_column_widths(area, &widths);
		let source = RowSource {
			rows: collection.rows(page.range()),
			matches: collection.matches(page.range()),
			leading_ellipsis: page.leading_ellipsis,
			trailing_ellipsis: page.trailing_ellipsis,
			columns: headers.len(),
		};
		let rows = build_rows(
			source,
			last_word(collection.last_query()),
			&column_widths,
			self.theme.highlight,
			self.theme.empty,
		);

		let selected = (!page.is_empty())
			.then(|| page.cursor - page.start + usize::from(page.leading_ellipsis));
		let spec = TableSpec {
			headers: headers.iter().map(ToString::to_string).collect(),
			widths,
			rows,
			title: self.table_title(count),
			selected,
			focused: self.session.mode.table_focused(),
			scroll: Some((count, page.cursor)),
		};
		render_table(frame, area, spec, &self.theme);

		if count == 0 {
			let message = if collection.is_empty() { "Nothing here yet" } else { "No results" };
			render_empty(frame, area, message, &self.theme);
		}
	}

	fn table_title(&self, count: usize) -> String {
		match &self.session.mode {
			Mode::Selecting(selection) => format!(" {} ({count}) ", selection.step.title()),
			_ => format!(
				" {} ({count}) · {} ",
				self.session.kind.title(),
				self.session.preset().label
			),
		}
	}
}
