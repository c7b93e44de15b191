use crate::ui_state::{DisplayTheme, GroupItem, GroupView, Pane, UiState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, HighlightSpacing, List, ListItem, Padding, Paragraph, StatefulWidget,
        Tabs, Widget, Wrap,
    },
};

const GROUP_WIDTH: u16 = 24;
const ON_ICON: &str = "●";
const OFF_ICON: &str = "○";
const MORE_ICON: &str = "»";

pub struct TabBar;
impl StatefulWidget for TabBar {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(&Pane::Catalog);

        let titles = state
            .catalog
            .tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| match idx < 9 {
                true => Line::from(format!("{} {}", idx + 1, tab.name)),
                false => Line::from(tab.name.clone()),
            })
            .collect::<Vec<_>>();

        Tabs::new(titles)
            .select(state.catalog.selected_tab())
            .style(Style::new().fg(theme.text_faded))
            .highlight_style(Style::new().fg(theme.text_highlighted).bold())
            .divider(Span::from(" ✧ ").fg(theme.text_faded))
            .block(
                Block::bordered()
                    .borders(theme.border_display)
                    .border_type(theme.border_type)
                    .border_style(theme.border)
                    .bg(theme.bg_panel),
            )
            .render(area, buf);
    }
}

pub struct CatalogGroups;
impl StatefulWidget for CatalogGroups {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.get_theme(&Pane::Catalog);
        let focused = state.get_pane() == Pane::Catalog;

        let keymaps = match focused {
            true => Line::from(" [⏎] toggle  [h/l] group  [ [ ] ] tab ")
                .centered()
                .fg(theme.text_faded),
            false => Line::default(),
        };

        let title = match state.catalog.current_tab() {
            Some(tab) => format!(" ⟪ {} ⟫ ", tab.name),
            None => String::from(" ⟪ empty ⟫ "),
        };

        let block = Block::bordered()
            .borders(theme.border_display)
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_top(Line::from(title).left_aligned().fg(theme.text_focused))
            .title_bottom(keymaps)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let library_root = state.library_root.clone();
        let Some(tab) = state.catalog.current_tab_mut() else {
            empty_message(&format!("No sounds found in {library_root}"), &theme)
                .render(inner, buf);
            return;
        };

        if tab.groups.is_empty() {
            empty_message("This category has no subfolders", &theme).render(inner, buf);
            return;
        }

        // Keep the selected group on screen
        let fit = (inner.width / GROUP_WIDTH).max(1) as usize;
        if tab.group_pos < tab.group_offset {
            tab.group_offset = tab.group_pos;
        } else if tab.group_pos >= tab.group_offset + fit {
            tab.group_offset = tab.group_pos + 1 - fit;
        }

        let visible = tab.groups.len().saturating_sub(tab.group_offset).min(fit);
        let columns = Layout::horizontal(vec![Constraint::Length(GROUP_WIDTH); visible]).split(inner);

        let offset = tab.group_offset;
        let selected = tab.group_pos;
        for (column, idx) in columns.iter().zip(offset..) {
            let is_selected = focused && idx == selected;
            render_group(&mut tab.groups[idx], is_selected, &theme, *column, buf);
        }
    }
}

fn render_group(
    group: &mut GroupView,
    is_selected: bool,
    theme: &DisplayTheme,
    area: Rect,
    buf: &mut Buffer,
) {
    let items = group
        .items()
        .map(|item| match item {
            GroupItem::Toggle(toggle) => {
                let (icon, color) = match toggle.active {
                    true => (ON_ICON, theme.active),
                    false => (OFF_ICON, theme.text_faded),
                };
                ListItem::new(Line::from_iter([
                    Span::from(format!("{icon} ")).fg(color),
                    Span::from(toggle.clip.label.clone()).fg(theme.text_focused),
                ]))
            }
            GroupItem::ShowMore => ListItem::new(
                Line::from(format!("{MORE_ICON} Show More")).fg(theme.text_secondary),
            ),
        })
        .collect::<Vec<_>>();

    let border = match is_selected {
        true => theme.border,
        false => theme.text_faded,
    };

    let block = Block::bordered()
        .border_type(BorderType::Plain)
        .border_style(border)
        .title(Line::from(format!(" {} ", group.name)).fg(theme.text_secondary));

    let highlight = match is_selected {
        true => Style::new().fg(Color::Black).bg(theme.text_highlighted),
        false => Style::new(),
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_spacing(HighlightSpacing::Never);
    StatefulWidget::render(list, area, buf, &mut group.pos);
}

fn empty_message<'a>(msg: &'a str, theme: &DisplayTheme) -> Paragraph<'a> {
    Paragraph::new(msg)
        .wrap(Wrap { trim: true })
        .centered()
        .fg(theme.text_faded)
}
