use super::{ToggleId, UiEvent};
use crate::{
    domain::ClipDescriptor,
    key_handler::{Director, MoveDirection},
    library::Catalog,
};
use crossbeam_channel::Sender;
use ratatui::widgets::ListState;
use std::sync::Arc;

pub struct ClipToggle {
    pub id: ToggleId,
    pub clip: Arc<ClipDescriptor>,
    pub active: bool,
}

pub enum GroupItem<'a> {
    Toggle(&'a ClipToggle),
    ShowMore,
}

/// One subcategory: its toggles, followed by a "Show More" control while
/// deferred clips remain.
pub struct GroupView {
    pub name: String,
    pub toggles: Vec<ClipToggle>,
    deferred: Vec<Arc<ClipDescriptor>>,
    pub pos: ListState,
}

pub struct TabView {
    pub name: String,
    pub groups: Vec<GroupView>,
    pub group_pos: usize,
    /// First group drawn; kept by the renderer so the selection stays in view
    pub group_offset: usize,
}

pub struct CatalogView {
    pub tabs: Vec<TabView>,
    selected: usize,
    next_id: usize,
    events: Sender<UiEvent>,
}

impl GroupView {
    pub fn has_more(&self) -> bool {
        !self.deferred.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.toggles.len() + self.has_more() as usize
    }

    pub fn items(&self) -> impl Iterator<Item = GroupItem<'_>> {
        self.toggles
            .iter()
            .map(GroupItem::Toggle)
            .chain(self.has_more().then_some(GroupItem::ShowMore))
    }

    pub fn selected(&self) -> Option<usize> {
        self.pos.selected()
    }

    fn scroll(&mut self, director: &Director) {
        let len = self.item_count();
        if len == 0 {
            return;
        }

        let current = self.pos.selected().unwrap_or(0);
        let new = match director {
            Director::Up(n) => current.saturating_sub(*n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.pos.select(Some(new));
    }
}

impl CatalogView {
    pub fn new(catalog: &Catalog, events: Sender<UiEvent>) -> Self {
        let mut next_id = 0;
        let mut make_toggle = |clip: &Arc<ClipDescriptor>| {
            next_id += 1;
            ClipToggle {
                id: ToggleId(next_id),
                clip: Arc::clone(clip),
                active: false,
            }
        };

        let tabs = catalog
            .categories
            .iter()
            .map(|(name, category)| TabView {
                name: name.clone(),
                groups: category
                    .groups
                    .iter()
                    .map(|(group_name, group)| {
                        let toggles = group.visible.iter().map(&mut make_toggle).collect();
                        let mut pos = ListState::default();
                        if !group.is_empty() {
                            pos.select(Some(0));
                        }

                        GroupView {
                            name: group_name.clone(),
                            toggles,
                            deferred: group.deferred.clone(),
                            pos,
                        }
                    })
                    .collect(),
                group_pos: 0,
                group_offset: 0,
            })
            .collect();

        CatalogView {
            tabs,
            selected: 0,
            next_id,
            events,
        }
    }

    pub fn selected_tab(&self) -> usize {
        self.selected
    }

    pub fn current_tab(&self) -> Option<&TabView> {
        self.tabs.get(self.selected)
    }

    pub fn current_tab_mut(&mut self) -> Option<&mut TabView> {
        self.tabs.get_mut(self.selected)
    }

    fn current_group_mut(&mut self) -> Option<&mut GroupView> {
        let tab = self.tabs.get_mut(self.selected)?;
        tab.groups.get_mut(tab.group_pos)
    }

    pub fn select_tab(&mut self, idx: usize) {
        if idx < self.tabs.len() {
            self.selected = idx;
        }
    }

    pub fn cycle_tab(&mut self, dir: MoveDirection) {
        let len = self.tabs.len();
        if len == 0 {
            return;
        }

        self.selected = match dir {
            MoveDirection::Prev => (self.selected + len - 1) % len,
            MoveDirection::Next => (self.selected + 1) % len,
        };
    }

    pub fn shift_group(&mut self, dir: MoveDirection) {
        if let Some(tab) = self.current_tab_mut() {
            let len = tab.groups.len();
            if len == 0 {
                return;
            }
            tab.group_pos = match dir {
                MoveDirection::Prev => tab.group_pos.saturating_sub(1),
                MoveDirection::Next => (tab.group_pos + 1).min(len - 1),
            };
        }
    }

    pub fn scroll(&mut self, director: &Director) {
        if let Some(group) = self.current_group_mut() {
            group.scroll(director);
        }
    }

    /// Fire the selected control: flip a toggle, or reveal the rest of the
    /// group when "Show More" is selected.
    pub fn activate(&mut self) {
        let Some((tab, group)) = self
            .tabs
            .get(self.selected)
            .map(|t| (self.selected, t.group_pos))
        else {
            return;
        };

        let Some(item) = self.tabs[tab]
            .groups
            .get(group)
            .and_then(|g| g.selected())
        else {
            return;
        };

        let toggle_count = self.tabs[tab].groups[group].toggles.len();
        match item < toggle_count {
            true => {
                let id = self.tabs[tab].groups[group].toggles[item].id;
                self.toggle(id);
            }
            false => {
                self.reveal_more(tab, group);
            }
        }
    }

    /// Flip a toggle and announce the new state.
    pub fn toggle(&mut self, id: ToggleId) {
        let Some(toggle) = self.find_mut(id) else {
            return;
        };

        toggle.active = !toggle.active;
        let event = match toggle.active {
            true => UiEvent::ToggleOn {
                id,
                clip: Arc::clone(&toggle.clip),
            },
            false => UiEvent::ToggleOff(id),
        };

        let _ = self.events.send(event);
    }

    /// Update a toggle without announcing it, for sessions that ended
    /// somewhere else.
    pub fn set_toggle(&mut self, id: ToggleId, active: bool) {
        if let Some(toggle) = self.find_mut(id) {
            toggle.active = active;
        }
    }

    /// Materialize the deferred clips of one group. Works once; afterwards
    /// the group has nothing left to reveal and its "Show More" is gone.
    pub fn reveal_more(&mut self, tab: usize, group: usize) -> usize {
        let Some(view) = self.tabs.get_mut(tab).and_then(|t| t.groups.get_mut(group)) else {
            return 0;
        };

        let deferred = std::mem::take(&mut view.deferred);
        let count = deferred.len();
        if count == 0 {
            return 0;
        }

        let first_revealed = view.toggles.len();
        for clip in deferred {
            self.next_id += 1;
            view.toggles.push(ClipToggle {
                id: ToggleId(self.next_id),
                clip,
                active: false,
            });
        }
        // The selection sat on "Show More"; move it to the first new clip
        view.pos.select(Some(first_revealed));

        let _ = self.events.send(UiEvent::Revealed {
            group: view.name.clone(),
            count,
        });

        count
    }

    pub fn find(&self, id: ToggleId) -> Option<&ClipToggle> {
        self.tabs
            .iter()
            .flat_map(|t| t.groups.iter())
            .flat_map(|g| g.toggles.iter())
            .find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: ToggleId) -> Option<&mut ClipToggle> {
        self.tabs
            .iter_mut()
            .flat_map(|t| t.groups.iter_mut())
            .flat_map(|g| g.toggles.iter_mut())
            .find(|t| t.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.tabs
            .iter()
            .flat_map(|t| t.groups.iter())
            .flat_map(|g| g.toggles.iter())
            .filter(|t| t.active)
            .count()
    }
}
