use contracts::system::users::{UserAccount, USERS};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Role,
    LastLogin,
}

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<UserAccount>,
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_ascending: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: USERS.clone(),
            search_query: String::new(),
            sort_field: SortField::Name,
            sort_ascending: true,
        }
    }
}

impl UsersListState {
    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
    }

    pub fn sort(&self, items: &mut [UserAccount]) {
        items.sort_by(|a, b| {
            let cmp = match self.sort_field {
                SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortField::Role => a.role.label().cmp(b.role.label()),
                SortField::LastLogin => a.last_login_at.cmp(&b.last_login_at),
            };
            if self.sort_ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }

    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        match (self.sort_field == field, self.sort_ascending) {
            (false, _) => "",
            (true, true) => " \u{25b2}",
            (true, false) => " \u{25bc}",
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_flips_direction_on_same_field() {
        let mut state = UsersListState::default();
        state.toggle_sort(SortField::Name);
        assert!(!state.sort_ascending);

        state.toggle_sort(SortField::Role);
        assert_eq!(state.sort_field, SortField::Role);
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut state = UsersListState::default();
        state.sort_ascending = false;
        let mut items = state.items.clone();
        state.sort(&mut items);
        assert_eq!(items[0].name, "Pedro Reyes");
        assert_eq!(state.sort_indicator(SortField::Name), " \u{25bc}");
        assert_eq!(state.sort_indicator(SortField::Role), "");
    }
}
