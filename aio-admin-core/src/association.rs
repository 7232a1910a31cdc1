//! Associated-model selection
//!
//! A model can be associated with other known model IDs (structured mode),
//! or with a free-text, comma separated list (custom mode). The two modes are
//! mutually exclusive: entering custom mode unchecks and disables every known
//! row together with search and select-all.
//!
//! [`AssociationSelector`] holds that state for one open form. It knows
//! nothing about rendering or focus; the UI reads it and forwards user
//! actions to it.

use std::collections::BTreeSet;

use crate::error::ValidationError;

/// Identifier of the synthetic "custom" row.
pub const CUSTOM_ENTRY: &str = "__CUSTOM__";

/// Separator used when a stored set is shown as custom text.
const CUSTOM_JOIN: &str = ", ";

/// Deduplicate and sort known model IDs, dropping the model being edited.
pub fn build_universe<I, S>(ids: I, exclude: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
    set.remove(exclude);
    set.into_iter().collect()
}

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRow {
    pub id: String,
    pub checked: bool,
}

/// Selection state of the association field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationSelector {
    rows: Vec<AssociationRow>,
    search: String,
    custom_mode: bool,
    custom_value: String,
}

impl AssociationSelector {
    /// Open the selector over `universe` (as returned by [`build_universe`])
    /// with the associations currently stored on the model.
    ///
    /// If any stored ID is unknown, the whole stored set becomes the custom
    /// value. Otherwise the stored IDs are checked and listed first.
    pub fn open(universe: Vec<String>, stored: &[String]) -> Self {
        let has_unknown = stored
            .iter()
            .any(|id| universe.binary_search(id).is_err());

        if has_unknown {
            let rows = universe
                .into_iter()
                .map(|id| AssociationRow { id, checked: false })
                .collect();
            return Self {
                rows,
                search: String::new(),
                custom_mode: true,
                custom_value: stored.join(CUSTOM_JOIN),
            };
        }

        let mut rows: Vec<AssociationRow> = universe
            .into_iter()
            .map(|id| {
                let checked = stored.contains(&id);
                AssociationRow { id, checked }
            })
            .collect();
        // stable sort keeps each group lexicographic
        rows.sort_by_key(|row| !row.checked);

        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[AssociationRow] {
        &self.rows
    }

    /// No known model besides the one being edited.
    pub fn is_universe_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_custom_mode(&self) -> bool {
        self.custom_mode
    }

    pub fn custom_value(&self) -> &str {
        &self.custom_value
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Known rows, search box and select-all are usable only outside custom mode.
    pub fn is_structured_enabled(&self) -> bool {
        !self.custom_mode
    }

    /// Whether a row passes the current search filter.
    pub fn is_visible(&self, row: &AssociationRow) -> bool {
        self.search.is_empty() || row.id.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Indices into [`rows`](Self::rows) that pass the search filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.is_visible(row))
            .map(|(i, _)| i)
            .collect()
    }

    /// Change the search filter. Ignored in custom mode.
    pub fn set_search(&mut self, query: impl Into<String>) {
        if self.custom_mode {
            return;
        }
        self.search = query.into();
    }

    /// Flip one known row. Ignored in custom mode.
    pub fn toggle_row(&mut self, index: usize) {
        if self.custom_mode {
            return;
        }
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = !row.checked;
        }
    }

    /// Check every visible row, or uncheck them all if they already are.
    ///
    /// Hidden rows keep their state. With no visible rows nothing changes.
    pub fn select_all(&mut self) {
        if self.custom_mode {
            return;
        }
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        let all_checked = visible.iter().all(|&i| self.rows[i].checked);
        for i in visible {
            self.rows[i].checked = !all_checked;
        }
    }

    /// Enter or leave custom mode.
    ///
    /// Entering unchecks every known row; leaving clears the custom text.
    /// Previously checked rows are not restored.
    pub fn set_custom_mode(&mut self, enabled: bool) {
        self.custom_mode = enabled;
        if enabled {
            for row in &mut self.rows {
                row.checked = false;
            }
        } else {
            self.custom_value.clear();
        }
    }

    pub fn toggle_custom(&mut self) {
        self.set_custom_mode(!self.custom_mode);
    }

    /// Edit the custom text. Ignored outside custom mode.
    pub fn push_custom_char(&mut self, c: char) {
        if self.custom_mode {
            self.custom_value.push(c);
        }
    }

    pub fn pop_custom_char(&mut self) {
        if self.custom_mode {
            self.custom_value.pop();
        }
    }

    /// Checked known IDs in display order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.id.clone())
            .collect()
    }

    /// Resolve the associations to submit.
    pub fn validate(&self) -> Result<Vec<String>, ValidationError> {
        let structured = self.checked_ids();

        if self.custom_mode && !structured.is_empty() {
            return Err(ValidationError::AssociationConflict);
        }
        if !self.custom_mode && structured.is_empty() {
            return Err(ValidationError::AssociationRequired);
        }
        if !self.custom_mode {
            return Ok(structured);
        }

        let ids: Vec<String> = self
            .custom_value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        if ids.is_empty() {
            return Err(ValidationError::CustomValueRequired);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn universe() -> Vec<String> {
        build_universe(["gpt", "claude", "gemini", "gpt", "codex"], "")
    }

    #[test]
    fn universe_is_sorted_deduped_without_self() {
        assert_eq!(
            build_universe(["b", "a", "c", "a"], "c"),
            ids(&["a", "b"])
        );
    }

    #[test]
    fn stored_ids_float_to_top() {
        let sel = AssociationSelector::open(universe(), &ids(&["gpt", "codex"]));
        let order: Vec<&str> = sel.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["codex", "gpt", "claude", "gemini"]);
        assert!(!sel.is_custom_mode());
        assert_eq!(sel.checked_ids(), ids(&["codex", "gpt"]));
    }

    #[test]
    fn any_unknown_id_turns_whole_set_custom() {
        let sel = AssociationSelector::open(universe(), &ids(&["gpt", "gpt-*"]));
        assert!(sel.is_custom_mode());
        assert_eq!(sel.custom_value(), "gpt, gpt-*");
        assert!(sel.checked_ids().is_empty());
    }

    #[test]
    fn search_only_changes_visibility() {
        let mut sel = AssociationSelector::open(universe(), &ids(&["gpt"]));
        sel.set_search("GE");
        assert_eq!(sel.visible_indices().len(), 1);
        assert_eq!(sel.rows().len(), 4);
        assert_eq!(sel.checked_ids(), ids(&["gpt"]));
    }

    #[test]
    fn select_all_targets_visible_rows_only() {
        let mut sel = AssociationSelector::open(universe(), &[]);
        sel.set_search("c");
        sel.select_all();
        assert_eq!(sel.checked_ids(), ids(&["claude", "codex"]));

        sel.set_search("");
        sel.select_all();
        assert_eq!(sel.checked_ids().len(), 4);
    }

    #[test]
    fn select_all_twice_restores() {
        for stored in [ids(&[]), universe()] {
            let mut sel = AssociationSelector::open(universe(), &stored);
            let before = sel.clone();
            sel.select_all();
            assert_ne!(sel, before);
            sel.select_all();
            assert_eq!(sel, before);
        }
    }

    #[test]
    fn select_all_with_nothing_visible_is_noop() {
        let mut sel = AssociationSelector::open(universe(), &ids(&["gpt"]));
        sel.set_search("zzz");
        let before = sel.clone();
        sel.select_all();
        assert_eq!(sel, before);
    }

    #[test]
    fn custom_mode_is_exclusive() {
        for stored in [ids(&[]), ids(&["gpt"]), universe()] {
            let mut sel = AssociationSelector::open(universe(), &stored);
            sel.set_custom_mode(true);
            assert!(sel.rows().iter().all(|r| !r.checked));
            assert!(!sel.is_structured_enabled());

            sel.toggle_row(0);
            sel.select_all();
            sel.set_search("g");
            assert!(sel.checked_ids().is_empty());
            assert_eq!(sel.search(), "");

            sel.push_custom_char('x');
            sel.set_custom_mode(false);
            assert!(sel.is_structured_enabled());
            assert_eq!(sel.custom_value(), "");
            assert!(sel.checked_ids().is_empty());
        }
    }

    #[test]
    fn validate_requires_a_selection() {
        let sel = AssociationSelector::open(universe(), &[]);
        assert_eq!(sel.validate(), Err(ValidationError::AssociationRequired));
    }

    #[test]
    fn validate_rejects_mixed_state() {
        let mut sel = AssociationSelector::open(universe(), &ids(&["gpt"]));
        sel.custom_mode = true;
        assert_eq!(sel.validate(), Err(ValidationError::AssociationConflict));
    }

    #[test]
    fn validate_custom_value() {
        let mut sel = AssociationSelector::open(universe(), &[]);
        sel.toggle_custom();
        for c in " , ".chars() {
            sel.push_custom_char(c);
        }
        assert_eq!(sel.validate(), Err(ValidationError::CustomValueRequired));

        sel.set_custom_mode(false);
        sel.set_custom_mode(true);
        for c in " b-*, ,a ,b-*".chars() {
            sel.push_custom_char(c);
        }
        assert_eq!(sel.validate().unwrap(), ids(&["b-*", "a", "b-*"]));
    }

    #[test]
    fn validate_structured_returns_checked() {
        let mut sel = AssociationSelector::open(universe(), &[]);
        sel.toggle_row(1);
        assert_eq!(sel.validate().unwrap(), ids(&["codex"]));
    }
}
