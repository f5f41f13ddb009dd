//! Single-entity selection used by the picker mode.
//!
//! Selecting an entity selects it; selecting the same entity again clears the
//! selection; selecting another entity moves the selection. Identity is the
//! backend `dao_id`; the button bridge keys its refresh on the address.

use super::dao::Dao;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(Dao),
}

impl Selection {
    /// Applies one selection gesture on `dao`.
    pub fn toggle(&mut self, dao: &Dao) {
        let next = match self {
            Self::Selected(current) if current.dao_id == dao.dao_id => Self::Unselected,
            _ => Self::Selected(dao.clone()),
        };
        tracing::debug!(
            dao_id = dao.dao_id,
            selected = matches!(next, Self::Selected(_)),
            "selection toggled"
        );
        *self = next;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Dao> {
        match self {
            Self::Unselected => None,
            Self::Selected(dao) => Some(dao),
        }
    }

    /// Address of the selected entity, the identity the button bridge tracks.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.selected().map(Dao::address)
    }

    /// Whether `dao` carries the selected entity's id.
    #[must_use]
    pub fn is_selected(&self, dao: &Dao) -> bool {
        self.selected().is_some_and(|current| current.dao_id == dao.dao_id)
    }

    /// Clears the selection when its entity left the data set.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn retain_in(&mut self, daos: &[Dao]) -> bool {
        let stale = self
            .key()
            .is_some_and(|key| !daos.iter().any(|dao| dao.address() == key));
        if stale {
            tracing::debug!("selected dao no longer present, clearing selection");
            *self = Self::Unselected;
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_reselect_clears() {
        let alpha = Dao::new("0xA", "Alpha").with_id(1);
        let mut selection = Selection::default();

        selection.toggle(&alpha);
        assert!(selection.is_selected(&alpha));

        selection.toggle(&alpha);
        assert_eq!(selection, Selection::Unselected);
    }

    #[test]
    fn selecting_other_entity_moves_selection() {
        let alpha = Dao::new("0xA", "Alpha").with_id(1);
        let beta = Dao::new("0xB", "Beta").with_id(2);
        let mut selection = Selection::default();

        selection.toggle(&alpha);
        selection.toggle(&beta);
        assert_eq!(selection.key(), Some("0xB"));
        assert!(!selection.is_selected(&alpha));
    }

    #[test]
    fn identity_follows_dao_id_not_address() {
        let first = Dao::new("0xA", "Alpha").with_id(7);
        let moved = Dao::new("0xA2", "Alpha").with_id(7);
        let mut selection = Selection::default();

        selection.toggle(&first);
        assert!(selection.is_selected(&moved));

        selection.toggle(&moved);
        assert_eq!(selection, Selection::Unselected);
    }

    #[test]
    fn retain_clears_missing_entity() {
        let alpha = Dao::new("0xA", "Alpha").with_id(1);
        let mut selection = Selection::Selected(alpha.clone());

        assert!(!selection.retain_in(&[alpha]));
        assert!(selection.retain_in(&[Dao::new("0xB", "Beta").with_id(2)]));
        assert!(selection.selected().is_none());
    }
}
