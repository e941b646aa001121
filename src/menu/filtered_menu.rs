use crate::menu::{filter_by_role, MenuNode};
use crate::Role;

/// Keeps the filtered view of a static menu tree, recomputed only when the role changes.
pub struct FilteredMenu<'a> {
    source: &'a [MenuNode],
    cached: Option<(Option<Role>, Vec<MenuNode>)>,
}

impl<'a> FilteredMenu<'a> {
    pub fn new(source: &'a [MenuNode]) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    pub fn source(&self) -> &'a [MenuNode] {
        self.source
    }

    pub fn view(&mut self, role: Option<Role>) -> &[MenuNode] {
        let is_stale = !matches!(&self.cached, Some((cached_role, _)) if *cached_role == role);
        if is_stale {
            self.cached = Some((role, filter_by_role(self.source, role)));
        }
        match &self.cached {
            Some((_, nodes)) => nodes,
            None => &[],
        }
    }

    /// The role of the last computed view, `None` if no view was computed yet.
    pub fn cached_role(&self) -> Option<Option<Role>> {
        self.cached.as_ref().map(|(role, _)| *role)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::menu::default_sidebar;

    #[test]
    fn view_matches_filter_for_any_role_sequence() {
        let mut menu = FilteredMenu::new(default_sidebar());
        assert_eq!(menu.cached_role(), None);

        let sequence = [
            None,
            Some(Role::General),
            Some(Role::General),
            Some(Role::Administrador),
            None,
            Some(Role::Administrador),
        ];
        for role in sequence {
            let expected = filter_by_role(default_sidebar(), role);
            assert_eq!(menu.view(role), expected.as_slice());
            assert_eq!(menu.cached_role(), Some(role));
        }
    }

    #[test]
    fn source_is_shared() {
        let menu = FilteredMenu::new(default_sidebar());
        assert!(std::ptr::eq(menu.source(), default_sidebar()));
    }
}
