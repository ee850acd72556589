//! Colección genérica en memoria
//!
//! Base común de los repositorios: orden de inserción, búsqueda lineal por
//! id y copias defensivas en las lecturas. No es segura para varios
//! escritores concurrentes; quien la comparta debe envolverla en un lock.

use crate::models::status::HasStatus;

/// Entidad almacenable en una colección en memoria
pub trait Entity: Clone {
    /// Identificador usado por `get_by_id` / `delete`
    fn id(&self) -> &str;

    /// Campos textuales que recorre `search`
    fn search_fields(&self) -> Vec<&str>;
}

/// `term` ya debe venir en minúsculas
pub fn matches_term<E: Entity>(item: &E, term: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copia de la colección en orden de inserción
    pub fn list(&self) -> Vec<E> {
        self.items.clone()
    }

    /// Vista sin copia para cálculos internos
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn get_by_id(&self, id: &str) -> Option<E> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut E> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.items.iter_mut()
    }

    /// Agrega al final y devuelve una copia
    pub fn push(&mut self, item: E) -> E {
        self.items.push(item.clone());
        item
    }

    /// Elimina por id; `false` si no existía
    pub fn delete(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Búsqueda por subcadena sin distinguir mayúsculas
    pub fn search(&self, term: &str) -> Vec<E> {
        let term = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| matches_term(*item, &term))
            .cloned()
            .collect()
    }
}

impl<E: Entity + HasStatus> InMemoryRepository<E> {
    pub fn filter_by_status(&self, status: E::Status) -> Vec<E> {
        self.items
            .iter()
            .filter(|item| item.status() == status)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
        done: bool,
    }

    impl Entity for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.text.as_str()]
        }
    }

    impl HasStatus for Note {
        type Status = bool;

        fn status(&self) -> bool {
            self.done
        }
    }

    fn note(id: &str, text: &str, done: bool) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn test_list_is_a_copy_in_insertion_order() {
        let mut repo = InMemoryRepository::new();
        repo.push(note("1", "Alinhamento", false));
        repo.push(note("2", "Balanceamento", true));

        let mut listed = repo.list();
        listed.clear();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.list()[0].id, "1");
    }

    #[test]
    fn test_delete_missing_keeps_length() {
        let mut repo = InMemoryRepository::from_items(vec![note("1", "a", false)]);
        assert!(!repo.delete("99"));
        assert_eq!(repo.len(), 1);
        assert!(repo.delete("1"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let repo = InMemoryRepository::from_items(vec![
            note("1", "Troca de ÓLEO", false),
            note("2", "Freios", false),
        ]);
        assert_eq!(repo.search("óleo").len(), 1);
        assert_eq!(repo.search("FREI")[0].id, "2");
        assert!(repo.search("suspensão").is_empty());
    }

    #[test]
    fn test_filter_by_status() {
        let repo = InMemoryRepository::from_items(vec![
            note("1", "a", true),
            note("2", "b", false),
            note("3", "c", true),
        ]);
        assert_eq!(repo.filter_by_status(true).len(), 2);
        assert_eq!(repo.filter_by_status(false)[0].id, "2");
    }
}
