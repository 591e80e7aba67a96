use contracts::domain::a005_scheme::{Scheme, SchemeId};

/// Scheme list of the schemes page. New schemes go on top.
#[derive(Debug, Clone, Default)]
pub struct SchemeRepository {
    schemes: Vec<Scheme>,
}

impl SchemeRepository {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    pub fn list_all(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn list_all_mut(&mut self) -> &mut [Scheme] {
        &mut self.schemes
    }

    pub fn get_by_id(&self, id: &SchemeId) -> Option<&Scheme> {
        self.schemes.iter().find(|s| &s.id == id)
    }

    pub fn add(&mut self, scheme: Scheme) {
        self.schemes.insert(0, scheme);
    }
}
