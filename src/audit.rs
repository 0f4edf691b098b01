use std::collections::HashSet;

use serde::Serialize;

use crate::slug::{slugify, unique_slug};

/// Slug a company derives from its name, and the one it would get if slugs
/// had to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugAssignment {
    pub co_rowid: i64,
    pub company_name: String,
    pub derived_slug: String,
    pub unique_slug: String,
}

impl SlugAssignment {
    /// An earlier company already derives the same slug.
    pub fn is_collision(&self) -> bool {
        self.derived_slug != self.unique_slug
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SlugAudit {
    pub assignments: Vec<SlugAssignment>,
}

impl SlugAudit {
    /// Assign slugs in the given order; the first company to claim a slug
    /// keeps it and later ones get a numeric suffix.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut taken = HashSet::new();
        let assignments = rows
            .into_iter()
            .map(|(co_rowid, name)| {
                let company_name: String = name.into();
                let derived_slug = slugify(Some(&company_name));
                let unique = unique_slug(&derived_slug, &taken);
                taken.insert(unique.clone());
                SlugAssignment {
                    co_rowid,
                    company_name,
                    derived_slug,
                    unique_slug: unique,
                }
            })
            .collect();

        Self { assignments }
    }

    pub fn collisions(&self) -> impl Iterator<Item = &SlugAssignment> {
        self.assignments.iter().filter(|assignment| assignment.is_collision())
    }

    pub fn collision_count(&self) -> usize {
        self.collisions().count()
    }
}
